use crate::bitboard::{BitBoard, EMPTY};
use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (-1, -2),
    (1, -2),
    (2, -1),
    (-2, -1),
    (2, 1),
    (-2, 1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// The rules for one kind of piece.
///
/// Every rule is a pure function of the board: nothing here changes state.
pub trait PieceType {
    fn into_piece() -> Piece;

    /// Destinations reachable without capturing.  Every one of them is empty.
    fn quiet_moves(board: &Board, src: Square, color: Color) -> BitBoard;

    /// Destinations that capture an enemy piece, en passant included.  An enemy king is never
    /// one of them.
    fn attack_moves(board: &Board, src: Square, color: Color) -> BitBoard;

    /// Every square this piece strikes, whatever stands there.  Check detection is built on this.
    fn threats(board: &Board, src: Square, color: Color) -> BitBoard;
}

pub struct PawnType;
pub struct BishopType;
pub struct KnightType;
pub struct RookType;
pub struct QueenType;
pub struct KingType;

/// Can a piece of `color` take whatever stands on `dest`?
#[inline]
fn capturable(board: &Board, dest: Square, color: Color) -> bool {
    match board.cell(dest).occupant() {
        Some((piece, owner)) => owner != color && piece != Piece::King,
        None => false,
    }
}

/// Walk from `src` in one direction.  Returns the empty squares passed over and the first
/// occupied square, if the walk hit one before the edge of the board.
fn ray(board: &Board, src: Square, (file_delta, rank_delta): (i8, i8)) -> (BitBoard, Option<Square>) {
    let mut empties = EMPTY;
    let mut current = src;
    while let Some(next) = current.offset(file_delta, rank_delta) {
        if !board.is_empty(next) {
            return (empties, Some(next));
        }
        empties |= BitBoard::from_square(next);
        current = next;
    }
    (empties, None)
}

fn slider_quiets(board: &Board, src: Square, directions: &[(i8, i8)]) -> BitBoard {
    directions
        .iter()
        .fold(EMPTY, |moves, dir| moves | ray(board, src, *dir).0)
}

fn slider_attacks(board: &Board, src: Square, color: Color, directions: &[(i8, i8)]) -> BitBoard {
    directions.iter().fold(EMPTY, |moves, dir| match ray(board, src, *dir).1 {
        Some(blocker) if capturable(board, blocker, color) => moves | BitBoard::from_square(blocker),
        _ => moves,
    })
}

fn slider_threats(board: &Board, src: Square, directions: &[(i8, i8)]) -> BitBoard {
    directions.iter().fold(EMPTY, |moves, dir| {
        let (empties, blocker) = ray(board, src, *dir);
        moves | empties | BitBoard::from_maybe_square(blocker)
    })
}

fn leaper_targets(src: Square, offsets: &[(i8, i8)]) -> BitBoard {
    offsets
        .iter()
        .filter_map(|(file_delta, rank_delta)| src.offset(*file_delta, *rank_delta))
        .collect()
}

fn leaper_quiets(board: &Board, src: Square, offsets: &[(i8, i8)]) -> BitBoard {
    leaper_targets(src, offsets)
        .filter(|dest| board.is_empty(*dest))
        .collect()
}

fn leaper_attacks(board: &Board, src: Square, color: Color, offsets: &[(i8, i8)]) -> BitBoard {
    leaper_targets(src, offsets)
        .filter(|dest| capturable(board, *dest, color))
        .collect()
}

/// Step a pawn forward up to `steps` times, stopping at the first occupied square.
fn pawn_advance(board: &Board, from: Square, color: Color, steps: u8) -> BitBoard {
    if steps == 0 {
        return EMPTY;
    }
    match from.forward(color) {
        Some(next) if board.is_empty(next) => {
            BitBoard::from_square(next) | pawn_advance(board, next, color, steps - 1)
        }
        _ => EMPTY,
    }
}

impl PawnType {
    /// The landing squares of en-passant captures available to the pawn on `src`.
    pub fn en_passant_moves(board: &Board, src: Square, color: Color) -> BitBoard {
        [src.left(), src.right()]
            .iter()
            .flatten()
            .filter(|side| board.cell(**side).occupant() == Some((Piece::Pawn, !color)))
            .filter_map(|side| board.cell(*side).en_passant().target())
            .filter(|target| board.is_empty(*target))
            .collect()
    }

    fn diagonals(src: Square, color: Color) -> BitBoard {
        leaper_targets(src, &[(-1, color.forward_delta()), (1, color.forward_delta())])
    }
}

impl PieceType for PawnType {
    fn into_piece() -> Piece {
        Piece::Pawn
    }

    fn quiet_moves(board: &Board, src: Square, color: Color) -> BitBoard {
        let steps = if board.cell(src).first_move() { 2 } else { 1 };
        pawn_advance(board, src, color, steps)
    }

    fn attack_moves(board: &Board, src: Square, color: Color) -> BitBoard {
        let captures: BitBoard = PawnType::diagonals(src, color)
            .filter(|dest| capturable(board, *dest, color))
            .collect();
        captures | PawnType::en_passant_moves(board, src, color)
    }

    fn threats(_board: &Board, src: Square, color: Color) -> BitBoard {
        PawnType::diagonals(src, color)
    }
}

impl PieceType for KnightType {
    fn into_piece() -> Piece {
        Piece::Knight
    }

    fn quiet_moves(board: &Board, src: Square, _color: Color) -> BitBoard {
        leaper_quiets(board, src, &KNIGHT_OFFSETS)
    }

    fn attack_moves(board: &Board, src: Square, color: Color) -> BitBoard {
        leaper_attacks(board, src, color, &KNIGHT_OFFSETS)
    }

    fn threats(_board: &Board, src: Square, _color: Color) -> BitBoard {
        leaper_targets(src, &KNIGHT_OFFSETS)
    }
}

impl PieceType for BishopType {
    fn into_piece() -> Piece {
        Piece::Bishop
    }

    fn quiet_moves(board: &Board, src: Square, _color: Color) -> BitBoard {
        slider_quiets(board, src, &BISHOP_DIRECTIONS)
    }

    fn attack_moves(board: &Board, src: Square, color: Color) -> BitBoard {
        slider_attacks(board, src, color, &BISHOP_DIRECTIONS)
    }

    fn threats(board: &Board, src: Square, _color: Color) -> BitBoard {
        slider_threats(board, src, &BISHOP_DIRECTIONS)
    }
}

impl PieceType for RookType {
    fn into_piece() -> Piece {
        Piece::Rook
    }

    fn quiet_moves(board: &Board, src: Square, _color: Color) -> BitBoard {
        slider_quiets(board, src, &ROOK_DIRECTIONS)
    }

    fn attack_moves(board: &Board, src: Square, color: Color) -> BitBoard {
        slider_attacks(board, src, color, &ROOK_DIRECTIONS)
    }

    fn threats(board: &Board, src: Square, _color: Color) -> BitBoard {
        slider_threats(board, src, &ROOK_DIRECTIONS)
    }
}

impl PieceType for QueenType {
    fn into_piece() -> Piece {
        Piece::Queen
    }

    fn quiet_moves(board: &Board, src: Square, color: Color) -> BitBoard {
        RookType::quiet_moves(board, src, color) | BishopType::quiet_moves(board, src, color)
    }

    fn attack_moves(board: &Board, src: Square, color: Color) -> BitBoard {
        RookType::attack_moves(board, src, color) | BishopType::attack_moves(board, src, color)
    }

    fn threats(board: &Board, src: Square, color: Color) -> BitBoard {
        RookType::threats(board, src, color) | BishopType::threats(board, src, color)
    }
}

impl PieceType for KingType {
    fn into_piece() -> Piece {
        Piece::King
    }

    fn quiet_moves(board: &Board, src: Square, _color: Color) -> BitBoard {
        leaper_quiets(board, src, &KING_OFFSETS)
    }

    fn attack_moves(board: &Board, src: Square, color: Color) -> BitBoard {
        leaper_attacks(board, src, color, &KING_OFFSETS)
    }

    fn threats(_board: &Board, src: Square, _color: Color) -> BitBoard {
        leaper_targets(src, &KING_OFFSETS)
    }
}

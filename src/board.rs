use crate::bitboard::{BitBoard, EMPTY};
use crate::color::{Color, ALL_COLORS};
use crate::file::ALL_FILES;
use crate::piece::Piece;
use crate::rank::ALL_RANKS;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use arrayvec::ArrayVec;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The most pieces one side can ever have on the board.  Promotion swaps a pawn for another
/// piece, so the count never grows past the starting sixteen.
pub const MAX_PIECES_PER_COLOR: usize = 16;

/// Every piece of one color, along with where it stands.
pub type PieceList = ArrayVec<(Square, Piece), MAX_PIECES_PER_COLOR>;

/// The en-passant bookkeeping attached to a square.
///
/// Only a pawn that just made a double step carries `Active`, and the square it carries is the
/// one behind it: where an enemy pawn lands when it captures en passant.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum EnPassant {
    /// No pawn has ever stood here, or the square is not a pawn's.
    Unset,
    /// A pawn stands here but cannot be captured en passant.
    No,
    /// The pawn here just stepped two squares; capturing it lands on the given square.
    Active(Square),
    /// The capture window for the pawn here has closed.
    Expired,
}

impl EnPassant {
    /// The landing square of an en-passant capture, if the window is still open.
    #[inline]
    pub fn target(&self) -> Option<Square> {
        match *self {
            EnPassant::Active(sq) => Some(sq),
            _ => None,
        }
    }
}

impl Default for EnPassant {
    fn default() -> EnPassant {
        EnPassant::Unset
    }
}

/// One square of the board: what is on it, plus the metadata flags that ride along with it.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default)]
pub struct Cell {
    occupant: Option<(Piece, Color)>,
    first_move: bool,
    en_passant: EnPassant,
}

impl Cell {
    /// An empty cell.
    pub const EMPTY: Cell = Cell {
        occupant: None,
        first_move: false,
        en_passant: EnPassant::Unset,
    };

    /// A freshly placed piece.  Pawns start out with `EnPassant::No`.
    #[inline]
    pub fn new(piece: Piece, color: Color, first_move: bool) -> Cell {
        Cell {
            occupant: Some((piece, color)),
            first_move,
            en_passant: if piece == Piece::Pawn {
                EnPassant::No
            } else {
                EnPassant::Unset
            },
        }
    }

    /// What is standing here?
    #[inline]
    pub fn occupant(&self) -> Option<(Piece, Color)> {
        self.occupant
    }

    /// Has the pawn on this square yet to move?
    #[inline]
    pub fn first_move(&self) -> bool {
        self.first_move
    }

    /// The en-passant state of the pawn on this square.
    #[inline]
    pub fn en_passant(&self) -> EnPassant {
        self.en_passant
    }

    #[inline]
    pub(crate) fn set_first_move(&mut self, first_move: bool) {
        self.first_move = first_move;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, en_passant: EnPassant) {
        self.en_passant = en_passant;
    }

    #[inline]
    pub(crate) fn set_occupant(&mut self, piece: Piece, color: Color) {
        self.occupant = Some((piece, color));
    }
}

/// A representation of a chess board.  That's why you're here, right?
///
/// This is plain data: an 8x8 grid of `Cell`s.  It is cheap to copy, so callers that want to
/// look at a position get their own snapshot.  Only the `Game` changes a board during play.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// Construct a new `Board` that is completely empty.
    /// Note: This does NOT give you the initial position.  Just a blank slate.
    ///
    /// ```
    /// use chess_rules::{Board, ALL_SQUARES};
    ///
    /// let board = Board::new();
    /// assert!(ALL_SQUARES.iter().all(|sq| board.is_empty(*sq)));
    /// ```
    pub fn new() -> Board {
        Board {
            cells: [Cell::EMPTY; NUM_SQUARES],
        }
    }

    /// Look at everything stored for a square.
    #[inline]
    pub fn cell(&self, square: Square) -> &Cell {
        &self.cells[square.to_index()]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, square: Square) -> &mut Cell {
        &mut self.cells[square.to_index()]
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, square: Square, cell: Cell) {
        self.cells[square.to_index()] = cell;
    }

    #[inline]
    pub(crate) fn clear(&mut self, square: Square) {
        self.cells[square.to_index()] = Cell::EMPTY;
    }

    /// What piece is on a particular `Square`?  Is there even one?
    ///
    /// ```
    /// use chess_rules::{Board, Piece, Square};
    ///
    /// let board = Board::default();
    ///
    /// assert_eq!(board.piece_on(Square::A1), Some(Piece::Rook));
    /// assert_eq!(board.piece_on(Square::D1), Some(Piece::Queen));
    /// assert_eq!(board.piece_on(Square::D4), None);
    /// ```
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.cell(square).occupant.map(|(piece, _)| piece)
    }

    /// What color piece is on a particular square?
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.cell(square).occupant.map(|(_, color)| color)
    }

    /// Is nothing standing on this square?
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cell(square).occupant.is_none()
    }

    /// Every square holding a piece of `color`.
    pub fn color_combined(&self, color: Color) -> BitBoard {
        ALL_SQUARES
            .iter()
            .filter(|sq| self.color_on(**sq) == Some(color))
            .copied()
            .collect()
    }

    /// Every occupied square.
    pub fn combined(&self) -> BitBoard {
        ALL_COLORS
            .iter()
            .fold(EMPTY, |bb, color| bb | self.color_combined(*color))
    }

    /// Every piece of `color`, in square order.
    ///
    /// Boards that went through `BoardBuilder` validation never hold more than
    /// `MAX_PIECES_PER_COLOR` pieces per side.
    pub fn pieces(&self, color: Color) -> PieceList {
        self.color_combined(color)
            .filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
            .take(MAX_PIECES_PER_COLOR)
            .collect()
    }

    /// Where is the king of this color?  Scans the whole board.
    ///
    /// ```
    /// use chess_rules::{Board, Color, Square};
    ///
    /// let board = Board::default();
    /// assert_eq!(board.king_square(Color::White), Some(Square::E1));
    /// assert_eq!(board.king_square(Color::Black), Some(Square::E8));
    /// ```
    pub fn king_square(&self, color: Color) -> Option<Square> {
        ALL_SQUARES
            .iter()
            .copied()
            .find(|sq| self.cell(*sq).occupant == Some((Piece::King, color)))
    }
}

impl Default for Board {
    /// The standard starting position.
    #[inline]
    fn default() -> Board {
        let mut board = Board::new();
        for color in ALL_COLORS.iter() {
            for (file, piece) in ALL_FILES.iter().zip(BACK_RANK.iter()) {
                board.set_cell(
                    Square::make_square(color.to_my_backrank(), *file),
                    Cell::new(*piece, *color, false),
                );
                board.set_cell(
                    Square::make_square(color.to_second_rank(), *file),
                    Cell::new(Piece::Pawn, *color, true),
                );
            }
        }
        board
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in ALL_RANKS.iter().rev() {
            write!(f, "{} ", rank)?;
            for file in ALL_FILES.iter() {
                let cell = self.cell(Square::make_square(*rank, *file));
                match cell.occupant {
                    None => write!(f, " . ")?,
                    Some((piece, color)) => {
                        let marker = if cell.en_passant.target().is_some() {
                            "*"
                        } else {
                            " "
                        };
                        write!(f, "{}{} ", marker, piece.to_string(color))?;
                    }
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   A  B  C  D  E  F  G  H")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position() {
        let board = Board::default();
        assert_eq!(board.combined().popcnt(), 32);
        assert_eq!(board.pieces(Color::White).len(), 16);
        assert_eq!(board.pieces(Color::Black).len(), 16);
        assert_eq!(board.piece_on(Square::E8), Some(Piece::King));
        assert_eq!(board.color_on(Square::E8), Some(Color::Black));
        assert_eq!(board.piece_on(Square::C1), Some(Piece::Bishop));
        assert_eq!(board.piece_on(Square::G8), Some(Piece::Knight));
    }

    #[test]
    fn only_pawns_carry_pawn_metadata() {
        let board = Board::default();
        for sq in ALL_SQUARES.iter() {
            let cell = board.cell(*sq);
            match cell.occupant() {
                Some((Piece::Pawn, _)) => {
                    assert!(cell.first_move());
                    assert_eq!(cell.en_passant(), EnPassant::No);
                }
                _ => {
                    assert!(!cell.first_move());
                    assert_eq!(cell.en_passant(), EnPassant::Unset);
                }
            }
        }
    }

    #[test]
    fn display_starting_position() {
        let shown = format!("{}", Board::default());
        let mut lines = shown.lines();
        assert_eq!(lines.next(), Some("8  r  n  b  q  k  b  n  r "));
        assert_eq!(lines.next(), Some("7  p  p  p  p  p  p  p  p "));
    }
}

use crate::board::{Board, Cell, EnPassant, MAX_PIECES_PER_COLOR};
use crate::color::{Color, ALL_COLORS};
use crate::error::Error;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

/// Represents a chess position that has *not* been validated.
///
/// This structure is useful in the following cases:
/// * You are trying to build a chess board manually in code.
/// * The `Board` structure only ever comes from the standard starting position or from play, which
///   will prevent you from placing pieces arbitrarily.  This structure will not.
///
/// ```
/// use chess_rules::{BoardBuilder, Board, Square, Color, Piece};
/// use std::convert::TryFrom;
/// let mut position = BoardBuilder::new();
/// position.piece(Square::A1, Piece::King, Color::White);
/// position.piece(Square::A8, Piece::Rook, Color::Black);
///
/// // You can index the position by the square:
/// assert_eq!(position[Square::A1], Some((Piece::King, Color::White)));
///
/// // Black has no king, so this is no chess position.
/// assert!(Board::try_from(&position).is_err());
///
/// position.piece(Square::H8, Piece::King, Color::Black);
/// assert!(Board::try_from(&position).is_ok());
/// ```
#[derive(Copy, Clone)]
pub struct BoardBuilder {
    pieces: [Option<(Piece, Color)>; NUM_SQUARES],
    first_move: [Option<bool>; NUM_SQUARES],
    en_passant: Option<Square>,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder.
    ///
    /// * No pieces are on the board
    /// * No pawn may be captured en passant
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
            first_move: [None; NUM_SQUARES],
            en_passant: None,
        }
    }

    /// Set a piece on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if need.
    ///
    /// This function can be used on self directly or in a builder pattern.
    ///
    /// ```
    /// use chess_rules::{BoardBuilder, Color, Square, Piece};
    ///
    /// BoardBuilder::new()
    ///              .piece(Square::A1, Piece::Rook, Color::White);
    ///
    /// let mut bb = BoardBuilder::new();
    /// bb.piece(Square::A8, Piece::Rook, Color::Black);
    /// ```
    pub fn piece<'a>(&'a mut self, square: Square, piece: Piece, color: Color) -> &'a mut Self {
        self[square] = Some((piece, color));
        self.first_move[square.to_index()] = None;
        self
    }

    /// Clear a square on the board.
    pub fn clear_square<'a>(&'a mut self, square: Square) -> &'a mut Self {
        self[square] = None;
        self.first_move[square.to_index()] = None;
        if self.en_passant == Some(square) {
            self.en_passant = None;
        }
        self
    }

    /// Override whether the pawn on `square` may still make its double step.
    ///
    /// Without this, a pawn counts as unmoved exactly when it stands on its own second rank.
    pub fn first_move<'a>(&'a mut self, square: Square, first_move: bool) -> &'a mut Self {
        self.first_move[square.to_index()] = Some(first_move);
        self
    }

    /// Mark the pawn on `square` as having just made a double step, so that the opponent may
    /// capture it en passant on the next move.  `None` clears the mark.
    ///
    /// ```
    /// use chess_rules::{BoardBuilder, Board, Square, Color, Piece, EnPassant};
    /// use std::convert::TryInto;
    ///
    /// let board: Board = BoardBuilder::new()
    ///     .piece(Square::E1, Piece::King, Color::White)
    ///     .piece(Square::E8, Piece::King, Color::Black)
    ///     .piece(Square::D5, Piece::Pawn, Color::Black)
    ///     .en_passant(Some(Square::D5))
    ///     .try_into()
    ///     .expect("valid position");
    ///
    /// assert_eq!(board.cell(Square::D5).en_passant(), EnPassant::Active(Square::D6));
    /// ```
    pub fn en_passant<'a>(&'a mut self, square: Option<Square>) -> &'a mut Self {
        self.en_passant = square;
        self
    }

    /// Which pawn, if any, was marked as capturable en passant?
    pub fn get_en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    fn is_valid(&self) -> bool {
        for color in ALL_COLORS.iter() {
            let mine = || self.pieces.iter().filter(move |p| p.map(|(_, c)| c) == Some(*color));
            if mine().count() > MAX_PIECES_PER_COLOR {
                return false;
            }
            if mine().filter(|p| p.map(|(piece, _)| piece) == Some(Piece::King)).count() != 1 {
                return false;
            }
        }

        let pawn_on_backrank = ALL_SQUARES.iter().any(|sq| {
            let rank = sq.get_rank();
            self[*sq].map(|(piece, _)| piece) == Some(Piece::Pawn)
                && (rank == Rank::First || rank == Rank::Eighth)
        });
        if pawn_on_backrank {
            return false;
        }

        match self.en_passant {
            None => true,
            Some(sq) => match self[sq] {
                Some((Piece::Pawn, color)) if sq.get_rank() == color.to_fourth_rank() => {
                    sq.backward(color).map_or(false, |behind| self[behind].is_none())
                }
                _ => false,
            },
        }
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        Board::default().into()
    }
}

impl Index<Square> for BoardBuilder {
    type Output = Option<(Piece, Color)>;

    fn index<'a>(&'a self, index: Square) -> &'a Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Square> for BoardBuilder {
    fn index_mut<'a>(&'a mut self, index: Square) -> &'a mut Self::Output {
        &mut self.pieces[index.to_index()]
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut result = BoardBuilder::new();
        for sq in ALL_SQUARES.iter() {
            let cell = board.cell(*sq);
            if let Some((piece, color)) = cell.occupant() {
                result.piece(*sq, piece, color);
                if piece == Piece::Pawn {
                    result.first_move(*sq, cell.first_move());
                }
                if cell.en_passant().target().is_some() {
                    result.en_passant(Some(*sq));
                }
            }
        }
        result
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        (&board).into()
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &BoardBuilder) -> Result<Self, Self::Error> {
        if !builder.is_valid() {
            return Err(Error::InvalidBoard);
        }

        let mut board = Board::new();
        for sq in ALL_SQUARES.iter() {
            if let Some((piece, color)) = builder[*sq] {
                let first_move = piece == Piece::Pawn
                    && builder.first_move[sq.to_index()]
                        .unwrap_or(sq.get_rank() == color.to_second_rank());
                let mut cell = Cell::new(piece, color, first_move);
                if builder.en_passant == Some(*sq) {
                    if let Some(behind) = sq.backward(color) {
                        cell.set_en_passant(EnPassant::Active(behind));
                    }
                }
                board.set_cell(*sq, cell);
            }
        }
        Ok(board)
    }
}

impl TryFrom<&mut BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &mut BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&*builder)
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&builder)
    }
}

#[cfg(test)]
use std::convert::TryInto;

#[test]
fn check_initial_position() {
    let board: Board = BoardBuilder::default().try_into().unwrap();
    assert_eq!(board, Board::default());
}

#[test]
fn missing_king() {
    let res: Result<Board, _> = BoardBuilder::new()
        .piece(Square::A1, Piece::King, Color::White)
        .try_into();
    assert_eq!(res, Err(Error::InvalidBoard));
}

#[test]
fn two_kings_of_one_color() {
    let res: Result<Board, _> = BoardBuilder::new()
        .piece(Square::A1, Piece::King, Color::White)
        .piece(Square::C1, Piece::King, Color::White)
        .piece(Square::A8, Piece::King, Color::Black)
        .try_into();
    assert_eq!(res, Err(Error::InvalidBoard));
}

#[test]
fn pawn_on_backrank() {
    let res: Result<Board, _> = BoardBuilder::new()
        .piece(Square::A1, Piece::King, Color::White)
        .piece(Square::A8, Piece::King, Color::Black)
        .piece(Square::D8, Piece::Pawn, Color::White)
        .try_into();
    assert_eq!(res, Err(Error::InvalidBoard));
}

#[test]
fn en_passant_needs_a_pawn() {
    let res: Result<Board, _> = BoardBuilder::new()
        .piece(Square::A1, Piece::King, Color::White)
        .piece(Square::A8, Piece::King, Color::Black)
        .piece(Square::D5, Piece::Knight, Color::Black)
        .en_passant(Some(Square::D5))
        .try_into();
    assert_eq!(res, Err(Error::InvalidBoard));
}

#[test]
fn pawns_off_their_second_rank_have_moved() {
    let board: Board = BoardBuilder::new()
        .piece(Square::A1, Piece::King, Color::White)
        .piece(Square::A8, Piece::King, Color::Black)
        .piece(Square::E2, Piece::Pawn, Color::White)
        .piece(Square::E3, Piece::Pawn, Color::White)
        .piece(Square::C7, Piece::Pawn, Color::Black)
        .try_into()
        .unwrap();
    assert!(board.cell(Square::E2).first_move());
    assert!(!board.cell(Square::E3).first_move());
    assert!(board.cell(Square::C7).first_move());
}

#[test]
fn en_passant_pawn_must_have_double_stepped() {
    let mut builder = BoardBuilder::new();
    builder
        .piece(Square::A1, Piece::King, Color::White)
        .piece(Square::A8, Piece::King, Color::Black)
        .piece(Square::D3, Piece::Pawn, Color::Black)
        .piece(Square::E3, Piece::Pawn, Color::White)
        .en_passant(Some(Square::D3));
    assert_eq!(builder.get_en_passant(), Some(Square::D3));
    assert_eq!(Board::try_from(&builder), Err(Error::InvalidBoard));

    builder
        .clear_square(Square::D3)
        .piece(Square::D5, Piece::Pawn, Color::Black)
        .en_passant(Some(Square::D5));
    assert_eq!(builder.get_en_passant(), Some(Square::D5));
    assert!(Board::try_from(&builder).is_ok());

    builder.clear_square(Square::D5);
    assert_eq!(builder.get_en_passant(), None);
}

use crate::chess_move::ChessMove;
use crate::piece::Piece;
use crate::square::Square;
use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Fail, PartialEq)]
pub enum Error {
    /// The square string is not a file letter followed by a rank digit
    #[fail(display = "The string specified does not contain a valid algebraic notation square")]
    InvalidSquare,

    /// An attempt was made to convert a string not equal to "1"-"8" to a rank
    #[fail(display = "The string specified does not contain a valid rank")]
    InvalidRank,

    /// An attempt was made to convert a string not equal to "a"-"h" to a file
    #[fail(display = "The string specified does not contain a valid file")]
    InvalidFile,

    /// The move string is not two squares back to back ("e2e4")
    #[fail(display = "The string specified does not contain a valid move")]
    InvalidMove,

    /// The board created from BoardBuilder was found to be invalid
    #[fail(
        display = "The board specified did not pass sanity checks.  Are you sure each side has exactly one king, no more than sixteen pieces, and no pawns on the back ranks?"
    )]
    InvalidBoard,

    /// Moves were requested for a square with nothing on it
    #[fail(display = "There is no piece on {}", square)]
    NoPieceOnSquare { square: Square },

    /// The piece on the square belongs to the side that is not on move
    #[fail(display = "The piece on {} does not belong to the side to move", square)]
    NotYourTurn { square: Square },

    /// The destination was never offered for the piece being moved
    #[fail(display = "Illegal move: {}", mv)]
    IllegalMove { mv: ChessMove },

    /// A pawn is waiting on the far rank for its replacement piece
    #[fail(display = "The pawn on {} must be promoted before play continues", square)]
    PromotionPending { square: Square },

    /// `promote` was called while no pawn was waiting for it
    #[fail(display = "No pawn is waiting to be promoted")]
    NoPromotionPending,

    /// A pawn can only become a queen, rook, bishop or knight
    #[fail(display = "A pawn cannot be promoted to a {:?}", piece)]
    InvalidPromotion { piece: Piece },

    /// `move_selected` was called without a selection
    #[fail(display = "No piece is selected")]
    NothingSelected,

    /// The game already has a result
    #[fail(display = "The game is over")]
    GameOver,
}

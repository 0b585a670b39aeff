use crate::color::Color;
use crate::error::Error;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a ChessMove in memory: a piece leaves `source` and lands on `dest`.
///
/// Promotion is not part of the move.  A pawn reaching the far rank leaves the game waiting for
/// `Game::promote`.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Eq, Ord, PartialOrd, PartialEq, Default, Debug, Hash)]
pub struct ChessMove {
    source: Square,
    dest: Square,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square` and a destination `Square`.
    #[inline]
    pub fn new(source: Square, dest: Square) -> ChessMove {
        ChessMove { source, dest }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

/// Convert a coordinate string such as "e2e4" to a move.
///
/// ```
/// use chess_rules::{ChessMove, Square};
///
/// let mv = ChessMove::new(Square::E2, Square::E4);
///
/// assert_eq!("e2e4".parse::<ChessMove>().expect("Valid Move"), mv);
/// ```
impl FromStr for ChessMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() != 4 {
            return Err(Error::InvalidMove);
        }
        let source = Square::from_str(&s[0..2]).map_err(|_| Error::InvalidMove)?;
        let dest = Square::from_str(&s[2..4]).map_err(|_| Error::InvalidMove)?;
        Ok(ChessMove::new(source, dest))
    }
}

/// One entry of a game's move history: who moved, from where, to where.
///
/// ```
/// use chess_rules::{MoveRecord, Color, Square};
///
/// let record = MoveRecord::new(Color::White, Square::E2, Square::E4);
/// assert_eq!(record.to_string(), "w: e2 -> e4");
/// ```
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct MoveRecord {
    pub color: Color,
    pub source: Square,
    pub dest: Square,
}

impl MoveRecord {
    #[inline]
    pub fn new(color: Color, source: Square, dest: Square) -> MoveRecord {
        MoveRecord {
            color,
            source,
            dest,
        }
    }

    /// The move without its color.
    #[inline]
    pub fn chess_move(&self) -> ChessMove {
        ChessMove::new(self.source, self.dest)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.color.initial(), self.source, self.dest)
    }
}

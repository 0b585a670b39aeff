use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a square on the chess board
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Ord, Eq, PartialOrd, Copy, Clone, Debug, Hash, Default)]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

impl Square {
    /// Create a new square, given an index.  Anything past H8 does not exist.
    ///
    /// ```
    /// use chess_rules::Square;
    ///
    /// assert_eq!(Square::new(0), Some(Square::A1));
    /// assert_eq!(Square::new(63), Some(Square::H8));
    /// assert_eq!(Square::new(64), None);
    /// ```
    #[inline]
    pub fn new(sq: u8) -> Option<Square> {
        if (sq as usize) < NUM_SQUARES {
            Some(Square(sq))
        } else {
            None
        }
    }

    /// Make a square given a rank and a file
    ///
    /// ```
    /// use chess_rules::{Square, Rank, File};
    ///
    /// assert_eq!(Square::make_square(Rank::Fourth, File::E), Square::E4);
    /// ```
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square((rank.to_index() as u8) << 3 | (file.to_index() as u8))
    }

    /// Return the rank given this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize).unwrap_or(Rank::First)
    }

    /// Return the file given this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize).unwrap_or(File::A)
    }

    /// Step `file_delta` files to the right and `rank_delta` ranks up.  If that walks off the
    /// board, `None`.
    ///
    /// ```
    /// use chess_rules::Square;
    ///
    /// assert_eq!(Square::B1.offset(1, 2), Some(Square::C3));
    /// assert_eq!(Square::B1.offset(-2, 1), None);
    /// assert_eq!(Square::H8.offset(0, 1), None);
    /// ```
    #[inline]
    pub fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.get_file().to_index() as i8 + file_delta;
        let rank = self.get_rank().to_index() as i8 + rank_delta;
        if file < 0 || rank < 0 {
            return None;
        }
        Some(Square::make_square(
            Rank::from_index(rank as usize)?,
            File::from_index(file as usize)?,
        ))
    }

    /// If there is a square above me, return that.  Otherwise, None.
    #[inline]
    pub fn up(&self) -> Option<Square> {
        self.offset(0, 1)
    }

    /// If there is a square below me, return that.  Otherwise, None.
    #[inline]
    pub fn down(&self) -> Option<Square> {
        self.offset(0, -1)
    }

    /// If there is a square to the left of me, return that.  Otherwise, None.
    #[inline]
    pub fn left(&self) -> Option<Square> {
        self.offset(-1, 0)
    }

    /// If there is a square to the right of me, return that.  Otherwise, None.
    #[inline]
    pub fn right(&self) -> Option<Square> {
        self.offset(1, 0)
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        self.offset(0, color.forward_delta())
    }

    /// If there is a square "backward" given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn backward(&self, color: Color) -> Option<Square> {
        self.offset(0, -color.forward_delta())
    }

    /// Convert this square to an integer.
    #[inline]
    pub fn to_int(&self) -> u8 {
        self.0
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

/// A list of every square on the chessboard.
///
/// ```
/// use chess_rules::{ALL_SQUARES, Square};
///
/// assert_eq!(ALL_SQUARES[0], Square::A1);
/// ```
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square(i as u8);
        i += 1;
    }
    squares
};

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.get_file(), self.get_rank())
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(Error::InvalidSquare),
        };
        let file = File::from_str(&file.to_string()).map_err(|_| Error::InvalidSquare)?;
        let rank = Rank::from_str(&rank.to_string()).map_err(|_| Error::InvalidSquare)?;
        Ok(Square::make_square(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_strings() {
        assert_eq!(Square::E4.to_string(), "e4");
        assert_eq!(Square::from_str("e4"), Ok(Square::E4));
        assert_eq!(Square::from_str("H8"), Ok(Square::H8));
        assert_eq!(Square::from_str("i1"), Err(Error::InvalidSquare));
        assert_eq!(Square::from_str("a9"), Err(Error::InvalidSquare));
        assert_eq!(Square::from_str("a10"), Err(Error::InvalidSquare));
        assert_eq!(Square::from_str(""), Err(Error::InvalidSquare));
    }

    #[test]
    fn every_square_survives_display() {
        for sq in ALL_SQUARES.iter() {
            assert_eq!(Square::from_str(&sq.to_string()), Ok(*sq));
        }
    }

    #[test]
    fn forward_depends_on_color() {
        assert_eq!(Square::E2.forward(Color::White), Some(Square::E3));
        assert_eq!(Square::E7.forward(Color::Black), Some(Square::E6));
        assert_eq!(Square::E4.backward(Color::White), Some(Square::E3));
        assert_eq!(Square::E1.backward(Color::White), None);
        assert_eq!(Square::E4.down(), Some(Square::E3));
        assert_eq!(Square::E1.down(), None);
        assert_eq!(Square::E4.up(), Some(Square::E5));
        assert_eq!(Square::A8.left(), None);
    }
}

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Describe a rank (row) on a chess board
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

/// How many ranks are there?
pub const NUM_RANKS: usize = 8;

/// Enumerate all ranks
pub const ALL_RANKS: [Rank; NUM_RANKS] = [
    Rank::First,
    Rank::Second,
    Rank::Third,
    Rank::Fourth,
    Rank::Fifth,
    Rank::Sixth,
    Rank::Seventh,
    Rank::Eighth,
];

impl Rank {
    /// Convert a `usize` into a `Rank` (the inverse of to_index).  Anything past the eighth rank
    /// is off the board, so `None`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Rank> {
        ALL_RANKS.get(i).copied()
    }

    /// Go one rank down, if there is one.
    #[inline]
    pub fn down(&self) -> Option<Rank> {
        self.to_index().checked_sub(1).and_then(Rank::from_index)
    }

    /// Go one rank up, if there is one.
    #[inline]
    pub fn up(&self) -> Option<Rank> {
        Rank::from_index(self.to_index() + 1)
    }

    /// Convert this `Rank` into a `usize` between 0 and 7 (inclusive).
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some(c @ '1'..='8') => Ok(ALL_RANKS[(c as u8 - b'1') as usize]),
            _ => Err(Error::InvalidRank),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_index() + 1)
    }
}

#[test]
fn off_board_ranks_are_none() {
    assert_eq!(Rank::First.down(), None);
    assert_eq!(Rank::Eighth.up(), None);
    assert_eq!(Rank::from_index(8), None);
    assert_eq!(Rank::Third.up(), Some(Rank::Fourth));
}

#[test]
fn parse_rank() {
    assert_eq!("4".parse::<Rank>(), Ok(Rank::Fourth));
    assert_eq!("9".parse::<Rank>(), Err(Error::InvalidRank));
    assert_eq!("0".parse::<Rank>(), Err(Error::InvalidRank));
}

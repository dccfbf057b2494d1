//! Letters of the 26-symbol alphabet and wheel positions built from them.

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::{BombeError, Result};

/// Number of symbols (and wheel positions) in the alphabet.
pub const ALPHABET: usize = 26;

/// Number of distinct wheel positions of a three-wheel scrambler.
pub const POSITION_COUNT: usize = ALPHABET * ALPHABET * ALPHABET;

/// One letter, stored as its index 0..26.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(0);

    /// Letter at `index`, wrapping modulo 26.
    pub fn from_index(index: usize) -> Letter {
        Letter((index % ALPHABET) as u8)
    }

    /// Accepts either case.
    pub fn from_char(c: char) -> Result<Letter> {
        if c.is_ascii_alphabetic() {
            Ok(Letter(c.to_ascii_lowercase() as u8 - b'a'))
        } else {
            Err(BombeError::InvalidLetter(c))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// The letter `by` places further round the alphabet.
    pub fn shifted(self, by: usize) -> Letter {
        Letter::from_index(self.index() + by % ALPHABET)
    }

    /// The letter `by` places back round the alphabet.
    pub fn unshifted(self, by: usize) -> Letter {
        Letter::from_index(self.index() + ALPHABET - by % ALPHABET)
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = BombeError;

    fn try_from(c: char) -> Result<Letter> {
        Letter::from_char(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Converts a whole string, failing on the first non-letter.
pub fn letters(text: &str) -> Result<Vec<Letter>> {
    text.chars().map(Letter::from_char).collect()
}

/// Positions of the three wheels of a scrambler, slowest (wheel 1) first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Positions(pub [Letter; 3]);

impl Positions {
    pub const START: Positions = Positions([Letter::A; 3]);

    pub fn new(wheel1: Letter, wheel2: Letter, wheel3: Letter) -> Positions {
        Positions([wheel1, wheel2, wheel3])
    }

    /// Numeric form; each index is reduced modulo 26.
    pub fn from_indices(wheel1: usize, wheel2: usize, wheel3: usize) -> Positions {
        Positions([
            Letter::from_index(wheel1),
            Letter::from_index(wheel2),
            Letter::from_index(wheel3),
        ])
    }

    pub fn indices(&self) -> [usize; 3] {
        let [a, b, c] = self.0;
        [a.index(), b.index(), c.index()]
    }

    pub fn wheel1(&self) -> Letter {
        self.0[0]
    }

    pub fn wheel2(&self) -> Letter {
        self.0[1]
    }

    pub fn wheel3(&self) -> Letter {
        self.0[2]
    }

    /// Same positions with only the fastest wheel moved on by `steps`.
    pub fn with_wheel3_offset(&self, steps: usize) -> Positions {
        let [a, b, c] = self.0;
        Positions([a, b, c.shifted(steps)])
    }

    /// The position reached after `steps` odometer steps from here: wheel 3
    /// moves every step, wheel 2 every 26 and wheel 1 every 676.
    pub fn odometer(&self, steps: usize) -> Positions {
        let [a, b, c] = self.0;
        Positions([
            a.shifted(steps / (ALPHABET * ALPHABET)),
            b.shifted(steps / ALPHABET),
            c.shifted(steps),
        ])
    }

    /// Inverse of [`Positions::odometer`]: how many steps from `base` to here.
    pub fn steps_from(&self, base: Positions) -> usize {
        let [a, b, c] = self.indices();
        let [ba, bb, bc] = base.indices();
        let digit = |x: usize, y: usize| (x + ALPHABET - y) % ALPHABET;
        digit(a, ba) * ALPHABET * ALPHABET + digit(b, bb) * ALPHABET + digit(c, bc)
    }

    /// Every position, in odometer order from `aaa`.
    pub fn all() -> impl Iterator<Item = Positions> {
        (0..POSITION_COUNT).map(|steps| Positions::START.odometer(steps))
    }
}

impl FromStr for Positions {
    type Err = BombeError;

    fn from_str(s: &str) -> Result<Positions> {
        match letters(s)?.as_slice() {
            &[a, b, c] => Ok(Positions([a, b, c])),
            _ => Err(BombeError::InvalidPositions(s.to_string())),
        }
    }
}

impl TryFrom<String> for Positions {
    type Error = BombeError;

    fn try_from(s: String) -> Result<Positions> {
        s.parse()
    }
}

impl From<Positions> for String {
    fn from(positions: Positions) -> String {
        positions.to_string()
    }
}

impl fmt::Display for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}{}{}", a, b, c)
    }
}

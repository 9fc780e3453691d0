use std::fmt;
use std::str::FromStr;

use crate::error::CipherError;

/// Shift used when none is given.
pub const DEFAULT_SHIFT: i32 = 3;

/// Which way to rotate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Encode,
    Decode,
}

impl FromStr for Direction {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encode" | "enc" | "e" => Ok(Self::Encode),
            "decode" | "dec" | "d" => Ok(Self::Decode),
            _ => Err(CipherError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

/// Rotate every ASCII letter in `text` by `shift` places.
///
/// Decoding rotates by `-shift`. Shifts of any magnitude and sign wrap
/// modulo 26.
pub fn caesar(text: &str, shift: i32, direction: Direction) -> String {
    let rotation = match direction {
        Direction::Encode => shift.rem_euclid(26),
        Direction::Decode => 26 - shift.rem_euclid(26),
    };
    let rotation = (rotation % 26) as u8;

    text.chars().map(|c| rotate(c, rotation)).collect()
}

/// Shorthand for `caesar(text, shift, Direction::Encode)`.
pub fn encode(text: &str, shift: i32) -> String {
    caesar(text, shift, Direction::Encode)
}

/// Shorthand for `caesar(text, shift, Direction::Decode)`.
pub fn decode(text: &str, shift: i32) -> String {
    caesar(text, shift, Direction::Decode)
}

// `shift` is already reduced to 0..26.
fn rotate(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    char::from((c as u8 - base + shift) % 26 + base)
}

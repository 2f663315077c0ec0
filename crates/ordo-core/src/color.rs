//! Side to move.

use std::fmt;
use std::ops::Not;

/// The side a piece belongs to, or the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Number of sides.
    pub const COUNT: usize = 2;

    /// Both sides in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Index into per-side tables (White = 0, Black = 1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse the active-color field of a FEN string.
    pub fn from_fen(field: &str) -> Option<Color> {
        match field {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }

    /// Colour of a FEN piece letter: uppercase is White.
    #[inline]
    pub fn of_fen_char(c: char) -> Color {
        if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "w",
            Color::Black => "b",
        })
    }
}

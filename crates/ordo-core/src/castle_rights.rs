//! Castling rights as a 4-bit set.

use std::fmt;

use crate::error::FenError;

/// Castling rights: bit 0 = `K`, 1 = `Q`, 2 = `k`, 3 = `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

/// FEN letters in bit order.
const LETTERS: [char; 4] = ['K', 'Q', 'k', 'q'];

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// `true` if every right in `other` is present.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    /// Parse the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`).
    pub fn from_fen(field: &str) -> Result<CastleRights, FenError> {
        let invalid = || FenError::InvalidCastling {
            found: field.to_string(),
        };
        if field == "-" {
            return Ok(CastleRights::NONE);
        }
        if field.is_empty() {
            return Err(invalid());
        }

        let mut bits = 0u8;
        for c in field.chars() {
            let bit = LETTERS.iter().position(|&l| l == c).ok_or_else(invalid)?;
            if bits & (1 << bit) != 0 {
                return Err(invalid());
            }
            bits |= 1 << bit;
        }
        Ok(CastleRights(bits))
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("-");
        }
        for (bit, letter) in LETTERS.iter().enumerate() {
            if self.0 & (1 << bit) != 0 {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

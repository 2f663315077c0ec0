//! Error types for FEN parsing and board validation.

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based position in the FEN (0 = 8th rank).
        rank_index: usize,
        length: usize,
    },
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },
    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },
    #[error("invalid castling field: \"{found}\"")]
    InvalidCastling { found: String },
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        found: String,
    },
    /// The placement parsed but does not describe a playable position.
    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Structural problems with a parsed position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: &'static str, count: usize },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError};

    #[test]
    fn messages() {
        assert_eq!(
            FenError::WrongFieldCount { found: 4 }.to_string(),
            "expected 6 FEN fields, found 4"
        );
        assert_eq!(
            BoardError::InvalidKingCount { color: "black", count: 0 }.to_string(),
            "expected 1 king for black, found 0"
        );
    }

    #[test]
    fn board_error_is_the_source() {
        use std::error::Error;

        let err: FenError = BoardError::PawnsOnBackRank.into();
        assert!(matches!(err, FenError::InvalidBoard { .. }));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("pawns found on back rank".to_string())
        );
    }
}

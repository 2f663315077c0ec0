//! Search-side move ordering.

pub mod heuristics;
pub mod ordering;

/// Deepest ply the per-ply tables track.
pub const MAX_PLY: usize = 128;

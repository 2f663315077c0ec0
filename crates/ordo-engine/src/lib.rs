//! Move ordering for alpha-beta search: the scoring policy, its heuristic stores, and a move picker.

pub mod search;

pub use search::heuristics::{HISTORY_MAX, HistoryTable, KillerTable};
pub use search::ordering::{
    CaptureOnlyPolicy, MAX_MOVES, MAX_PRIORITY, MVV_LVA, MainSearchPolicy, MovePicker, OrderingPolicy,
};
pub use search::MAX_PLY;

//! Killer move table and history heuristic for quiet move ordering.
//!
//! Both tables are owned by one search thread: the search writes them after
//! cutoffs and the ordering policy only reads them.

use ordo_core::{Color, Move, PieceKind, Square};

use crate::search::MAX_PLY;

/// Two killer moves per ply: quiet moves that caused beta cutoffs.
pub struct KillerTable {
    slots: [[Move; 2]; MAX_PLY],
}

impl KillerTable {
    /// Create a table with every slot set to [`Move::NULL`].
    pub fn new() -> Self {
        Self {
            slots: [[Move::NULL; 2]; MAX_PLY],
        }
    }

    /// Record a quiet cutoff move at `ply`.
    ///
    /// The previous first killer moves to the second slot unless it is the
    /// same move, so the two slots never hold duplicates.
    pub fn store(&mut self, ply: usize, mv: Move) {
        let Some(slots) = self.slots.get_mut(ply) else {
            return;
        };
        if slots[0] != mv {
            slots[1] = slots[0];
            slots[0] = mv;
        }
    }

    /// The two killers at `ply`, most recent first. Null past [`MAX_PLY`].
    pub fn get(&self, ply: usize) -> (Move, Move) {
        self.slots
            .get(ply)
            .map_or((Move::NULL, Move::NULL), |slots| (slots[0], slots[1]))
    }

    pub fn clear(&mut self) {
        self.slots = [[Move::NULL; 2]; MAX_PLY];
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bound for history scores. Kept below the killer bonuses so a history
/// score can never outrank a killer.
pub const HISTORY_MAX: i32 = 16_384;

/// History heuristic indexed by `[side][piece_kind][to_square]`.
///
/// Scores start at zero and only grow until [`age`](Self::age) or
/// [`clear`](Self::clear); they stay within `0..=HISTORY_MAX`.
pub struct HistoryTable {
    table: [[[i32; Square::COUNT]; PieceKind::COUNT]; Color::COUNT],
}

impl HistoryTable {
    /// Create a zeroed history table.
    pub fn new() -> Self {
        Self {
            table: [[[0; Square::COUNT]; PieceKind::COUNT]; Color::COUNT],
        }
    }

    /// Score for `piece` of `side` moving to `to`.
    #[inline]
    pub fn get(&self, piece: PieceKind, side: Color, to: Square) -> i32 {
        self.table[side.index()][piece.index()][to.index()]
    }

    /// Reward a quiet move that caused a beta cutoff at `depth`.
    pub fn reward(&mut self, piece: PieceKind, side: Color, to: Square, depth: u8) {
        let bonus = i32::from(depth) * i32::from(depth);
        let entry = &mut self.table[side.index()][piece.index()][to.index()];
        *entry = (*entry + bonus).min(HISTORY_MAX);
    }

    /// Halve every score, so older cutoffs weigh less in the next iteration.
    pub fn age(&mut self) {
        self.table
            .iter_mut()
            .flatten()
            .flatten()
            .for_each(|entry| *entry /= 2);
    }

    pub fn clear(&mut self) {
        self.table = [[[0; Square::COUNT]; PieceKind::COUNT]; Color::COUNT];
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).unwrap()
    }

    #[test]
    fn killer_store_and_get() {
        let mut kt = KillerTable::new();
        let e4 = Move::new(sq("e2"), sq("e4"));
        let d4 = Move::new(sq("d2"), sq("d4"));

        assert_eq!(kt.get(5), (Move::NULL, Move::NULL));

        kt.store(5, e4);
        assert_eq!(kt.get(5), (e4, Move::NULL));

        kt.store(5, d4);
        assert_eq!(kt.get(5), (d4, e4));
    }

    #[test]
    fn killer_repeat_does_not_shift() {
        let mut kt = KillerTable::new();
        let e4 = Move::new(sq("e2"), sq("e4"));
        let d4 = Move::new(sq("d2"), sq("d4"));

        kt.store(0, e4);
        kt.store(0, d4);
        kt.store(0, d4);
        assert_eq!(kt.get(0), (d4, e4));
    }

    #[test]
    fn killer_plies_are_independent() {
        let mut kt = KillerTable::new();
        let mv = Move::new(sq("g1"), sq("f3"));
        kt.store(3, mv);
        assert_eq!(kt.get(3).0, mv);
        assert_eq!(kt.get(4).0, Move::NULL);
    }

    #[test]
    fn killer_out_of_range_ply_is_ignored() {
        let mut kt = KillerTable::new();
        kt.store(MAX_PLY, Move::new(sq("e2"), sq("e4")));
        assert_eq!(kt.get(MAX_PLY), (Move::NULL, Move::NULL));
    }

    #[test]
    fn killer_clear() {
        let mut kt = KillerTable::new();
        kt.store(1, Move::new(sq("e2"), sq("e4")));
        kt.clear();
        assert_eq!(kt.get(1), (Move::NULL, Move::NULL));
    }

    #[test]
    fn history_reward_is_depth_squared() {
        let mut ht = HistoryTable::new();
        assert_eq!(ht.get(PieceKind::Knight, Color::White, sq("f3")), 0);

        ht.reward(PieceKind::Knight, Color::White, sq("f3"), 4);
        ht.reward(PieceKind::Knight, Color::White, sq("f3"), 3);
        assert_eq!(ht.get(PieceKind::Knight, Color::White, sq("f3")), 25);
    }

    #[test]
    fn history_keys_on_side() {
        let mut ht = HistoryTable::new();
        ht.reward(PieceKind::Bishop, Color::Black, sq("c5"), 6);
        assert_eq!(ht.get(PieceKind::Bishop, Color::Black, sq("c5")), 36);
        assert_eq!(ht.get(PieceKind::Bishop, Color::White, sq("c5")), 0);
        assert_eq!(ht.get(PieceKind::Knight, Color::Black, sq("c5")), 0);
    }

    #[test]
    fn history_clamped() {
        let mut ht = HistoryTable::new();
        for _ in 0..500 {
            ht.reward(PieceKind::Pawn, Color::White, sq("a3"), 20);
        }
        assert_eq!(ht.get(PieceKind::Pawn, Color::White, sq("a3")), HISTORY_MAX);
    }

    #[test]
    fn history_age_and_clear() {
        let mut ht = HistoryTable::new();
        ht.reward(PieceKind::Rook, Color::White, sq("d1"), 5);
        ht.age();
        assert_eq!(ht.get(PieceKind::Rook, Color::White, sq("d1")), 12);

        ht.clear();
        assert_eq!(ht.get(PieceKind::Rook, Color::White, sq("d1")), 0);
    }
}

use crate::block::Block;
use crate::geometry::{Rotation, SPAWN};
use crate::piece::{Occupied, Piece};

// ============================================================================
// Grid
// ============================================================================

/// The playfield: locked blocks, the set of cells they fill, and at most one
/// active piece.
///
/// `occupied` and `locked` always describe the same cells. The occupied set
/// only grows.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    occupied: Occupied,
    locked: Vec<Block>,
    active: Option<Piece>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid with `blocks` already locked. Blocks landing on an already
    /// filled cell are dropped.
    pub fn with_locked(blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut grid = Self::new();
        for block in blocks {
            grid.lock(block);
        }
        grid
    }

    pub fn occupied(&self) -> &Occupied {
        &self.occupied
    }

    pub fn locked_blocks(&self) -> &[Block] {
        &self.locked
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    /// Removes the active piece if it has settled.
    pub fn take_settled(&mut self) -> Option<Piece> {
        match &self.active {
            Some(piece) if piece.is_settled() => self.active.take(),
            _ => None,
        }
    }

    pub fn step_active_down(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.step_down(&self.occupied),
            None => false,
        }
    }

    pub fn step_active_left(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.step_left(&self.occupied),
            None => false,
        }
    }

    pub fn step_active_right(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.step_right(&self.occupied),
            None => false,
        }
    }

    pub fn rotate_active(&mut self, rotation: Rotation) -> bool {
        match self.active.as_mut() {
            Some(piece) if !piece.is_settled() => {
                piece.rotate(rotation);
                true
            }
            _ => false,
        }
    }

    /// Locks every block of a settled piece into the grid. The caller
    /// guarantees the piece does not overlap locked cells.
    pub fn merge_settled(&mut self, piece: Piece) {
        debug_assert!(piece.is_settled(), "merging a piece that is still falling");
        log::debug!("locking {:?} at {:?}", piece.shape(), piece.reference());
        for block in piece.into_blocks() {
            self.lock(block);
        }
    }

    /// True once the spawn cell has been filled; checked right after a merge.
    pub fn is_spawn_blocked(&self) -> bool {
        self.occupied.contains(&SPAWN)
    }

    /// Active piece blocks followed by locked blocks, in drawing order.
    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> {
        self.active
            .iter()
            .flat_map(|piece| piece.blocks())
            .chain(self.locked.iter())
    }

    fn lock(&mut self, block: Block) {
        if self.occupied.insert(block.coord()) {
            self.locked.push(block);
        }
    }
}

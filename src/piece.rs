use std::collections::HashSet;

use crate::block::{Block, Coord};
use crate::geometry::{below_floor, correct_boundaries, in_columns, rotate_about};
use crate::shape::{Shape, BLOCKS_PER_PIECE};

pub use crate::geometry::Rotation;

/// Cells filled by locked blocks. Pieces only ever see it through a shared
/// borrow handed in per move, so they observe every lock as soon as it
/// happens and can never write to it.
pub type Occupied = HashSet<Coord>;

// ============================================================================
// Piece
// ============================================================================

/// A falling piece. It is either falling or settled; settling happens only
/// when a downward step is refused, and a settled piece ignores every
/// further move.
#[derive(Clone, Debug)]
pub struct Piece {
    shape: Shape,
    reference: Coord,
    blocks: [Block; BLOCKS_PER_PIECE],
    settled: bool,
}

impl Piece {
    /// Places `shape` with its pivot on `reference`.
    pub fn spawn(shape: Shape, reference: Coord) -> Self {
        let color = shape.color();
        let blocks = shape.centered_layout().map(|(d_row, d_column)| {
            Block::new(reference.row + d_row, reference.column + d_column, color)
        });
        Self {
            shape,
            reference,
            blocks,
            settled: false,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn reference(&self) -> Coord {
        self.reference
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.blocks.iter().map(Block::coord)
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub(crate) fn into_blocks(self) -> [Block; BLOCKS_PER_PIECE] {
        self.blocks
    }

    /// Moves one row down. A refused step settles the piece and returns
    /// `false`.
    pub fn step_down(&mut self, occupied: &Occupied) -> bool {
        if self.settled {
            return false;
        }
        let moved = self.blocks.map(|b| b.step_down());
        if moved
            .iter()
            .any(|b| below_floor(b.row) || occupied.contains(&b.coord()))
        {
            self.settled = true;
            return false;
        }
        self.commit(moved, 1, 0);
        true
    }

    /// Moves one column left. A refused step changes nothing.
    pub fn step_left(&mut self, occupied: &Occupied) -> bool {
        let moved = self.blocks.map(|b| b.step_left());
        self.try_sideways(moved, -1, occupied)
    }

    /// Moves one column right. A refused step changes nothing.
    pub fn step_right(&mut self, occupied: &Occupied) -> bool {
        let moved = self.blocks.map(|b| b.step_right());
        self.try_sideways(moved, 1, occupied)
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotate(Rotation::Clockwise);
    }

    pub fn rotate_anticlockwise(&mut self) {
        self.rotate(Rotation::Anticlockwise);
    }

    /// Quarter turn about the reference coordinate, followed by boundary
    /// correction. Locked blocks are not consulted, so the result may
    /// overlap them.
    pub fn rotate(&mut self, rotation: Rotation) {
        if self.settled {
            return;
        }
        log::debug!("rotating {:?} {:?}: {:?}", self.shape, rotation, self.blocks);
        let reference = self.reference;
        for block in self.blocks.iter_mut() {
            let to = rotate_about(block.coord(), reference, rotation);
            block.row = to.row;
            block.column = to.column;
        }
        correct_boundaries(&mut self.blocks);
    }

    fn try_sideways(
        &mut self,
        moved: [Block; BLOCKS_PER_PIECE],
        d_column: i16,
        occupied: &Occupied,
    ) -> bool {
        if self.settled {
            return false;
        }
        if moved
            .iter()
            .any(|b| !in_columns(b.column) || occupied.contains(&b.coord()))
        {
            return false;
        }
        self.commit(moved, 0, d_column);
        true
    }

    fn commit(&mut self, moved: [Block; BLOCKS_PER_PIECE], d_row: i16, d_column: i16) {
        self.blocks = moved;
        self.reference.row += d_row;
        self.reference.column += d_column;
    }
}

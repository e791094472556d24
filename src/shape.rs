use rand::Rng;

use crate::block::Color;

/// Number of blocks in every piece.
pub const BLOCKS_PER_PIECE: usize = 4;

/// Relative (row, column) layout of a piece before pivot centering.
pub type Layout = [(i16, i16); BLOCKS_PER_PIECE];

// ============================================================================
// Shape Variants
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    #[rustfmt::skip]
    pub fn layout(&self) -> Layout {
        match self {
            Shape::L => [(0, 0), (1, 0), (2, 0), (2, 1)],
            Shape::J => [(0, 1), (1, 1), (2, 1), (2, 0)],
            Shape::S => [(0, 0), (1, 0), (1, 1), (2, 1)],
            Shape::T => [(0, 1), (1, 0), (1, 1), (2, 1)],
            Shape::Z => [(0, 1), (1, 1), (1, 0), (2, 0)],
            Shape::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
            Shape::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        }
    }

    /// The layout cell that becomes the local origin, and so the center of
    /// rotation.
    pub fn pivot(&self) -> (i16, i16) {
        match self {
            Shape::L | Shape::S | Shape::I => (1, 0),
            Shape::J | Shape::T | Shape::Z => (1, 1),
            Shape::O => (0, 0),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::L => Color::Blue,
            Shape::J => Color::Orange,
            Shape::S => Color::Green,
            Shape::T => Color::Purple,
            Shape::Z => Color::Red,
            Shape::I => Color::Cyan,
            Shape::O => Color::Yellow,
        }
    }

    /// Layout translated so the pivot sits at (0, 0).
    pub fn centered_layout(&self) -> Layout {
        let (pivot_row, pivot_column) = self.pivot();
        self.layout()
            .map(|(row, column)| (row - pivot_row, column - pivot_column))
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Shape::ALL[rng.gen_range(0..Shape::ALL.len())]
    }
}

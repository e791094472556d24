// ============================================================================
// Coordinates
// ============================================================================

/// A grid cell address. Rows grow downward, columns grow rightward and the
/// origin is the top-left cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    pub row: i16,
    pub column: i16,
}

impl Coord {
    pub const fn new(row: i16, column: i16) -> Self {
        Self { row, column }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Red,
    Green,
    Blue,
    Cyan,
    Purple,
    Yellow,
    Orange,
}

// ============================================================================
// Block
// ============================================================================

/// One occupied cell. The color is fixed when the block is created; stepping
/// produces a new block and never checks bounds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Block {
    pub row: i16,
    pub column: i16,
    color: Color,
}

impl Block {
    pub fn new(row: i16, column: i16, color: Color) -> Self {
        Self { row, column, color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.column)
    }

    pub fn step_down(&self) -> Self {
        self.moved(1, 0)
    }

    pub fn step_left(&self) -> Self {
        self.moved(0, -1)
    }

    pub fn step_right(&self) -> Self {
        self.moved(0, 1)
    }

    pub(crate) fn moved(&self, d_row: i16, d_column: i16) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_translate_by_one_cell() {
        let block = Block::new(3, 4, Color::Cyan);

        assert_eq!(block.step_down().coord(), Coord::new(4, 4));
        assert_eq!(block.step_left().coord(), Coord::new(3, 3));
        assert_eq!(block.step_right().coord(), Coord::new(3, 5));
    }

    #[test]
    fn steps_keep_color_and_leave_original_untouched() {
        let block = Block::new(0, 0, Color::Orange);
        let stepped = block.step_left().step_down();

        assert_eq!(stepped.color(), Color::Orange);
        assert_eq!(stepped.coord(), Coord::new(1, -1));
        assert_eq!(block.coord(), Coord::new(0, 0));
    }
}

use crate::block::{Block, Coord};

// ============================================================================
// Configuration
// ============================================================================

pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 20;

/// Where every new piece is anchored. Finding this cell occupied after a
/// merge ends the game.
pub const SPAWN: Coord = Coord::new(0, 4);

const MAX_COLUMN: i16 = GRID_WIDTH as i16 - 1;
const MAX_ROW: i16 = GRID_HEIGHT as i16 - 1;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rotation {
    Clockwise,
    Anticlockwise,
}

pub fn in_columns(column: i16) -> bool {
    (0..=MAX_COLUMN).contains(&column)
}

pub fn below_floor(row: i16) -> bool {
    row > MAX_ROW
}

/// Rotates `coord` a quarter turn about `reference`.
pub fn rotate_about(coord: Coord, reference: Coord, rotation: Rotation) -> Coord {
    let di = coord.row - reference.row;
    let dj = coord.column - reference.column;
    match rotation {
        Rotation::Clockwise => Coord::new(reference.row + dj, reference.column - di),
        Rotation::Anticlockwise => Coord::new(reference.row - dj, reference.column + di),
    }
}

/// Pulls blocks that a rotation pushed outside the grid back in.
///
/// Only one axis is corrected per call, checked in the order left wall,
/// right wall, floor. Nothing is done for rows above the top edge.
pub fn correct_boundaries(blocks: &mut [Block]) {
    let min_column = blocks.iter().map(|b| b.column).min().unwrap_or(0);
    if min_column < 0 {
        shift(blocks, 0, -min_column);
        return;
    }

    let max_column = blocks.iter().map(|b| b.column).max().unwrap_or(0);
    if max_column > MAX_COLUMN {
        shift(blocks, 0, MAX_COLUMN - max_column);
        return;
    }

    let max_row = blocks.iter().map(|b| b.row).max().unwrap_or(0);
    if max_row > MAX_ROW {
        shift(blocks, MAX_ROW - max_row, 0);
    }
}

fn shift(blocks: &mut [Block], d_row: i16, d_column: i16) {
    for block in blocks.iter_mut() {
        *block = block.moved(d_row, d_column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Color;

    fn blocks(cells: &[(i16, i16)]) -> Vec<Block> {
        cells
            .iter()
            .map(|&(row, column)| Block::new(row, column, Color::Red))
            .collect()
    }

    fn coords(blocks: &[Block]) -> Vec<(i16, i16)> {
        blocks.iter().map(|b| (b.row, b.column)).collect()
    }

    #[test]
    fn clockwise_quarter_turn() {
        let reference = Coord::new(5, 5);
        // One row above the pivot ends up one column right of it.
        assert_eq!(
            rotate_about(Coord::new(4, 5), reference, Rotation::Clockwise),
            Coord::new(5, 6)
        );
        assert_eq!(
            rotate_about(Coord::new(5, 6), reference, Rotation::Clockwise),
            Coord::new(6, 5)
        );
    }

    #[test]
    fn anticlockwise_undoes_clockwise() {
        let reference = Coord::new(7, 3);
        for cell in [Coord::new(6, 3), Coord::new(8, 4), Coord::new(7, 1)] {
            let there = rotate_about(cell, reference, Rotation::Clockwise);
            assert_eq!(rotate_about(there, reference, Rotation::Anticlockwise), cell);
        }
    }

    #[test]
    fn left_overflow_shifts_right_by_deficit() {
        let mut b = blocks(&[(5, -2), (5, -1), (5, 0), (5, 1)]);
        correct_boundaries(&mut b);
        assert_eq!(coords(&b), vec![(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn right_overflow_shifts_left_by_excess() {
        let mut b = blocks(&[(5, 8), (5, 9), (5, 10), (5, 11)]);
        correct_boundaries(&mut b);
        assert_eq!(coords(&b), vec![(5, 6), (5, 7), (5, 8), (5, 9)]);
    }

    #[test]
    fn floor_overflow_shifts_up_by_excess() {
        let mut b = blocks(&[(18, 3), (19, 3), (20, 3), (21, 3)]);
        correct_boundaries(&mut b);
        assert_eq!(coords(&b), vec![(16, 3), (17, 3), (18, 3), (19, 3)]);
    }

    #[test]
    fn only_one_axis_is_corrected() {
        // Both left wall and floor are violated; the column wins.
        let mut b = blocks(&[(19, -1), (20, -1), (20, 0), (20, 1)]);
        correct_boundaries(&mut b);
        assert_eq!(coords(&b), vec![(19, 0), (20, 0), (20, 1), (20, 2)]);
    }

    #[test]
    fn in_bounds_blocks_are_untouched() {
        let cells = [(0, 0), (0, 9), (19, 0), (19, 9)];
        let mut b = blocks(&cells);
        correct_boundaries(&mut b);
        assert_eq!(coords(&b), cells.to_vec());
    }
}

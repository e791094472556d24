use std::path::PathBuf;

use clap::Parser;

use crate::geometry::{GRID_HEIGHT, GRID_WIDTH};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Width of the drawing canvas in terminal columns. Each grid column gets
    /// an equal share.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub canvas_width: u16,
    /// Height of the drawing canvas in terminal rows. Each grid row gets an
    /// equal share.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub canvas_height: u16,
    /// Seed for the piece sequence, given as a 64-bit integer. The same seed
    /// replays the same pieces.
    /// Example: `falling-blocks --seed=42` or `falling-blocks -s 42`.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Write log output to this file. Filtered by `RUST_LOG`, `debug` when unset.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn canvas(&self) -> CanvasSize {
        CanvasSize {
            width: self.canvas_width,
            height: self.canvas_height,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CanvasSize {
    pub width: u16,
    pub height: u16,
}

impl CanvasSize {
    /// Size of one grid cell as (columns, rows), never smaller than 1x1.
    pub fn cell_size(&self) -> (u16, u16) {
        (
            (self.width / GRID_WIDTH as u16).max(1),
            (self.height / GRID_HEIGHT as u16).max(1),
        )
    }

    /// Space the whole grid takes once cells are sized.
    pub fn grid_extent(&self) -> (u16, u16) {
        let (cell_width, cell_height) = self.cell_size();
        (cell_width * GRID_WIDTH as u16, cell_height * GRID_HEIGHT as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_two_by_one_cells() {
        let config = Config::parse_from(["falling-blocks"]);
        assert_eq!(config.canvas().cell_size(), (2, 1));
        assert_eq!(config.canvas().grid_extent(), (20, 20));
        assert_eq!(config.seed, None);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn canvas_divides_evenly_and_rounds_down() {
        let canvas = CanvasSize { width: 35, height: 61 };
        assert_eq!(canvas.cell_size(), (3, 3));
        assert_eq!(canvas.grid_extent(), (30, 60));
    }

    #[test]
    fn tiny_canvas_still_draws_cells() {
        let canvas = CanvasSize { width: 4, height: 4 };
        assert_eq!(canvas.cell_size(), (1, 1));
    }

    #[test]
    fn parses_all_flags() {
        let config = Config::parse_from([
            "falling-blocks",
            "--canvas-width",
            "30",
            "--canvas-height",
            "40",
            "-s",
            "42",
            "--log-file",
            "game.log",
        ]);
        assert_eq!(config.canvas(), CanvasSize { width: 30, height: 40 });
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn zero_canvas_is_rejected() {
        assert!(Config::try_parse_from(["falling-blocks", "--canvas-width", "0"]).is_err());
    }
}

//! Falling-block puzzle core: blocks, pieces, the playfield and the frame
//! driven game loop. The terminal front end lives in `main.rs`.

pub mod block;
pub mod config;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod piece;
pub mod shape;

pub use block::{Block, Color, Coord};
pub use game::{Command, Game, GameEvent, Phase, TickOutcome};
pub use grid::Grid;
pub use piece::{Occupied, Piece, Rotation};
pub use shape::Shape;

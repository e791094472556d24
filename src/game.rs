use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::geometry::{Rotation, SPAWN};
use crate::grid::Grid;
use crate::piece::Piece;
use crate::shape::Shape;

// ============================================================================
// Configuration
// ============================================================================

/// Frame cadence the front end drives `Game::tick` at.
pub const FRAMES_PER_SECOND: u32 = 30;
/// Frames between forced downward steps, so gravity is one row per second
/// whatever the frame rate.
pub const FRAMES_PER_DROP: u32 = 30;

// ============================================================================
// Types
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateClockwise,
    RotateAnticlockwise,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Spawning,
    Falling,
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    Running,
    GameOver,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GameEvent {
    PieceSpawned(Shape),
    PieceMoved,
    PieceRotated,
    PieceLocked,
    GameOver,
}

// ============================================================================
// Piece Provider Trait
// ============================================================================

pub trait PieceProvider {
    fn next_piece(&mut self) -> Shape;
}

pub struct RandomPieceProvider {
    rng: StdRng,
}

impl RandomPieceProvider {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPieceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceProvider for RandomPieceProvider {
    fn next_piece(&mut self) -> Shape {
        Shape::random(&mut self.rng)
    }
}

pub struct SequencePieceProvider {
    pieces: Vec<Shape>,
    index: usize,
}

impl SequencePieceProvider {
    pub fn new(pieces: Vec<Shape>) -> Self {
        assert!(!pieces.is_empty(), "piece sequence must not be empty");
        Self { pieces, index: 0 }
    }
}

impl PieceProvider for SequencePieceProvider {
    fn next_piece(&mut self) -> Shape {
        let piece = self.pieces[self.index % self.pieces.len()];
        self.index += 1;
        piece
    }
}

// ============================================================================
// Game
// ============================================================================

pub struct Game {
    pub grid: Grid,
    phase: Phase,
    frame: u32,
    piece_provider: Box<dyn PieceProvider>,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_provider(Box::new(RandomPieceProvider::new()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_provider(Box::new(RandomPieceProvider::seeded(seed)))
    }

    pub fn with_provider(provider: Box<dyn PieceProvider>) -> Self {
        Self::with_grid(Grid::new(), provider)
    }

    /// Starts from an existing grid. If it already holds an active piece
    /// play continues with it, otherwise the first piece is spawned.
    pub fn with_grid(grid: Grid, provider: Box<dyn PieceProvider>) -> Self {
        let phase = if grid.active().is_some() {
            Phase::Falling
        } else {
            Phase::Spawning
        };
        let mut game = Self {
            grid,
            phase,
            frame: 0,
            piece_provider: provider,
            events: Vec::new(),
        };
        if game.phase == Phase::Spawning {
            game.spawn_next_piece();
        }
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Frames counted since the last forced step or lock.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.grid.active()
    }

    /// Applies one player command to the active piece. Returns whether the
    /// piece changed.
    ///
    /// A soft drop that settles the piece leaves the lock to the next
    /// `tick`, so it happens after all of that frame's input.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let changed = match command {
            Command::MoveLeft => self.grid.step_active_left(),
            Command::MoveRight => self.grid.step_active_right(),
            Command::SoftDrop => self.grid.step_active_down(),
            Command::RotateClockwise => self.grid.rotate_active(Rotation::Clockwise),
            Command::RotateAnticlockwise => self.grid.rotate_active(Rotation::Anticlockwise),
        };
        if changed {
            self.events.push(match command {
                Command::RotateClockwise | Command::RotateAnticlockwise => GameEvent::PieceRotated,
                _ => GameEvent::PieceMoved,
            });
        }
        changed
    }

    /// Advances one frame: gravity every `FRAMES_PER_DROP` frames, then locks
    /// a settled piece and spawns the next one.
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::GameOver => return TickOutcome::GameOver,
            Phase::Spawning => self.spawn_next_piece(),
            Phase::Falling => {}
        }
        if self.phase != Phase::Falling {
            return self.outcome();
        }

        self.frame += 1;
        if self.frame >= FRAMES_PER_DROP {
            self.frame = 0;
            self.grid.step_active_down();
        }

        if let Some(piece) = self.grid.take_settled() {
            self.grid.merge_settled(piece);
            self.events.push(GameEvent::PieceLocked);
            self.frame = 0;
            self.phase = Phase::Spawning;
            self.spawn_next_piece();
        }

        self.outcome()
    }

    /// Takes and clears all pending events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn spawn_next_piece(&mut self) {
        if self.grid.is_spawn_blocked() {
            log::info!(
                "spawn cell {:?} occupied, game over with {} locked blocks",
                SPAWN,
                self.grid.locked_blocks().len()
            );
            self.phase = Phase::GameOver;
            self.events.push(GameEvent::GameOver);
            return;
        }

        let shape = self.piece_provider.next_piece();
        log::debug!("spawning {:?} at {:?}", shape, SPAWN);
        self.grid.set_active(Piece::spawn(shape, SPAWN));
        self.phase = Phase::Falling;
        self.events.push(GameEvent::PieceSpawned(shape));
    }

    fn outcome(&self) -> TickOutcome {
        if self.phase == Phase::GameOver {
            TickOutcome::GameOver
        } else {
            TickOutcome::Running
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

pub mod test_helpers {
    use super::*;
    use crate::block::{Block, Color, Coord};

    pub fn empty_grid() -> Grid {
        Grid::new()
    }

    /// Grid with the given (row, column) cells locked.
    pub fn grid_with_cells(cells: &[(i16, i16)]) -> Grid {
        Grid::with_locked(
            cells
                .iter()
                .map(|&(row, column)| Block::new(row, column, Color::Purple)),
        )
    }

    /// Grid with every cell of `row` locked except `gap_column`.
    pub fn grid_with_row_gap(row: i16, gap_column: i16) -> Grid {
        let cells: Vec<(i16, i16)> = (0..crate::geometry::GRID_WIDTH as i16)
            .filter(|&column| column != gap_column)
            .map(|column| (row, column))
            .collect();
        grid_with_cells(&cells)
    }

    pub fn piece_at(shape: Shape, row: i16, column: i16) -> Piece {
        Piece::spawn(shape, Coord::new(row, column))
    }

    pub fn sequence(pieces: &[Shape]) -> Box<dyn PieceProvider> {
        Box::new(SequencePieceProvider::new(pieces.to_vec()))
    }
}

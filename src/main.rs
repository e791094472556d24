use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{
    fs::File,
    io::{self, stdout, Stdout},
    path::Path,
    time::{Duration, Instant},
};

use falling_blocks::{
    config::{CanvasSize, Config},
    game::FRAMES_PER_SECOND,
    geometry::{GRID_HEIGHT, GRID_WIDTH},
    input::{map_key, should_quit},
    Color as BlockColor, Game, Phase,
};

// ============================================================================
// Visual Constants
// ============================================================================

const FILLED_CHAR: &str = "█";
const EMPTY_CHAR: &str = " ";
const INFO_WIDTH: u16 = 26;

// ============================================================================
// Color Mapping
// ============================================================================

fn block_color(color: BlockColor) -> Color {
    match color {
        BlockColor::Red => Color::Red,
        BlockColor::Green => Color::Green,
        BlockColor::Blue => Color::Blue,
        BlockColor::Cyan => Color::Cyan,
        BlockColor::Purple => Color::Magenta,
        BlockColor::Yellow => Color::Yellow,
        BlockColor::Orange => Color::Rgb(255, 165, 0),
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn render(frame: &mut Frame, game: &Game, canvas: CanvasSize) {
    let area = frame.size();
    let (grid_width, grid_height) = canvas.grid_extent();
    let main_area = centered_rect(grid_width + 2 + INFO_WIDTH, grid_height + 2, area);

    let horizontal = Layout::horizontal([
        Constraint::Length(grid_width + 2),
        Constraint::Length(INFO_WIDTH),
    ])
    .split(main_area);

    render_grid(frame, game, canvas, horizontal[0]);
    render_info(frame, horizontal[1]);

    if game.phase() == Phase::GameOver {
        render_game_over(frame, area);
    }
}

fn render_grid(frame: &mut Frame, game: &Game, canvas: CanvasSize, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Blocks ")
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Blocks above the top edge (fresh spawns, rotations) are not drawn.
    let mut cells = [[None; GRID_WIDTH]; GRID_HEIGHT];
    for b in game.grid.visible_blocks() {
        if (0..GRID_HEIGHT as i16).contains(&b.row) && (0..GRID_WIDTH as i16).contains(&b.column) {
            cells[b.row as usize][b.column as usize] = Some(b.color());
        }
    }

    let (cell_width, cell_height) = canvas.cell_size();
    let mut lines: Vec<Line> = Vec::new();

    for row in cells.iter() {
        let spans: Vec<Span> = row
            .iter()
            .map(|cell| match cell {
                Some(color) => Span::styled(
                    FILLED_CHAR.repeat(cell_width as usize),
                    Style::default().fg(block_color(*color)),
                ),
                None => Span::styled(
                    EMPTY_CHAR.repeat(cell_width as usize),
                    Style::default().bg(Color::Rgb(50, 50, 50)),
                ),
            })
            .collect();

        for _ in 0..cell_height {
            lines.push(Line::from(spans.clone()));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_info(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Controls ")
        .title_alignment(Alignment::Center);

    let key = |text: &'static str| Span::styled(text, Style::default().fg(Color::Yellow));
    let lines = vec![
        Line::from(""),
        Line::from(vec![key("← a h     "), Span::raw("move left")]),
        Line::from(vec![key("→ d l     "), Span::raw("move right")]),
        Line::from(vec![key("↓ s j     "), Span::raw("soft drop")]),
        Line::from(vec![key("↑ x w k   "), Span::raw("rotate cw")]),
        Line::from(vec![key("y z       "), Span::raw("rotate ccw")]),
        Line::from(vec![key("q Esc ^C  "), Span::raw("quit")]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn render_game_over(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("GAME OVER", Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled(
            "Press q or ESC to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Game Over ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black)),
    );

    let popup_area = centered_rect(26, 6, area);
    frame.render_widget(paragraph, popup_area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .split(area);

    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .split(horizontal[1]);

    vertical[1]
}

// ============================================================================
// Main Loop
// ============================================================================

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &Config) -> io::Result<()> {
    let canvas = config.canvas();
    let mut game = match config.seed {
        Some(seed) => Game::seeded(seed),
        None => Game::new(),
    };

    let frame_duration = Duration::from_secs(1) / FRAMES_PER_SECOND;
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| render(frame, &game, canvas))?;

        // Input for this frame is applied before its gravity step.
        loop {
            let timeout = frame_duration
                .checked_sub(last_frame.elapsed())
                .unwrap_or(Duration::ZERO);
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(command) = map_key(key) {
                    game.apply(command);
                }
            }
        }

        last_frame = Instant::now();
        game.tick();
    }
}

fn main() -> io::Result<()> {
    let config = Config::parse();
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }
    log::info!("starting with {:?}", config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

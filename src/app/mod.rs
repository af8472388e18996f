mod session;

pub use session::{Session, Stage};

use std::{
    io::{Stdout, Write},
    path::PathBuf,
};

use crossterm::{
    cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use rand::rngs::StdRng;

use crate::{
    config::Config,
    generators::get_rng,
    render::{Style, Tile, TileGrid, rasterize},
};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserAction {
    Generate,
    Solve,
    Export,
    Quit,
}

impl UserAction {
    fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('g') | KeyCode::Char('G') => Some(UserAction::Generate),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(UserAction::Solve),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(UserAction::Export),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(UserAction::Quit),
            _ => None,
        }
    }
}

/// Interactive terminal front end.
pub struct App {
    session: Session<StdRng>,
    style: Style,
    output: PathBuf,
    /// Message shown below the maze
    status: String,
}

impl App {
    /// Number of terminal rows used below the maze
    const NUM_FOOTER_ROWS: u16 = 3;

    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(config.width, config.height, get_rng(config.seed)),
            style: config.style(),
            output: config.output.clone(),
            status: "Press g to generate a maze.".to_string(),
        }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop. Returns when the user quits.
    pub fn run(&mut self, stdout: &mut Stdout) -> std::io::Result<()> {
        tracing::info!("Started main app loop");
        self.draw(stdout)?;
        loop {
            let action = match event::read()? {
                // We only care about key presses and resizes
                event::Event::Key(event::KeyEvent { code, kind, .. })
                    if kind == event::KeyEventKind::Press =>
                {
                    match UserAction::from_key(code) {
                        Some(action) => Some(action),
                        None => continue,
                    }
                }
                event::Event::Resize(_, _) => None,
                _ => continue,
            };

            tracing::debug!("Handling user action: {:?}", action);
            match action {
                Some(UserAction::Quit) => break,
                Some(action) => self.handle(action),
                None => {}
            }
            self.draw(stdout)?;
        }
        tracing::info!("Exiting main app loop");
        Ok(())
    }

    fn handle(&mut self, action: UserAction) {
        self.status = match action {
            UserAction::Generate => {
                self.session.generate();
                let (width, height) = self.session.dimensions();
                format!("Generated a {}x{} maze.", width, height)
            }
            UserAction::Solve => {
                if self.session.maze().is_none() {
                    "Nothing to solve yet. Press g first.".to_string()
                } else {
                    match self.session.solve() {
                        Some(path) => format!("Path found! {} steps.", path.len()),
                        None => "No path found.".to_string(),
                    }
                }
            }
            UserAction::Export => match self.export() {
                Ok(Some(path)) => format!("Saved {}", path.display()),
                Ok(None) => "Nothing to export yet. Press g first.".to_string(),
                Err(e) => {
                    tracing::error!("Export failed: {}", e);
                    format!("Export failed: {}", e)
                }
            },
            UserAction::Quit => return,
        };
    }

    /// Writes the current maze, with its path if solved, as an image.
    /// Returns the written file, or `None` if there is no maze yet.
    pub fn export(&self) -> image::ImageResult<Option<PathBuf>> {
        let Some(maze) = self.session.maze() else {
            return Ok(None);
        };
        let raster = rasterize(maze, self.session.path(), &self.style);
        raster.save(&self.output)?;
        tracing::info!(
            "Exported {}x{} image to {}",
            raster.width(),
            raster.height(),
            self.output.display()
        );
        Ok(Some(self.output.clone()))
    }

    /// Redraw the whole screen: maze, status line and controls
    fn draw(&self, stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        if let Some(maze) = self.session.maze() {
            let grid = TileGrid::from_maze(maze, self.session.path());
            let (term_width, term_height) = terminal::size()?;
            if term_width < grid.width() * Tile::CELL_WIDTH
                || term_height < grid.height() + App::NUM_FOOTER_ROWS
            {
                let msg = format!(
                    "Terminal size is too small ({}x{}) for the maze ({}x{}) to display. Please resize the terminal.\r\n",
                    term_width,
                    term_height,
                    grid.width() * Tile::CELL_WIDTH,
                    grid.height() + App::NUM_FOOTER_ROWS,
                );
                queue!(
                    stdout,
                    style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold))
                )?;
            } else {
                for row in grid.rows() {
                    for tile in row {
                        queue!(stdout, style::Print(tile))?;
                    }
                    queue!(stdout, style::Print("\r\n"))?;
                }
            }
        }

        queue!(
            stdout,
            style::PrintStyledContent(
                format!("{}\r\n", self.status)
                    .with(Color::Green)
                    .attribute(Attribute::Bold)
            ),
            style::PrintStyledContent(
                "  g: Generate   s: Solve   e: Export image   Esc: Exit\r\n".with(Color::Cyan)
            ),
        )?;
        stdout.flush()?;
        Ok(())
    }
}

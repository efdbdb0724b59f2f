use crate::config::PlayersConfig;
use crate::error::GameError;
use crate::game::{BoardSize, GameEngine, GameStatus, Outcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    engine: GameEngine,
    players: PlayersConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(size: BoardSize, players: PlayersConfig) -> Result<Self, GameError> {
        Ok(App {
            engine: GameEngine::new(size)?,
            players,
            selected_column: size.width / 2, // Start in middle
            should_quit: false,
            message: None,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Some terminals report releases too; act on presses only
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let width = self.engine.size().width;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < width {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.engine.status() {
                GameStatus::Playing => self.drop_piece(),
                GameStatus::Idle | GameStatus::Over => self.start_game(),
            },
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = width / 2;
            }
            _ => {}
        }
    }

    fn start_game(&mut self) {
        let (player1, player2) = self.players.players();
        match self.engine.start_game(player1, player2) {
            Ok(()) => {
                self.selected_column = self.engine.size().width / 2;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        // Board widths are capped well below isize::MAX
        match self.engine.drop_piece(self.selected_column as isize) {
            Ok(placement) => {
                self.message = match placement.outcome {
                    Outcome::Win(player) => Some(format!("{player} won!")),
                    Outcome::Tie => Some("Tie!".to_string()),
                    Outcome::Continue => None,
                };
            }
            // Columns are labelled from 1 on screen
            Err(GameError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        App {
            engine: GameEngine::default(),
            players: PlayersConfig::default(),
            selected_column: BoardSize::default().width / 2,
            should_quit: false,
            message: None,
        }
    }
}

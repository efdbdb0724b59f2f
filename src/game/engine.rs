use std::fmt;

use super::{Board, BoardSize, Player, PlayerId};
use crate::error::GameError;

/// Lifecycle of a game: idle until started, playing until won or tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Idle,
    Playing,
    Over,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Over => "over",
        })
    }
}

/// What a successful drop led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Win(PlayerId),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Where a piece landed and the outcome it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
    pub outcome: Outcome,
}

/// Connect Four rules engine. Owns the board, the two players and whose turn
/// it is; the caller owns the engine and drives it one command at a time.
#[derive(Debug, Clone)]
pub struct GameEngine {
    size: BoardSize,
    status: GameStatus,
    board: Option<Board>,
    players: Option<[Player; 2]>,
    active: PlayerId,
    outcome: Option<Outcome>,
    move_count: usize,
}

impl GameEngine {
    /// Create an idle engine that will play on boards of the given size.
    /// Each dimension must be in `1..=MAX_DIMENSION`.
    pub fn new(size: BoardSize) -> Result<Self, GameError> {
        size.validate()?;
        Ok(Self::idle(size))
    }

    fn idle(size: BoardSize) -> Self {
        GameEngine {
            size,
            status: GameStatus::Idle,
            board: None,
            players: None,
            active: PlayerId::One,
            outcome: None,
            move_count: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The current board, if a game has been started since the last reset
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Player whose turn it is (or who made the final move, once over)
    pub fn active_player(&self) -> Option<PlayerId> {
        self.players.map(|_| self.active)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.as_ref().map(|players| match id {
            PlayerId::One => &players[0],
            PlayerId::Two => &players[1],
        })
    }

    /// The terminal outcome, once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Number of pieces placed in the current game
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        match (&self.board, self.status) {
            (Some(board), GameStatus::Playing) => (0..board.width())
                .filter(|&col| !board.is_column_full(col))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Start a new game on an empty board with player 1 to move.
    /// Allowed from `Idle` and, as a restart, from `Over`.
    pub fn start_game(&mut self, player1: Player, player2: Player) -> Result<(), GameError> {
        if self.status == GameStatus::Playing {
            return Err(GameError::InvalidState {
                status: self.status,
                operation: "start a game",
            });
        }
        if player1.id != PlayerId::One || player2.id != PlayerId::Two {
            return Err(GameError::InvalidPlayers);
        }

        self.board = Some(Board::new(self.size)?);
        self.players = Some([player1, player2]);
        self.active = PlayerId::One;
        self.outcome = None;
        self.move_count = 0;
        self.status = GameStatus::Playing;
        Ok(())
    }

    /// Drop the active player's piece into `column`.
    ///
    /// Out-of-range columns are rejected in every status. After a piece
    /// lands, a win for the mover is checked first, then a full board, and
    /// only otherwise does the turn pass to the other player.
    pub fn drop_piece(&mut self, column: isize) -> Result<Placement, GameError> {
        let width = self.size.width;
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < width)
            .ok_or(GameError::InvalidColumn { column, width })?;

        let board = match (self.status, self.board.as_mut()) {
            (GameStatus::Playing, Some(board)) => board,
            _ => {
                return Err(GameError::InvalidState {
                    status: self.status,
                    operation: "drop a piece",
                })
            }
        };

        let player = self.active;
        let row = board.drop_piece(col, player)?;
        self.move_count += 1;

        let outcome = if board.has_win(player) {
            Outcome::Win(player)
        } else if board.is_full() {
            Outcome::Tie
        } else {
            Outcome::Continue
        };

        if outcome.is_terminal() {
            self.status = GameStatus::Over;
            self.outcome = Some(outcome);
        } else {
            self.active = player.other();
        }

        Ok(Placement {
            row,
            column: col,
            player,
            outcome,
        })
    }

    /// Return to `Idle`, discarding the board and turn state
    pub fn reset(&mut self) {
        *self = GameEngine::idle(self.size);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::idle(BoardSize::default())
    }
}

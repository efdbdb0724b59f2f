use super::PlayerId;
use crate::error::GameError;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;
/// Largest accepted value for either dimension.
pub const MAX_DIMENSION: usize = 32;

/// Length of a winning line.
const CONNECT: usize = 4;

/// Directions a winning line can extend from its start cell, as (dy, dx):
/// rightward, downward, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

/// Board dimensions in rows (`height`) and columns (`width`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardSize {
    pub height: usize,
    pub width: usize,
}

impl BoardSize {
    pub fn new(height: usize, width: usize) -> Self {
        BoardSize { height, width }
    }

    /// Both dimensions must lie in `1..=MAX_DIMENSION`.
    pub fn validate(&self) -> Result<(), GameError> {
        let in_range = |d: usize| (1..=MAX_DIMENSION).contains(&d);
        if in_range(self.height) && in_range(self.width) {
            Ok(())
        } else {
            Err(GameError::InvalidBoardSize {
                height: self.height,
                width: self.width,
                max: MAX_DIMENSION,
            })
        }
    }

    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// A line of four board coordinates, each `(row, col)`.
pub type Line = [(usize, usize); CONNECT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board, rejecting sizes outside `1..=MAX_DIMENSION`
    pub fn new(size: BoardSize) -> Result<Self, GameError> {
        size.validate()?;
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the cell at a specific position, or `None` outside the board.
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.cells[row * self.width() + col])
    }

    /// Lowest empty row in a column, or `None` if the column is full
    pub fn find_spot(&self, col: usize) -> Option<usize> {
        if col >= self.width() {
            return None;
        }
        (0..self.height())
            .rev()
            .find(|&row| self.cells[row * self.width() + col] == Cell::Empty)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_spot(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, GameError> {
        if col >= self.width() {
            return Err(GameError::InvalidColumn {
                column: isize::try_from(col).unwrap_or(isize::MAX),
                width: self.width(),
            });
        }

        let row = self
            .find_spot(col)
            .ok_or(GameError::ColumnFull { column: col })?;
        let width = self.width();
        self.cells[row * width + col] = Cell::Occupied(player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Check whether `player` has four in a row anywhere on the board
    pub fn has_win(&self, player: PlayerId) -> bool {
        self.winning_line(player).is_some()
    }

    /// Scan every cell as the start of a line in each direction and return
    /// the first line of four held entirely by `player`.
    pub fn winning_line(&self, player: PlayerId) -> Option<Line> {
        for y in 0..self.height() {
            for x in 0..self.width() {
                for &(dy, dx) in &DIRECTIONS {
                    if let Some(line) = self.line_from(y, x, dy, dx) {
                        if line
                            .iter()
                            .all(|&(r, c)| self.get(r, c) == Some(Cell::Occupied(player)))
                        {
                            return Some(line);
                        }
                    }
                }
            }
        }
        None
    }

    /// Coordinates of the line of four starting at (y, x), or `None` if any
    /// of them falls off the board.
    fn line_from(&self, y: usize, x: usize, dy: isize, dx: isize) -> Option<Line> {
        let mut line = [(0, 0); CONNECT];
        for (i, slot) in line.iter_mut().enumerate() {
            let r = y as isize + dy * i as isize;
            let c = x as isize + dx * i as isize;
            if r < 0 || c < 0 || r >= self.height() as isize || c >= self.width() as isize {
                return None;
            }
            *slot = (r as usize, c as usize);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        let size = BoardSize::default();
        Board {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }
}

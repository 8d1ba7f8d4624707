use std::fmt;
use std::str::FromStr;

use super::error::{GameError, IllegalMoveReason};
use super::types::{Cell, Mark};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Row-major 3x3 board, index 0 is top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Cell::Empty)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    // Search helpers; callers have already checked the index.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark.cell();
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }
}

pub fn apply_move(board: &mut Board, index: usize, mark: Mark) -> Result<(), GameError> {
    match board.get(index) {
        None => Err(GameError::IllegalMove {
            index,
            reason: IllegalMoveReason::OutOfRange,
        }),
        Some(Cell::Empty) => {
            board.place(index, mark);
            Ok(())
        }
        Some(_) => Err(GameError::IllegalMove {
            index,
            reason: IllegalMoveReason::Occupied,
        }),
    }
}

pub fn legal_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

impl fmt::Display for Board {
    /// Compact form, e.g. `XO./.X./..O`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % BOARD_SIDE == 0 {
                write!(f, "/")?;
            }
            let symbol = match cell {
                Cell::Empty => '.',
                Cell::X => 'X',
                Cell::O => 'O',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = String;

    /// Accepts `X`, `O` and `.`, `_` or `-` for empty cells. Whitespace, `|`
    /// and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' => Cell::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(format!("Unexpected board character '{}'", other)),
            };
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = cell;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(format!("Board has {} cells, expected {}", count, CELL_COUNT));
        }
        Ok(Self { cells })
    }
}

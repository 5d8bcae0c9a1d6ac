use crate::game::board_layout::{board_multiplier, Multiplier};
use crate::game::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 15;
pub const CENTER: (usize, usize) = (7, 7);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Option<char>,
    pub multiplier: Multiplier,
}

/// 15x15 grid, row-major. Multipliers are fixed at creation; letters only
/// ever go from empty to filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

pub fn create_empty_board() -> Board {
    let cells = (0..BOARD_SIZE * BOARD_SIZE)
        .map(|i| Cell {
            letter: None,
            multiplier: board_multiplier(i / BOARD_SIZE, i % BOARD_SIZE),
        })
        .collect();
    Board { cells }
}

impl Default for Board {
    fn default() -> Self {
        create_empty_board()
    }
}

pub fn in_bounds(row: usize, col: usize) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

/// In-bounds orthogonal neighbours of a cell.
pub fn neighbours(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let candidates = [
        row.checked_sub(1).map(|r| (r, col)),
        Some((row + 1, col)),
        col.checked_sub(1).map(|c| (row, c)),
        Some((row, col + 1)),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter(|&(r, c)| in_bounds(r, c))
}

impl Board {
    /// Panics on out-of-bounds coordinates; callers check with [`in_bounds`].
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * BOARD_SIZE + col]
    }

    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        if in_bounds(row, col) {
            self.cell(row, col).letter
        } else {
            None
        }
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.letter_at(row, col).is_some()
    }

    /// True before the first word has been committed.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.letter.is_none())
    }

    /// 225 for any board built by [`create_empty_board`]; decoded boards
    /// are checked against it.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.letter.is_some()).count()
    }

    /// Commit accepted letters. Positions must already have been validated.
    pub fn place_letters(&mut self, positions: &[Position]) {
        for pos in positions {
            self.cells[pos.row * BOARD_SIZE + pos.col].letter = Some(pos.letter);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{:>3}", row)?;
            for col in 0..BOARD_SIZE {
                let cell = self.cell(row, col);
                let glyph = match (cell.letter, cell.multiplier) {
                    (Some(letter), _) => format!(" {} ", letter),
                    (None, Multiplier::Word(3)) => " = ".to_string(),
                    (None, Multiplier::Word(_)) => " - ".to_string(),
                    (None, Multiplier::Letter(3)) => " \" ".to_string(),
                    (None, Multiplier::Letter(_)) => " ' ".to_string(),
                    (None, Multiplier::None) => " . ".to_string(),
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

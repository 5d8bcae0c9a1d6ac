use serde::{Deserialize, Serialize};

/// A single letter at a board coordinate, either proposed or committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
    pub letter: char,
}

impl Position {
    pub fn new(row: usize, col: usize, letter: char) -> Self {
        Position { row, col, letter }
    }

    pub fn coords(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Axis of a placement: one shared row reads horizontally, which includes
    /// a single tile.
    pub fn of_placement(positions: &[Position]) -> Direction {
        match positions.first() {
            Some(first) if positions.iter().all(|p| p.row == first.row) => Direction::Horizontal,
            Some(_) => Direction::Vertical,
            None => Direction::Horizontal,
        }
    }

    /// Coordinate that varies along this axis.
    pub fn along(self, row: usize, col: usize) -> usize {
        match self {
            Direction::Horizontal => col,
            Direction::Vertical => row,
        }
    }

    /// Cell `offset` steps along this axis from `(row, col)`.
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col + offset),
            Direction::Vertical => (row + offset, col),
        }
    }
}

/// Parse `row:col:letter` triples separated by commas, e.g. `7:6:ก,7:7:า`.
pub fn parse_positions(input: &str) -> Result<Vec<Position>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let fields: Vec<&str> = part.split(':').collect();
            if fields.len() != 3 {
                return Err(format!("expected row:col:letter, got '{}'", part));
            }
            let row = fields[0]
                .parse::<usize>()
                .map_err(|e| format!("bad row in '{}': {}", part, e))?;
            let col = fields[1]
                .parse::<usize>()
                .map_err(|e| format!("bad col in '{}': {}", part, e))?;
            let mut letters = fields[2].chars();
            match (letters.next(), letters.next()) {
                (Some(letter), None) => Ok(Position::new(row, col, letter)),
                _ => Err(format!("expected a single letter in '{}'", part)),
            }
        })
        .collect()
}

//! Word discovery for a proposed placement.
//!
//! The committed board is never touched: candidate letters live in a
//! [`ScratchBoard`] overlay that also remembers which cells are new, so
//! multipliers apply only to letters placed this move.

use crate::game::board::{in_bounds, Board, BOARD_SIZE};
use crate::game::board_layout::Multiplier;
use crate::game::position::{Direction, Position};
use crate::scoring::scoring::score_word;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A word produced by one move, with its individual score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub positions: Vec<Position>,
    pub score: u32,
}

/// Committed board plus the letters being scored.
pub struct ScratchBoard<'a> {
    board: &'a Board,
    placed: HashMap<(usize, usize), char>,
}

impl<'a> ScratchBoard<'a> {
    pub fn new(board: &'a Board, positions: &[Position]) -> Self {
        let placed = positions.iter().map(|p| (p.coords(), p.letter)).collect();
        ScratchBoard { board, placed }
    }

    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.placed
            .get(&(row, col))
            .copied()
            .or_else(|| self.board.letter_at(row, col))
    }

    pub fn is_new(&self, row: usize, col: usize) -> bool {
        self.placed.contains_key(&(row, col))
    }

    pub fn multiplier(&self, row: usize, col: usize) -> Multiplier {
        self.board.cell(row, col).multiplier
    }

    /// Maximal run of letters through `(row, col)` along `direction`.
    pub fn word_through(&self, row: usize, col: usize, direction: Direction) -> Vec<Position> {
        let (mut r, mut c) = (row, col);
        loop {
            let previous = match direction {
                Direction::Horizontal => c.checked_sub(1).map(|pc| (r, pc)),
                Direction::Vertical => r.checked_sub(1).map(|pr| (pr, c)),
            };
            match previous {
                Some((pr, pc)) if self.letter_at(pr, pc).is_some() => {
                    r = pr;
                    c = pc;
                }
                _ => break,
            }
        }

        let mut run = Vec::new();
        for offset in 0..BOARD_SIZE {
            let (nr, nc) = direction.step(r, c, offset);
            if !in_bounds(nr, nc) {
                break;
            }
            match self.letter_at(nr, nc) {
                Some(letter) => run.push(Position::new(nr, nc, letter)),
                None => break,
            }
        }
        run
    }

    fn placed_word(&self, run: Vec<Position>) -> Option<PlacedWord> {
        if run.len() <= 1 {
            return None;
        }
        let word = run.iter().map(|p| p.letter).collect();
        let score = score_word(self, &run);
        Some(PlacedWord {
            word,
            positions: run,
            score,
        })
    }
}

/// Every word a placement forms: the primary word along the placement axis
/// first, then one perpendicular word per new tile. Overlapping
/// perpendicular words are kept and scored separately.
pub fn find_formed_words(board: &Board, positions: &[Position]) -> Vec<PlacedWord> {
    if positions.is_empty() {
        return Vec::new();
    }

    let scratch = ScratchBoard::new(board, positions);
    let direction = Direction::of_placement(positions);
    let mut words = Vec::new();

    let earliest = positions
        .iter()
        .min_by_key(|p| direction.along(p.row, p.col))
        .copied()
        .unwrap_or(positions[0]);

    if let Some(primary) =
        scratch.placed_word(scratch.word_through(earliest.row, earliest.col, direction))
    {
        words.push(primary);
    }

    let cross = direction.perpendicular();
    for pos in positions {
        if let Some(perpendicular) = scratch.placed_word(scratch.word_through(pos.row, pos.col, cross)) {
            words.push(perpendicular);
        }
    }

    words
}

use crate::game::board::Board;
use crate::game::distribution::letter_score;
use crate::game::position::Position;
use crate::game::rack::RACK_SIZE;
use crate::scoring::words::{find_formed_words, PlacedWord, ScratchBoard};
use serde::{Deserialize, Serialize};

/// Flat bonus for playing a whole rack in one move.
pub const BINGO_BONUS: u32 = 50;

/// Outcome of scoring one placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub words: Vec<PlacedWord>,
    pub bonus: u32,
    pub total: u32,
}

impl MoveScore {
    /// The word along the placement axis, or the first perpendicular word
    /// when the axis run was a single letter.
    pub fn primary_word(&self) -> Option<&str> {
        self.words.first().map(|w| w.word.as_str())
    }
}

/// Score of one word. New letters take their cell's letter premium and
/// compound its word premium; committed letters count at face value.
pub fn score_word(scratch: &ScratchBoard<'_>, run: &[Position]) -> u32 {
    let mut total = 0;
    let mut word_multiplier = 1;

    for pos in run {
        let value = letter_score(pos.letter);
        if scratch.is_new(pos.row, pos.col) {
            let multiplier = scratch.multiplier(pos.row, pos.col);
            total += value * multiplier.letter_factor();
            word_multiplier *= multiplier.word_factor();
        } else {
            total += value;
        }
    }

    total * word_multiplier
}

/// Words formed by a placement and the move total. The all-tiles bonus is
/// added once per move, however many words the move forms.
pub fn score_placement(board: &Board, positions: &[Position]) -> MoveScore {
    let words = find_formed_words(board, positions);
    let bonus = if positions.len() == RACK_SIZE { BINGO_BONUS } else { 0 };
    let total = words.iter().map(|w| w.score).sum::<u32>() + bonus;

    MoveScore {
        words,
        bonus,
        total,
    }
}

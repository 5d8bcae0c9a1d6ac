//! Move search for the computer opponent.

pub mod anchors;
pub mod combinatorics;
pub mod exhaustive;
pub mod fallback;
pub mod simple;

use crate::config::AiConfig;
use crate::dictionary::{Dictionary, WordSource};
use crate::game::board::Board;
use crate::game::position::Position;
use crate::game::rack::Rack;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use anchors::{find_anchor_points, try_place_word, AnchorPoint};
pub use fallback::fallback_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every rack permutation at every anchor, best score wins
    Exhaustive,
    /// First playable word from a random dictionary sample
    Simple,
}

/// What the AI does with its turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum AiMove {
    Place {
        positions: Vec<Position>,
        word: String,
        score: u32,
    },
    /// Rack indices to trade in.
    Swap { indices: Vec<usize> },
    Pass,
}

/// Run the chosen search, falling back to swap or pass. Never fails.
pub async fn find_move<S, R>(
    strategy: Strategy,
    board: &Board,
    rack: &Rack,
    dictionary: &Dictionary<S>,
    config: &AiConfig,
    rng: &mut R,
) -> AiMove
where
    S: WordSource,
    R: Rng + ?Sized,
{
    let found = match strategy {
        Strategy::Exhaustive => exhaustive::find_best_move(board, rack, dictionary, config).await,
        Strategy::Simple => simple::find_simple_move(board, rack, dictionary.words(), config, rng),
    };

    match found {
        Some(placement) => placement,
        None => {
            let fallback = fallback_move(rack, config);
            log::info!("🤖 no playable word for rack '{}', falling back to {:?}", rack.letters(), fallback);
            fallback
        }
    }
}

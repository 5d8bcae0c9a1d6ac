//! Dictionary-sampling search: cheap, and weak on purpose.

use crate::ai::anchors::{find_anchor_points, try_place_word};
use crate::ai::AiMove;
use crate::config::AiConfig;
use crate::game::board::Board;
use crate::game::placement::validate_placement;
use crate::game::rack::Rack;
use crate::scoring::score_placement;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle the short words of the list, keep a sample, and play the first one
/// the rack can spell that validates at the first anchor. No scoring
/// comparison happens between candidates, and cross words are not checked.
pub fn find_simple_move<R: Rng + ?Sized>(
    board: &Board,
    rack: &Rack,
    words: &[String],
    config: &AiConfig,
    rng: &mut R,
) -> Option<AiMove> {
    let anchor = find_anchor_points(board).into_iter().next()?;

    let mut pool: Vec<&String> = words
        .iter()
        .filter(|w| {
            let len = w.chars().count();
            len >= config.min_sample_len && len <= config.max_sample_len
        })
        .collect();
    pool.shuffle(rng);
    pool.truncate(config.sample_pool_size);

    for word in pool {
        if !rack.can_spell(word) {
            continue;
        }
        let letters: Vec<char> = word.chars().collect();
        let Some(positions) = try_place_word(board, &letters, &anchor) else {
            continue;
        };
        if validate_placement(board, &positions).is_err() {
            continue;
        }

        let score = score_placement(board, &positions);
        log::debug!("simple search picked '{}' for {} points", word, score.total);
        return Some(AiMove::Place {
            positions,
            word: word.clone(),
            score: score.total,
        });
    }

    None
}

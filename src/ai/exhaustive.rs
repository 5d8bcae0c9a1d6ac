//! Full rack search over every anchor.
//!
//! Spell every distinct candidate the rack allows and keep the dictionary
//! words. A first parallel sweep over the anchors collects the formed words
//! not yet looked up; those are checked in one batch. A second sweep keeps
//! only the best legal layout per anchor, so no anchor's full layout list is
//! held at once. Lookups are memoised per turn and run with bounded
//! concurrency; anchors and candidates are folded in generation order so
//! ties go to the first move found.

use crate::ai::anchors::{find_anchor_points, try_place_word, AnchorPoint};
use crate::ai::combinatorics::candidate_words;
use crate::ai::AiMove;
use crate::config::AiConfig;
use crate::dictionary::{Dictionary, WordSource};
use crate::game::board::Board;
use crate::game::placement::validate_placement;
use crate::game::position::Position;
use crate::game::rack::Rack;
use crate::scoring::{score_placement, MoveScore};
use futures::stream::{self, StreamExt};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// A layout that passed the validator, before its cross words are checked.
#[derive(Debug, Clone)]
struct Layout {
    word: String,
    positions: Vec<Position>,
    score: MoveScore,
}

pub async fn find_best_move<S: WordSource>(
    board: &Board,
    rack: &Rack,
    dictionary: &Dictionary<S>,
    config: &AiConfig,
) -> Option<AiMove> {
    let candidates = candidate_words(rack, config.max_word_len);
    let mut known = check_words(dictionary, candidates.clone(), config.lookup_concurrency).await;
    let playable: Vec<String> = candidates
        .into_iter()
        .filter(|word| known.get(word).copied().unwrap_or(false))
        .collect();

    if playable.is_empty() {
        log::debug!("no dictionary word in rack '{}'", rack.letters());
        return None;
    }

    let anchors = find_anchor_points(board);
    let unknown: HashSet<String> = anchors
        .par_iter()
        .map(|anchor| unknown_words_at_anchor(board, &playable, anchor, &known))
        .reduce(HashSet::new, |mut all, words| {
            all.extend(words);
            all
        });
    // sorted so lookups go out in a stable order
    let mut to_check: Vec<String> = unknown.into_iter().collect();
    to_check.sort();
    known.extend(check_words(dictionary, to_check, config.lookup_concurrency).await);

    let per_anchor: Vec<Option<Layout>> = anchors
        .par_iter()
        .map(|anchor| best_at_anchor(board, &playable, anchor, &known))
        .collect();
    let best = per_anchor.into_iter().flatten().fold(None, keep_better);

    best.map(|layout| {
        log::debug!(
            "best move '{}' for {} points across {} anchors",
            layout.word,
            layout.score.total,
            anchors.len()
        );
        AiMove::Place {
            positions: layout.positions,
            word: layout.word,
            score: layout.score.total,
        }
    })
}

/// Replace the current best only on a strictly higher score.
fn keep_better(best: Option<Layout>, layout: Layout) -> Option<Layout> {
    match best {
        Some(current) if layout.score.total <= current.score.total => Some(current),
        _ => Some(layout),
    }
}

fn layouts_at_anchor<'a>(
    board: &'a Board,
    playable: &'a [String],
    anchor: &'a AnchorPoint,
) -> impl Iterator<Item = Layout> + 'a {
    playable.iter().filter_map(move |word| {
        let letters: Vec<char> = word.chars().collect();
        let positions = try_place_word(board, &letters, anchor)?;
        validate_placement(board, &positions).ok()?;
        let score = score_placement(board, &positions);
        if score.words.is_empty() {
            return None;
        }
        Some(Layout {
            word: word.clone(),
            positions,
            score,
        })
    })
}

fn unknown_words_at_anchor(
    board: &Board,
    playable: &[String],
    anchor: &AnchorPoint,
    known: &HashMap<String, bool>,
) -> HashSet<String> {
    layouts_at_anchor(board, playable, anchor)
        .flat_map(|layout| layout.score.words.into_iter().map(|w| w.word))
        .filter(|word| !known.contains_key(word))
        .collect()
}

fn best_at_anchor(
    board: &Board,
    playable: &[String],
    anchor: &AnchorPoint,
    known: &HashMap<String, bool>,
) -> Option<Layout> {
    layouts_at_anchor(board, playable, anchor)
        .filter(|layout| {
            layout
                .score
                .words
                .iter()
                .all(|w| known.get(&w.word).copied().unwrap_or(false))
        })
        .fold(None, keep_better)
}

/// Membership for each distinct word, looked up with bounded concurrency.
async fn check_words<S: WordSource>(
    dictionary: &Dictionary<S>,
    words: Vec<String>,
    concurrency: usize,
) -> HashMap<String, bool> {
    stream::iter(words)
        .map(|word| async move {
            let found = dictionary.contains(&word).await;
            (word, found)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}

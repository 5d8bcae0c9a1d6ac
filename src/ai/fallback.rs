use crate::ai::AiMove;
use crate::config::AiConfig;
use crate::game::rack::Rack;

/// Move when the search found nothing: swap the first few low-value tiles,
/// or pass when there are none.
pub fn fallback_move(rack: &Rack, config: &AiConfig) -> AiMove {
    let indices: Vec<usize> = rack
        .tiles()
        .iter()
        .enumerate()
        .filter(|(_, tile)| tile.score <= config.swap_score_threshold)
        .map(|(i, _)| i)
        .take(config.max_swap)
        .collect();

    if indices.is_empty() {
        AiMove::Pass
    } else {
        AiMove::Swap { indices }
    }
}

use crate::game::game_state::{Game, Winner};
use serde::{Deserialize, Serialize};

/// Lifetime results of one owner against the AI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub owner_id: String,
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub games_draw: u32,
    pub total_score: u64,
    pub highest_score: u32,
    pub average_score: u32,
    pub updated_at: i64,
}

impl PlayerStats {
    pub fn new(owner_id: &str) -> Self {
        PlayerStats {
            owner_id: owner_id.to_string(),
            ..PlayerStats::default()
        }
    }
}

/// Fold a finished game into the owner's stats. Games without a winner
/// (still playing or abandoned) leave the stats untouched.
pub fn apply_result(stats: &PlayerStats, game: &Game) -> PlayerStats {
    let Some(winner) = game.winner else {
        return stats.clone();
    };

    let mut next = stats.clone();
    next.games_played += 1;
    match winner {
        Winner::Player => next.games_won += 1,
        Winner::Ai => next.games_lost += 1,
        Winner::Draw => next.games_draw += 1,
    }
    next.total_score += u64::from(game.player_score);
    next.highest_score = next.highest_score.max(game.player_score);
    next.average_score = (next.total_score / u64::from(next.games_played)) as u32;
    next.updated_at = game.finished_at.unwrap_or(game.updated_at);
    next
}

use crate::game::board::Board;
use crate::game::position::Position;
use crate::game::rack::Rack;
use crate::game::tile_bag::TileBag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Ai => "ai",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "player" => Some(Side::Player),
            "ai" => Some(Side::Ai),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Finished,
    Abandoned,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Finished => "finished",
            GameStatus::Abandoned => "abandoned",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "playing" => Some(GameStatus::Playing),
            "finished" => Some(GameStatus::Finished),
            "abandoned" => Some(GameStatus::Abandoned),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Ai,
    Draw,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Player => "player",
            Winner::Ai => "ai",
            Winner::Draw => "draw",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "player" => Some(Winner::Player),
            "ai" => Some(Winner::Ai),
            "draw" => Some(Winner::Draw),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveAction {
    Place,
    Swap,
    Pass,
}

impl MoveAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveAction::Place => "place",
            MoveAction::Swap => "swap",
            MoveAction::Pass => "pass",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "place" => Some(MoveAction::Place),
            "swap" => Some(MoveAction::Swap),
            "pass" => Some(MoveAction::Pass),
            _ => None,
        }
    }
}

/// One entry of a game's history. Only the primary word and the move total
/// are kept, never the per-word breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub move_number: u32,
    pub side: Side,
    pub action: MoveAction,
    pub word: Option<String>,
    pub positions: Vec<Position>,
    pub score: u32,
    pub created_at: i64,
}

/// Aggregate root for one player-versus-AI game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub owner_id: String,
    pub board: Board,
    pub player_rack: Rack,
    pub ai_rack: Rack,
    pub bag: TileBag,
    pub player_score: u32,
    pub ai_score: u32,
    pub current_turn: Side,
    pub status: GameStatus,
    pub winner: Option<Winner>,
    pub moves: Vec<MoveRecord>,
    pub created_at: i64,
    pub updated_at: i64,
    pub finished_at: Option<i64>,
}

impl Game {
    pub fn rack_mut(&mut self, side: Side) -> &mut Rack {
        match side {
            Side::Player => &mut self.player_rack,
            Side::Ai => &mut self.ai_rack,
        }
    }

    pub fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Player => &mut self.player_score,
            Side::Ai => &mut self.ai_score,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn next_move_number(&self) -> u32 {
        self.moves.len() as u32 + 1
    }

    /// Tiles accounted for across bag, racks and board.
    pub fn tile_count(&self) -> usize {
        self.bag.len() + self.player_rack.len() + self.ai_rack.len() + self.board.occupied_count()
    }
}

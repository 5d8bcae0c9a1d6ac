//! Persistence of games, move history and player stats.

pub mod sqlite;
pub mod stats;

use crate::game::game_state::{Game, MoveRecord};
use std::collections::HashMap;
use std::sync::Mutex;

pub use sqlite::SqliteGameStore;
pub use stats::{apply_result, PlayerStats};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid stored JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unexpected value '{value}' in column {column}")]
    Corrupt { column: &'static str, value: String },

    #[error("store lock poisoned")]
    Poisoned,
}

/// Where games live between requests. Writes replace the whole game,
/// including its move history.
pub trait GameStore: Send + Sync {
    fn load_game(&self, id: &str) -> Result<Option<Game>, StorageError>;

    fn save_game(&self, game: &Game) -> Result<(), StorageError>;

    /// Games of one owner, newest first.
    fn list_games(&self, owner_id: &str) -> Result<Vec<Game>, StorageError>;

    fn load_moves(&self, game_id: &str) -> Result<Vec<MoveRecord>, StorageError>;

    fn load_stats(&self, owner_id: &str) -> Result<Option<PlayerStats>, StorageError>;

    fn save_stats(&self, stats: &PlayerStats) -> Result<(), StorageError>;

    /// Write a game and its owner's stats as one unit: both land or neither.
    fn save_game_with_stats(&self, game: &Game, stats: &PlayerStats) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: Mutex<HashMap<String, Game>>,
    stats: Mutex<HashMap<String, PlayerStats>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryGameStore {
    fn load_game(&self, id: &str) -> Result<Option<Game>, StorageError> {
        let games = self.games.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(games.get(id).cloned())
    }

    fn save_game(&self, game: &Game) -> Result<(), StorageError> {
        let mut games = self.games.lock().map_err(|_| StorageError::Poisoned)?;
        games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    fn list_games(&self, owner_id: &str) -> Result<Vec<Game>, StorageError> {
        let games = self.games.lock().map_err(|_| StorageError::Poisoned)?;
        let mut owned: Vec<Game> = games
            .values()
            .filter(|g| g.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(owned)
    }

    fn load_moves(&self, game_id: &str) -> Result<Vec<MoveRecord>, StorageError> {
        let games = self.games.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(games.get(game_id).map(|g| g.moves.clone()).unwrap_or_default())
    }

    fn load_stats(&self, owner_id: &str) -> Result<Option<PlayerStats>, StorageError> {
        let stats = self.stats.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(stats.get(owner_id).cloned())
    }

    fn save_stats(&self, stats: &PlayerStats) -> Result<(), StorageError> {
        let mut all = self.stats.lock().map_err(|_| StorageError::Poisoned)?;
        all.insert(stats.owner_id.clone(), stats.clone());
        Ok(())
    }

    fn save_game_with_stats(&self, game: &Game, stats: &PlayerStats) -> Result<(), StorageError> {
        let mut games = self.games.lock().map_err(|_| StorageError::Poisoned)?;
        let mut all = self.stats.lock().map_err(|_| StorageError::Poisoned)?;
        games.insert(game.id.clone(), game.clone());
        all.insert(stats.owner_id.clone(), stats.clone());
        Ok(())
    }
}

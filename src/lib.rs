//! # Thai Scrabble Library
//!
//! Rules engine and computer opponent for a two-player Thai word game on a
//! 15×15 board.
//!
//! ## Features
//!
//! - **Game Engine**: board, tiles, racks, placement rules and turn flow
//! - **Scoring**: premium squares, cross words and the bingo bonus
//! - **AI Engine**: exhaustive and sampled move search with a swap/pass fallback
//! - **Storage**: SQLite persistence of games, history, stats and the word list
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use thai_scrabble::{AppConfig, Dictionary, GameService, MemoryGameStore};
//!
//! # async fn run() -> thai_scrabble::Result<()> {
//! let dictionary = Arc::new(Dictionary::from_words(["กา", "ขา"]));
//! let service = GameService::new(Arc::new(MemoryGameStore::new()), dictionary, AppConfig::default());
//! let game = service.create_game("alice").await?;
//! service.pass(&game.id, "alice").await?;
//! let (_game, _ai_move) = service.ai_turn(&game.id, "alice").await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Move search for the computer side
pub mod ai;

/// Search and house-rule settings
pub mod config;

/// Word lookup, local list plus optional backing source
pub mod dictionary;

/// Core game logic and rules
pub mod game;

/// Logger setup
pub mod logging;

/// Scoring of placements and formed words
pub mod scoring;

/// Turn orchestration and the per-game service
pub mod services;

/// Game, history and stats persistence
pub mod storage;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use ai::{AiMove, Strategy};
pub use config::{AiConfig, AppConfig, ConfigError, RulesConfig};
pub use dictionary::{Dictionary, DictionaryError, NoRemoteLookup, WordList, WordSource};
pub use game::game_state::{Game, GameStatus, MoveAction, MoveRecord, Side, Winner};
pub use game::position::Position;
pub use scoring::MoveScore;
pub use services::{GameError, GameService};
pub use storage::{GameStore, MemoryGameStore, PlayerStats, SqliteGameStore, StorageError};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Thai Scrabble library
#[derive(Debug, thiserror::Error)]
pub enum ThaiScrabbleError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ThaiScrabbleError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// src/services/game_service.rs - store + dictionary + rules wired together
//
// Each request loads the game, takes the per-game lock, runs one pure
// transition and writes the result back. Nothing is written on rejection.

use crate::ai::AiMove;
use crate::config::AppConfig;
use crate::dictionary::{Dictionary, WordSource};
use crate::game::game_state::{Game, GameStatus, MoveRecord};
use crate::game::position::Position;
use crate::scoring::MoveScore;
use crate::services::game_locks::GameLocks;
use crate::services::game_manager::{self, GameError};
use crate::storage::{apply_result, GameStore, PlayerStats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub struct GameService<G, S> {
    store: Arc<G>,
    dictionary: Arc<Dictionary<S>>,
    config: AppConfig,
    locks: GameLocks,
    owner_locks: GameLocks,
    seeds: Arc<Mutex<StdRng>>,
}

impl<G, S> Clone for GameService<G, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            dictionary: self.dictionary.clone(),
            config: self.config.clone(),
            locks: self.locks.clone(),
            owner_locks: self.owner_locks.clone(),
            seeds: self.seeds.clone(),
        }
    }
}

impl<G: GameStore, S: WordSource> GameService<G, S> {
    pub fn new(store: Arc<G>, dictionary: Arc<Dictionary<S>>, config: AppConfig) -> Self {
        Self::with_rng(store, dictionary, config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Deterministic bags and AI choices, for tests and replays.
    pub fn with_seed(store: Arc<G>, dictionary: Arc<Dictionary<S>>, config: AppConfig, seed: u64) -> Self {
        Self::with_rng(store, dictionary, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: Arc<G>, dictionary: Arc<Dictionary<S>>, config: AppConfig, rng: StdRng) -> Self {
        Self {
            store,
            dictionary,
            config,
            locks: GameLocks::new(),
            owner_locks: GameLocks::new(),
            seeds: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fresh generator for one request, so no lock is held across awaits.
    fn turn_rng(&self) -> StdRng {
        let mut seeds = self.seeds.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        StdRng::seed_from_u64(seeds.random())
    }

    /// Load a game owned by `owner_id`. Someone else's game is reported as
    /// missing.
    fn load_owned(&self, game_id: &str, owner_id: &str) -> Result<Game, GameError> {
        match self.store.load_game(game_id)? {
            Some(game) if game.owner_id == owner_id => Ok(game),
            _ => Err(GameError::GameNotFound(game_id.to_string())),
        }
    }

    /// Save the game; a finished game is saved together with its owner's
    /// updated stats, under the owner's lock.
    async fn save_and_record(&self, game: &Game) -> Result<(), GameError> {
        if game.status != GameStatus::Finished {
            self.store.save_game(game)?;
            return Ok(());
        }

        let _owner = self.owner_locks.acquire(&game.owner_id).await;
        let current = self
            .store
            .load_stats(&game.owner_id)?
            .unwrap_or_else(|| PlayerStats::new(&game.owner_id));
        let updated = apply_result(&current, game);
        self.store.save_game_with_stats(game, &updated)?;
        log::info!(
            "📊 Stats for {}: {} played, {} won, best {}",
            updated.owner_id,
            updated.games_played,
            updated.games_won,
            updated.highest_score
        );
        Ok(())
    }

    // ============================================================================
    // COMMANDS
    // ============================================================================

    pub async fn create_game(&self, owner_id: &str) -> Result<Game, GameError> {
        let id = Uuid::new_v4().to_string();
        let mut rng = self.turn_rng();
        let game = game_manager::create_game(&id, owner_id, &mut rng);
        self.store.save_game(&game)?;
        Ok(game)
    }

    pub async fn place_word(
        &self,
        game_id: &str,
        owner_id: &str,
        positions: &[Position],
    ) -> Result<(Game, MoveScore), GameError> {
        let _guard = self.locks.acquire(game_id).await;
        let game = self.load_owned(game_id, owner_id)?;
        let (next, score) = game_manager::apply_player_place(&game, positions, self.dictionary.as_ref()).await?;
        self.store.save_game(&next)?;
        Ok((next, score))
    }

    pub async fn pass(&self, game_id: &str, owner_id: &str) -> Result<Game, GameError> {
        let _guard = self.locks.acquire(game_id).await;
        let game = self.load_owned(game_id, owner_id)?;
        let next = game_manager::apply_player_pass(&game)?;
        self.store.save_game(&next)?;
        Ok(next)
    }

    pub async fn ai_turn(&self, game_id: &str, owner_id: &str) -> Result<(Game, AiMove), GameError> {
        let _guard = self.locks.acquire(game_id).await;
        let game = self.load_owned(game_id, owner_id)?;
        let mut rng = self.turn_rng();
        let (next, applied) =
            game_manager::process_ai_turn(&game, self.dictionary.as_ref(), &self.config, &mut rng).await?;
        self.save_and_record(&next).await?;
        Ok((next, applied))
    }

    pub async fn abandon(&self, game_id: &str, owner_id: &str) -> Result<Game, GameError> {
        let _guard = self.locks.acquire(game_id).await;
        let game = self.load_owned(game_id, owner_id)?;
        let next = game_manager::abandon_game(&game)?;
        self.store.save_game(&next)?;
        Ok(next)
    }

    // ============================================================================
    // QUERIES
    // ============================================================================

    pub async fn get_game(&self, game_id: &str, owner_id: &str) -> Result<Game, GameError> {
        self.load_owned(game_id, owner_id)
    }

    pub async fn list_games(&self, owner_id: &str) -> Result<Vec<Game>, GameError> {
        Ok(self.store.list_games(owner_id)?)
    }

    pub async fn moves(&self, game_id: &str, owner_id: &str) -> Result<Vec<MoveRecord>, GameError> {
        self.load_owned(game_id, owner_id)?;
        Ok(self.store.load_moves(game_id)?)
    }

    pub async fn stats(&self, owner_id: &str) -> Result<PlayerStats, GameError> {
        Ok(self
            .store
            .load_stats(owner_id)?
            .unwrap_or_else(|| PlayerStats::new(owner_id)))
    }
}

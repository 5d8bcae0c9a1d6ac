//! SQLite-backed game store and word source.

use crate::dictionary::{DictionaryError, WordSource};
use crate::game::board::{Board, BOARD_SIZE};
use crate::game::game_state::{Game, GameStatus, MoveAction, MoveRecord, Side, Winner};
use crate::game::position::Position;
use crate::game::rack::Rack;
use crate::game::tile_bag::TileBag;
use crate::storage::{GameStore, PlayerStats, StorageError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const GAME_COLUMNS: &str = "id, owner_id, status, player_score, ai_score, current_turn, \
     board_state, player_tiles, ai_tiles, tile_bag, winner, created_at, updated_at, finished_at";

/// Games, moves, stats and the word list in one database file.
#[derive(Clone)]
pub struct SqliteGameStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteGameStore {
    /// Open (or create) the database file and make sure the tables exist.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_tables()?;
        Ok(store)
    }

    /// In-memory database, gone when the last clone is dropped.
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_tables()?;
        Ok(store)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }

    fn init_tables(&self) -> Result<(), StorageError> {
        let conn = self.lock()?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS games (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'playing',
                player_score INTEGER NOT NULL DEFAULT 0,
                ai_score INTEGER NOT NULL DEFAULT 0,
                current_turn TEXT NOT NULL DEFAULT 'player',
                board_state TEXT NOT NULL,
                player_tiles TEXT NOT NULL,
                ai_tiles TEXT NOT NULL,
                tile_bag TEXT NOT NULL,
                winner TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                finished_at INTEGER
            );

            CREATE TABLE IF NOT EXISTS game_moves (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                game_id TEXT NOT NULL,
                move_number INTEGER NOT NULL,
                player TEXT NOT NULL,
                word TEXT,
                positions TEXT NOT NULL,
                score INTEGER NOT NULL DEFAULT 0,
                action TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (game_id) REFERENCES games(id) ON DELETE CASCADE,
                UNIQUE(game_id, move_number)
            );

            CREATE TABLE IF NOT EXISTS user_stats (
                owner_id TEXT PRIMARY KEY,
                games_played INTEGER NOT NULL DEFAULT 0,
                games_won INTEGER NOT NULL DEFAULT 0,
                games_lost INTEGER NOT NULL DEFAULT 0,
                games_draw INTEGER NOT NULL DEFAULT 0,
                total_score INTEGER NOT NULL DEFAULT 0,
                highest_score INTEGER NOT NULL DEFAULT 0,
                average_score INTEGER NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS dictionary (
                word TEXT PRIMARY KEY
            );

            CREATE INDEX IF NOT EXISTS idx_games_owner ON games(owner_id, created_at);
            CREATE INDEX IF NOT EXISTS idx_moves_game ON game_moves(game_id, move_number);
            "#,
        )?;

        Ok(())
    }

    // ==================== Dictionary ====================

    /// Add words to the dictionary table, skipping blanks and words already
    /// present. Returns how many were new.
    pub fn seed_words<I, S>(&self, words: I) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut added = 0;
        {
            let mut stmt = tx.prepare("INSERT OR IGNORE INTO dictionary (word) VALUES (?1)")?;
            for word in words {
                let word = word.as_ref().trim();
                if word.is_empty() {
                    continue;
                }
                added += stmt.execute(params![word])?;
            }
        }
        tx.commit()?;
        Ok(added)
    }

    pub fn word_count(&self) -> Result<usize, StorageError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM dictionary", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn has_word(&self, word: &str) -> Result<bool, StorageError> {
        let conn = self.lock()?;
        let found = conn
            .query_row(
                "SELECT 1 FROM dictionary WHERE word = ?1",
                params![word],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn all_words(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT word FROM dictionary ORDER BY rowid")?;
        let words = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(words)
    }

    // ==================== Moves ====================

    fn moves_for(conn: &Connection, game_id: &str) -> Result<Vec<MoveRecord>, StorageError> {
        let mut stmt = conn.prepare(
            "SELECT move_number, player, action, word, positions, score, created_at
             FROM game_moves WHERE game_id = ?1 ORDER BY move_number",
        )?;
        let rows = stmt
            .query_map(params![game_id], |row| {
                Ok((
                    row.get::<_, u32>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, u32>(5)?,
                    row.get::<_, i64>(6)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(move_number, player, action, word, positions, score, created_at)| -> Result<MoveRecord, StorageError> {
                Ok(MoveRecord {
                    move_number,
                    side: parse_column("player", &player, Side::from_str)?,
                    action: parse_column("action", &action, MoveAction::from_str)?,
                    word,
                    positions: serde_json::from_str::<Vec<Position>>(&positions)?,
                    score,
                    created_at,
                })
            })
            .collect()
    }
}

/// Raw `games` row before the JSON columns are decoded.
struct GameRow {
    id: String,
    owner_id: String,
    status: String,
    player_score: u32,
    ai_score: u32,
    current_turn: String,
    board_state: String,
    player_tiles: String,
    ai_tiles: String,
    tile_bag: String,
    winner: Option<String>,
    created_at: i64,
    updated_at: i64,
    finished_at: Option<i64>,
}

impl GameRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(GameRow {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            status: row.get(2)?,
            player_score: row.get(3)?,
            ai_score: row.get(4)?,
            current_turn: row.get(5)?,
            board_state: row.get(6)?,
            player_tiles: row.get(7)?,
            ai_tiles: row.get(8)?,
            tile_bag: row.get(9)?,
            winner: row.get(10)?,
            created_at: row.get(11)?,
            updated_at: row.get(12)?,
            finished_at: row.get(13)?,
        })
    }

    fn into_game(self, moves: Vec<MoveRecord>) -> Result<Game, StorageError> {
        let board: Board = serde_json::from_str(&self.board_state)?;
        if board.cell_count() != BOARD_SIZE * BOARD_SIZE {
            return Err(StorageError::Corrupt {
                column: "board_state",
                value: format!("{} cells", board.cell_count()),
            });
        }

        let winner = match self.winner {
            Some(w) => Some(parse_column("winner", &w, Winner::from_str)?),
            None => None,
        };

        Ok(Game {
            status: parse_column("status", &self.status, GameStatus::from_str)?,
            current_turn: parse_column("current_turn", &self.current_turn, Side::from_str)?,
            board,
            player_rack: serde_json::from_str::<Rack>(&self.player_tiles)?,
            ai_rack: serde_json::from_str::<Rack>(&self.ai_tiles)?,
            bag: serde_json::from_str::<TileBag>(&self.tile_bag)?,
            id: self.id,
            owner_id: self.owner_id,
            player_score: self.player_score,
            ai_score: self.ai_score,
            winner,
            moves,
            created_at: self.created_at,
            updated_at: self.updated_at,
            finished_at: self.finished_at,
        })
    }
}

fn parse_column<T>(
    column: &'static str,
    value: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, StorageError> {
    parse(value).ok_or_else(|| StorageError::Corrupt {
        column,
        value: value.to_string(),
    })
}

impl GameStore for SqliteGameStore {
    fn load_game(&self, id: &str) -> Result<Option<Game>, StorageError> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                &format!("SELECT {} FROM games WHERE id = ?1", GAME_COLUMNS),
                params![id],
                GameRow::from_row,
            )
            .optional()?;

        match row {
            Some(row) => {
                let moves = Self::moves_for(&conn, id)?;
                row.into_game(moves).map(Some)
            }
            None => Ok(None),
        }
    }

    fn save_game(&self, game: &Game) -> Result<(), StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        write_game(&tx, game)?;
        tx.commit()?;
        Ok(())
    }

    fn save_game_with_stats(&self, game: &Game, stats: &PlayerStats) -> Result<(), StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        write_game(&tx, game)?;
        write_stats(&tx, stats)?;
        tx.commit()?;
        Ok(())
    }

    fn list_games(&self, owner_id: &str) -> Result<Vec<Game>, StorageError> {
        let conn = self.lock()?;
        let rows = {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM games WHERE owner_id = ?1 ORDER BY created_at DESC, id ASC",
                GAME_COLUMNS
            ))?;
            let rows = stmt
                .query_map(params![owner_id], GameRow::from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        };

        rows.into_iter()
            .map(|row| -> Result<Game, StorageError> {
                let moves = Self::moves_for(&conn, &row.id)?;
                row.into_game(moves)
            })
            .collect()
    }

    fn load_moves(&self, game_id: &str) -> Result<Vec<MoveRecord>, StorageError> {
        let conn = self.lock()?;
        Self::moves_for(&conn, game_id)
    }

    fn load_stats(&self, owner_id: &str) -> Result<Option<PlayerStats>, StorageError> {
        let conn = self.lock()?;
        let stats = conn
            .query_row(
                "SELECT owner_id, games_played, games_won, games_lost, games_draw,
                        total_score, highest_score, average_score, updated_at
                 FROM user_stats WHERE owner_id = ?1",
                params![owner_id],
                |row| {
                    Ok(PlayerStats {
                        owner_id: row.get(0)?,
                        games_played: row.get(1)?,
                        games_won: row.get(2)?,
                        games_lost: row.get(3)?,
                        games_draw: row.get(4)?,
                        total_score: row.get::<_, i64>(5)? as u64,
                        highest_score: row.get(6)?,
                        average_score: row.get(7)?,
                        updated_at: row.get(8)?,
                    })
                },
            )
            .optional()?;
        Ok(stats)
    }

    fn save_stats(&self, stats: &PlayerStats) -> Result<(), StorageError> {
        let conn = self.lock()?;
        write_stats(&conn, stats)
    }
}

fn write_game(conn: &Connection, game: &Game) -> Result<(), StorageError> {
    let board_state = serde_json::to_string(&game.board)?;
    let player_tiles = serde_json::to_string(&game.player_rack)?;
    let ai_tiles = serde_json::to_string(&game.ai_rack)?;
    let tile_bag = serde_json::to_string(&game.bag)?;

    conn.execute(
        "INSERT INTO games (id, owner_id, status, player_score, ai_score, current_turn,
            board_state, player_tiles, ai_tiles, tile_bag, winner, created_at, updated_at, finished_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
         ON CONFLICT(id) DO UPDATE SET
            status = excluded.status,
            player_score = excluded.player_score,
            ai_score = excluded.ai_score,
            current_turn = excluded.current_turn,
            board_state = excluded.board_state,
            player_tiles = excluded.player_tiles,
            ai_tiles = excluded.ai_tiles,
            tile_bag = excluded.tile_bag,
            winner = excluded.winner,
            updated_at = excluded.updated_at,
            finished_at = excluded.finished_at",
        params![
            game.id,
            game.owner_id,
            game.status.as_str(),
            game.player_score,
            game.ai_score,
            game.current_turn.as_str(),
            board_state,
            player_tiles,
            ai_tiles,
            tile_bag,
            game.winner.map(|w| w.as_str()),
            game.created_at,
            game.updated_at,
            game.finished_at,
        ],
    )?;

    // history is append-only, so only the unseen tail is inserted
    {
        let mut stmt = conn.prepare(
            "INSERT OR IGNORE INTO game_moves
                (game_id, move_number, player, word, positions, score, action, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        for record in &game.moves {
            let positions = serde_json::to_string(&record.positions)?;
            stmt.execute(params![
                game.id,
                record.move_number,
                record.side.as_str(),
                record.word,
                positions,
                record.score,
                record.action.as_str(),
                record.created_at,
            ])?;
        }
    }

    Ok(())
}

fn write_stats(conn: &Connection, stats: &PlayerStats) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO user_stats (owner_id, games_played, games_won, games_lost, games_draw,
            total_score, highest_score, average_score, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(owner_id) DO UPDATE SET
            games_played = excluded.games_played,
            games_won = excluded.games_won,
            games_lost = excluded.games_lost,
            games_draw = excluded.games_draw,
            total_score = excluded.total_score,
            highest_score = excluded.highest_score,
            average_score = excluded.average_score,
            updated_at = excluded.updated_at",
        params![
            stats.owner_id,
            stats.games_played,
            stats.games_won,
            stats.games_lost,
            stats.games_draw,
            stats.total_score as i64,
            stats.highest_score,
            stats.average_score,
            stats.updated_at,
        ],
    )?;
    Ok(())
}

impl WordSource for SqliteGameStore {
    async fn exists(&self, word: &str) -> Result<bool, DictionaryError> {
        self.has_word(word)
            .map_err(|e| DictionaryError::Lookup(e.to_string()))
    }

    async fn bulk_list(&self) -> Result<Vec<String>, DictionaryError> {
        self.all_words()
            .map_err(|e| DictionaryError::Lookup(e.to_string()))
    }
}

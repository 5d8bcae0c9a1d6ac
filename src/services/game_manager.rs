// src/services/game_manager.rs - turn transitions for player-versus-AI games
//
// Every transition takes the current game by reference and returns the next
// one, so a rejected move never leaves a half-applied state behind.

use crate::ai::{find_move, AiMove};
use crate::config::AppConfig;
use crate::dictionary::{Dictionary, WordSource};
use crate::game::board::create_empty_board;
use crate::game::game_state::{Game, GameStatus, MoveAction, MoveRecord, Side, Winner};
use crate::game::is_game_over::is_game_over;
use crate::game::placement::{validate_placement, PlacementError};
use crate::game::position::Position;
use crate::game::rack::Rack;
use crate::game::tile_bag::create_tile_bag;
use crate::scoring::{score_placement, MoveScore};
use crate::storage::StorageError;
use rand::Rng;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{0}")]
    InvalidPlacement(#[from] PlacementError),

    #[error("you don't have the letter: {letter}")]
    IllegalTiles { letter: char },

    #[error("invalid word: {0}")]
    InvalidWord(String),

    #[error("not your turn")]
    WrongTurn,

    #[error("game is not active")]
    GameNotActive,

    #[error("game not found: {0}")]
    GameNotFound(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

// ============================================================================
// GAME LIFECYCLE
// ============================================================================

/// Fresh game: empty board, shuffled bag, seven tiles each, player first.
pub fn create_game<R: Rng + ?Sized>(id: &str, owner_id: &str, rng: &mut R) -> Game {
    let mut bag = create_tile_bag(rng);
    let player_rack = Rack::draw_from(&mut bag);
    let ai_rack = Rack::draw_from(&mut bag);
    let created_at = now();

    log::info!("🎲 New game {} for {} ({} tiles left in bag)", id, owner_id, bag.len());

    Game {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        board: create_empty_board(),
        player_rack,
        ai_rack,
        bag,
        player_score: 0,
        ai_score: 0,
        current_turn: Side::Player,
        status: GameStatus::Playing,
        winner: None,
        moves: Vec::new(),
        created_at,
        updated_at: created_at,
        finished_at: None,
    }
}

pub fn determine_winner(player_score: u32, ai_score: u32) -> Winner {
    if player_score > ai_score {
        Winner::Player
    } else if ai_score > player_score {
        Winner::Ai
    } else {
        Winner::Draw
    }
}

pub fn abandon_game(game: &Game) -> Result<Game, GameError> {
    if !game.is_active() {
        return Err(GameError::GameNotActive);
    }
    let mut next = game.clone();
    next.status = GameStatus::Abandoned;
    next.updated_at = now();
    log::info!("🏳️ Game {} abandoned", game.id);
    Ok(next)
}

fn ensure_turn(game: &Game, side: Side) -> Result<(), GameError> {
    if !game.is_active() {
        return Err(GameError::GameNotActive);
    }
    if game.current_turn != side {
        return Err(GameError::WrongTurn);
    }
    Ok(())
}

fn record_move(
    game: &mut Game,
    side: Side,
    action: MoveAction,
    word: Option<String>,
    positions: Vec<Position>,
    score: u32,
) {
    let created_at = now();
    let record = MoveRecord {
        move_number: game.next_move_number(),
        side,
        action,
        word,
        positions,
        score,
        created_at,
    };
    game.moves.push(record);
    game.updated_at = created_at;
}

/// Put letters on the board, refill the side's rack and bank the score.
fn commit_placement(
    game: &mut Game,
    side: Side,
    remaining: Rack,
    positions: &[Position],
    word: Option<String>,
    score: u32,
) {
    game.board.place_letters(positions);
    let mut rack = remaining;
    rack.refill(&mut game.bag);
    *game.rack_mut(side) = rack;
    *game.score_mut(side) += score;
    record_move(game, side, MoveAction::Place, word, positions.to_vec(), score);
}

// ============================================================================
// PLAYER TURNS
// ============================================================================

/// Check and commit a player placement. Checks run in a fixed order: turn,
/// rack letters, geometry, at least one word, every word in the dictionary.
pub async fn apply_player_place<S: WordSource>(
    game: &Game,
    positions: &[Position],
    dictionary: &Dictionary<S>,
) -> Result<(Game, MoveScore), GameError> {
    ensure_turn(game, Side::Player)?;

    let letters: Vec<char> = positions.iter().map(|p| p.letter).collect();
    let (remaining, _) = game
        .player_rack
        .remove_letters(&letters)
        .map_err(|letter| GameError::IllegalTiles { letter })?;

    validate_placement(&game.board, positions)?;

    let score = score_placement(&game.board, positions);
    if score.words.is_empty() {
        return Err(PlacementError::NoWordFormed.into());
    }
    for word in &score.words {
        if !dictionary.contains(&word.word).await {
            return Err(GameError::InvalidWord(word.word.clone()));
        }
    }

    let mut next = game.clone();
    let word = score.primary_word().map(str::to_string);
    commit_placement(&mut next, Side::Player, remaining, positions, word, score.total);
    next.current_turn = Side::Ai;

    log::info!(
        "🏆 Player scored {} in game {} ({} words, total {})",
        score.total,
        game.id,
        score.words.len(),
        next.player_score
    );
    Ok((next, score))
}

pub fn apply_player_pass(game: &Game) -> Result<Game, GameError> {
    ensure_turn(game, Side::Player)?;
    let mut next = game.clone();
    record_move(&mut next, Side::Player, MoveAction::Pass, None, Vec::new(), 0);
    next.current_turn = Side::Ai;
    Ok(next)
}

// ============================================================================
// AI TURN
// ============================================================================

/// Let the AI move, then check for the end of the game. When the game ends
/// the turn marker stays on the AI. Returns the move actually applied: a
/// swap with an empty bag is played as a pass.
pub async fn process_ai_turn<S, R>(
    game: &Game,
    dictionary: &Dictionary<S>,
    config: &AppConfig,
    rng: &mut R,
) -> Result<(Game, AiMove), GameError>
where
    S: WordSource,
    R: Rng + ?Sized,
{
    ensure_turn(game, Side::Ai)?;

    let chosen = find_move(
        config.ai.strategy,
        &game.board,
        &game.ai_rack,
        dictionary,
        &config.ai,
        rng,
    )
    .await;

    let mut next = game.clone();
    let applied = match chosen {
        AiMove::Place {
            positions,
            word,
            score,
        } => {
            let letters: Vec<char> = positions.iter().map(|p| p.letter).collect();
            let (remaining, _) = next
                .ai_rack
                .remove_letters(&letters)
                .map_err(|letter| GameError::IllegalTiles { letter })?;
            commit_placement(&mut next, Side::Ai, remaining, &positions, Some(word.clone()), score);
            log::info!("🤖 AI played '{}' for {} in game {}", word, score, game.id);
            AiMove::Place {
                positions,
                word,
                score,
            }
        }
        // a discarding swap needs a full replacement from the bag
        AiMove::Swap { ref indices }
            if next.bag.is_empty()
                || (!config.rules.return_swapped_tiles && next.bag.len() < indices.len()) =>
        {
            record_move(&mut next, Side::Ai, MoveAction::Pass, None, Vec::new(), 0);
            AiMove::Pass
        }
        AiMove::Swap { indices } => {
            let (mut rack, removed) = next.ai_rack.remove_indices(&indices);
            rack.add_tiles(next.bag.draw(removed.len()));
            let swapped = removed.len();
            if config.rules.return_swapped_tiles {
                next.bag.return_tiles(removed, rng);
                rack.refill(&mut next.bag);
            }
            next.ai_rack = rack;
            record_move(&mut next, Side::Ai, MoveAction::Swap, None, Vec::new(), 0);
            log::info!("🔄 AI swapped {} tiles in game {}", swapped, game.id);
            AiMove::Swap { indices }
        }
        AiMove::Pass => {
            record_move(&mut next, Side::Ai, MoveAction::Pass, None, Vec::new(), 0);
            AiMove::Pass
        }
    };

    if is_game_over(&next.bag, &next.player_rack, &next.ai_rack) {
        let winner = determine_winner(next.player_score, next.ai_score);
        next.status = GameStatus::Finished;
        next.winner = Some(winner);
        next.finished_at = Some(next.updated_at);
        log::info!(
            "🏁 Game {} finished: player {} / ai {} ({:?})",
            game.id,
            next.player_score,
            next.ai_score,
            winner
        );
    } else {
        next.current_turn = Side::Player;
    }

    Ok((next, applied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Strategy;
    use crate::game::tile::Tile;
    use crate::game::tile_bag::TileBag;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rack(letters: &str) -> Rack {
        Rack::new(letters.chars().map(Tile::new).collect())
    }

    fn game_with(player: &str, ai: &str, bag: &str) -> Game {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = create_game("g1", "alice", &mut rng);
        game.player_rack = rack(player);
        game.ai_rack = rack(ai);
        game.bag = TileBag::from_tiles(bag.chars().map(Tile::new).collect());
        game
    }

    fn simple_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.ai.strategy = Strategy::Simple;
        config
    }

    #[test]
    fn test_create_game() {
        let mut rng = StdRng::seed_from_u64(9);
        let game = create_game("g1", "alice", &mut rng);

        assert_eq!(game.player_rack.len(), 7);
        assert_eq!(game.ai_rack.len(), 7);
        assert_eq!(game.bag.len(), 130 - 14);
        assert_eq!(game.tile_count(), 130);
        assert!(game.board.is_empty());
        assert_eq!(game.current_turn, Side::Player);
        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.winner, None);
        assert!(game.moves.is_empty());
    }

    #[test]
    fn test_determine_winner() {
        assert_eq!(determine_winner(10, 5), Winner::Player);
        assert_eq!(determine_winner(5, 10), Winner::Ai);
        assert_eq!(determine_winner(7, 7), Winner::Draw);
    }

    #[tokio::test]
    async fn test_player_place_commits_and_refills() {
        let game = game_with("กานมรสว", "ขคจฉชซฌ", "ดตถท");
        let dictionary = Dictionary::from_words(["กา"]);
        let positions = [Position::new(7, 7, 'ก'), Position::new(7, 8, 'า')];

        let (next, score) = apply_player_place(&game, &positions, &dictionary)
            .await
            .expect("legal move");

        assert_eq!(score.total, 4);
        assert_eq!(next.player_score, 4);
        assert_eq!(next.board.letter_at(7, 7), Some('ก'));
        assert_eq!(next.player_rack.len(), 7);
        assert_eq!(next.player_rack.letters(), "นมรสวดต");
        assert_eq!(next.bag.len(), 2);
        assert_eq!(next.current_turn, Side::Ai);
        assert_eq!(next.tile_count(), game.tile_count());

        let record = next.moves.last().expect("recorded");
        assert_eq!(record.move_number, 1);
        assert_eq!(record.side, Side::Player);
        assert_eq!(record.action, MoveAction::Place);
        assert_eq!(record.word.as_deref(), Some("กา"));
        assert_eq!(record.score, 4);
    }

    #[tokio::test]
    async fn test_player_place_rejections_leave_game_untouched() {
        let game = game_with("กานมรสว", "ขคจฉชซฌ", "ดตถท");
        let dictionary = Dictionary::from_words(["กา"]);

        let missing = [Position::new(7, 7, 'ข'), Position::new(7, 8, 'า')];
        assert_matches!(
            apply_player_place(&game, &missing, &dictionary).await,
            Err(GameError::IllegalTiles { letter: 'ข' })
        );

        let twice = [Position::new(7, 7, 'ก'), Position::new(7, 8, 'ก')];
        assert_matches!(
            apply_player_place(&game, &twice, &dictionary).await,
            Err(GameError::IllegalTiles { letter: 'ก' })
        );

        let off_center = [Position::new(0, 0, 'ก'), Position::new(0, 1, 'า')];
        assert_matches!(
            apply_player_place(&game, &off_center, &dictionary).await,
            Err(GameError::InvalidPlacement(PlacementError::MissesCenter))
        );

        let lone = [Position::new(7, 7, 'ก')];
        assert_matches!(
            apply_player_place(&game, &lone, &dictionary).await,
            Err(GameError::InvalidPlacement(PlacementError::NoWordFormed))
        );

        let unknown = [Position::new(7, 7, 'น'), Position::new(7, 8, 'ม')];
        assert_matches!(
            apply_player_place(&game, &unknown, &dictionary).await,
            Err(GameError::InvalidWord(ref w)) if w == "นม"
        );

        assert!(game.board.is_empty());
        assert!(game.moves.is_empty());
    }

    #[tokio::test]
    async fn test_turn_guards() {
        let dictionary = Dictionary::from_words(["กา"]);
        let positions = [Position::new(7, 7, 'ก'), Position::new(7, 8, 'า')];

        let mut game = game_with("กานมรสว", "ขคจฉชซฌ", "ดตถท");
        game.current_turn = Side::Ai;
        assert_matches!(
            apply_player_place(&game, &positions, &dictionary).await,
            Err(GameError::WrongTurn)
        );
        assert_matches!(apply_player_pass(&game), Err(GameError::WrongTurn));

        game.current_turn = Side::Player;
        let mut rng = StdRng::seed_from_u64(2);
        assert_matches!(
            process_ai_turn(&game, &dictionary, &AppConfig::default(), &mut rng).await,
            Err(GameError::WrongTurn)
        );

        game.status = GameStatus::Finished;
        assert_matches!(apply_player_pass(&game), Err(GameError::GameNotActive));
        assert_matches!(abandon_game(&game), Err(GameError::GameNotActive));
    }

    #[test]
    fn test_player_pass() {
        let game = game_with("กานมรสว", "ขคจฉชซฌ", "ดตถท");
        let next = apply_player_pass(&game).expect("pass allowed");
        assert_eq!(next.current_turn, Side::Ai);
        assert_eq!(next.moves.len(), 1);
        assert_eq!(next.moves[0].action, MoveAction::Pass);
        assert_eq!(next.player_rack, game.player_rack);
    }

    #[tokio::test]
    async fn test_ai_place_then_turn_returns_to_player() {
        let mut game = game_with("ดตถทธนบ", "กาขคจฉช", "ปผฝพ");
        game.current_turn = Side::Ai;
        let dictionary = Dictionary::from_words(["กา"]);
        let mut rng = StdRng::seed_from_u64(3);

        let (next, applied) = process_ai_turn(&game, &dictionary, &AppConfig::default(), &mut rng)
            .await
            .expect("ai turn");

        assert_matches!(applied, AiMove::Place { ref word, score: 4, .. } if word == "กา");
        assert_eq!(next.ai_score, 4);
        assert_eq!(next.ai_rack.len(), 7);
        assert_eq!(next.bag.len(), 2);
        assert_eq!(next.current_turn, Side::Player);
        assert_eq!(next.status, GameStatus::Playing);
        assert_eq!(next.tile_count(), game.tile_count());
    }

    #[tokio::test]
    async fn test_ai_swap_returns_tiles_to_bag() {
        let mut game = game_with("ดตถทธนบ", "กาขคจฉช", "ปผฝพ");
        game.current_turn = Side::Ai;
        let dictionary = Dictionary::from_words(["ไม่มี"]);
        let mut rng = StdRng::seed_from_u64(4);

        let (next, applied) = process_ai_turn(&game, &dictionary, &simple_config(), &mut rng)
            .await
            .expect("ai turn");

        // ก า ค are the tiles worth 2 or less
        assert_eq!(applied, AiMove::Swap { indices: vec![0, 1, 3] });
        assert_eq!(next.ai_rack.len(), 7);
        assert_eq!(next.ai_rack.letters(), "ขจฉชปผฝ");
        assert_eq!(next.bag.len(), 4);
        assert_eq!(next.tile_count(), game.tile_count());
        assert_eq!(next.moves.last().map(|m| m.action), Some(MoveAction::Swap));
    }

    #[tokio::test]
    async fn test_ai_swap_can_discard_tiles() {
        let mut game = game_with("ดตถทธนบ", "กาขคจฉช", "ปผฝพ");
        game.current_turn = Side::Ai;
        let dictionary = Dictionary::from_words(["ไม่มี"]);
        let mut config = simple_config();
        config.rules.return_swapped_tiles = false;
        let mut rng = StdRng::seed_from_u64(4);

        let (next, _) = process_ai_turn(&game, &dictionary, &config, &mut rng)
            .await
            .expect("ai turn");

        assert_eq!(next.bag.len(), 1);
        assert_eq!(next.tile_count(), game.tile_count() - 3);
    }

    #[tokio::test]
    async fn test_ai_swap_from_short_bag_keeps_rack_full() {
        let mut game = game_with("ดตถทธนบ", "กงนมรลว", "ข");
        game.current_turn = Side::Ai;
        let dictionary = Dictionary::from_words(["ไม่มี"]);
        let mut rng = StdRng::seed_from_u64(6);

        let (next, applied) = process_ai_turn(&game, &dictionary, &simple_config(), &mut rng)
            .await
            .expect("ai turn");

        assert_eq!(applied, AiMove::Swap { indices: vec![0, 1, 2] });
        assert_eq!(next.ai_rack.len(), 7);
        assert_eq!(next.bag.len(), 1);
        assert_eq!(next.tile_count(), game.tile_count());
    }

    #[tokio::test]
    async fn test_discarding_swap_from_short_bag_is_a_pass() {
        let mut game = game_with("ดตถทธนบ", "กงนมรลว", "ข");
        game.current_turn = Side::Ai;
        let dictionary = Dictionary::from_words(["ไม่มี"]);
        let mut config = simple_config();
        config.rules.return_swapped_tiles = false;
        let mut rng = StdRng::seed_from_u64(6);

        let (next, applied) = process_ai_turn(&game, &dictionary, &config, &mut rng)
            .await
            .expect("ai turn");

        assert_eq!(applied, AiMove::Pass);
        assert_eq!(next.ai_rack, game.ai_rack);
        assert_eq!(next.bag.len(), 1);
    }

    #[tokio::test]
    async fn test_ai_swap_with_empty_bag_is_a_pass() {
        let mut game = game_with("ดตถทธนบ", "กาขคจฉช", "");
        game.current_turn = Side::Ai;
        let dictionary = Dictionary::from_words(["ไม่มี"]);
        let mut rng = StdRng::seed_from_u64(5);

        let (next, applied) = process_ai_turn(&game, &dictionary, &simple_config(), &mut rng)
            .await
            .expect("ai turn");

        assert_eq!(applied, AiMove::Pass);
        assert_eq!(next.ai_rack, game.ai_rack);
        assert_eq!(next.moves.last().map(|m| m.action), Some(MoveAction::Pass));
        assert_eq!(next.current_turn, Side::Player);
    }

    #[tokio::test]
    async fn test_game_ends_when_ai_plays_out() {
        let mut game = game_with("ดตถทธนบ", "กา", "");
        game.current_turn = Side::Ai;
        game.player_score = 3;
        let dictionary = Dictionary::from_words(["กา"]);
        let mut rng = StdRng::seed_from_u64(6);

        let (next, _) = process_ai_turn(&game, &dictionary, &AppConfig::default(), &mut rng)
            .await
            .expect("ai turn");

        assert!(next.ai_rack.is_empty());
        assert_eq!(next.status, GameStatus::Finished);
        assert_eq!(next.winner, Some(Winner::Ai));
        assert!(next.finished_at.is_some());
        // the turn marker is left where it was
        assert_eq!(next.current_turn, Side::Ai);
    }

    #[tokio::test]
    async fn test_game_ends_after_ai_pass_when_player_rack_empty() {
        let mut game = game_with("", "ฆขจ", "");
        game.current_turn = Side::Ai;
        game.player_score = 12;
        game.ai_score = 12;
        let dictionary = Dictionary::from_words(["ไม่มี"]);
        let mut rng = StdRng::seed_from_u64(7);

        let (next, applied) = process_ai_turn(&game, &dictionary, &AppConfig::default(), &mut rng)
            .await
            .expect("ai turn");

        assert_eq!(applied, AiMove::Pass);
        assert_eq!(next.status, GameStatus::Finished);
        assert_eq!(next.winner, Some(Winner::Draw));
    }

    #[test]
    fn test_abandon() {
        let game = game_with("กานมรสว", "ขคจฉชซฌ", "ดตถท");
        let next = abandon_game(&game).expect("abandoned");
        assert_eq!(next.status, GameStatus::Abandoned);
        assert_eq!(next.winner, None);
        assert_matches!(abandon_game(&next), Err(GameError::GameNotActive));
    }
}

//! Board, scoring and move-search properties checked through the public API.

use assert_matches::assert_matches;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thai_scrabble::ai::{find_anchor_points, find_move, AnchorPoint};
use thai_scrabble::game::board::{create_empty_board, BOARD_SIZE};
use thai_scrabble::game::board_layout::board_multiplier;
use thai_scrabble::game::distribution::{letter_score, total_tile_count};
use thai_scrabble::game::is_game_over::is_game_over;
use thai_scrabble::game::placement::{validate_placement, PlacementError};
use thai_scrabble::game::position::Direction;
use thai_scrabble::game::rack::Rack;
use thai_scrabble::game::tile::Tile;
use thai_scrabble::game::tile_bag::{create_tile_bag, draw_tiles, TileBag};
use thai_scrabble::scoring::{find_formed_words, score_placement};
use thai_scrabble::{AiConfig, AiMove, Dictionary, Position, Strategy};

fn rack(letters: &str) -> Rack {
    Rack::new(letters.chars().map(Tile::new).collect())
}

fn tiles(letters: &str) -> Vec<Tile> {
    letters.chars().map(Tile::new).collect()
}

// ============================================================================
// BOARD AND TILES
// ============================================================================

#[test]
fn test_premium_layout_is_symmetric() {
    let last = BOARD_SIZE - 1;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let m = board_multiplier(row, col);
            assert_eq!(m, board_multiplier(last - row, col), "row mirror at {},{}", row, col);
            assert_eq!(m, board_multiplier(row, last - col), "col mirror at {},{}", row, col);
            assert_eq!(m, board_multiplier(col, row), "diagonal at {},{}", row, col);
        }
    }
}

#[test]
fn test_fresh_bag_holds_every_tile() {
    let mut rng = StdRng::seed_from_u64(11);
    let bag = create_tile_bag(&mut rng);
    assert_eq!(bag.len(), 130);
    assert_eq!(total_tile_count(), 130);
}

#[test]
fn test_drawing_past_the_end_returns_what_is_left() {
    let bag = tiles("กขค");
    let (drawn, remaining) = draw_tiles(&bag, 7);
    assert_eq!(drawn.len(), 3);
    assert!(remaining.is_empty());
}

#[test]
fn test_game_over_needs_empty_bag_and_an_empty_rack() {
    let empty_bag = TileBag::default();
    assert!(is_game_over(&empty_bag, &Rack::default(), &rack("กขคงจฉช")));
    assert!(!is_game_over(&empty_bag, &rack("ก"), &rack("ข")));
    assert!(!is_game_over(&TileBag::from_tiles(tiles("ก")), &Rack::default(), &rack("ข")));
}

// ============================================================================
// PLACEMENT AND SCORING
// ============================================================================

#[test]
fn test_first_move_must_cover_center() {
    let board = create_empty_board();
    let through_center = [Position::new(7, 6, 'ก'), Position::new(7, 7, 'า')];
    let off_center = [Position::new(3, 6, 'ก'), Position::new(3, 7, 'า')];

    assert_eq!(validate_placement(&board, &through_center), Ok(()));
    assert_eq!(
        validate_placement(&board, &off_center),
        Err(PlacementError::MissesCenter)
    );
    // same answer on a second call
    assert_eq!(
        validate_placement(&board, &off_center),
        Err(PlacementError::MissesCenter)
    );
}

#[test]
fn test_opening_word_has_no_cross_words() {
    let board = create_empty_board();
    let placed = vec![Position::new(7, 6, 'ก'), Position::new(7, 7, 'า')];

    let words = find_formed_words(&board, &placed);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "กา");
    assert_eq!(words[0].positions, placed);
}

#[test]
fn test_move_score_never_below_face_value() {
    let mut board = create_empty_board();
    board.place_letters(&[Position::new(7, 6, 'ก'), Position::new(7, 7, 'า')]);

    let placements = [
        vec![Position::new(6, 7, 'ร'), Position::new(8, 7, 'ง')],
        vec![Position::new(7, 8, 'ย'), Position::new(7, 9, 'ศ')],
        vec![Position::new(8, 6, 'ข'), Position::new(9, 6, 'อ')],
    ];
    for positions in placements {
        assert_eq!(validate_placement(&board, &positions), Ok(()));
        let face: u32 = positions.iter().map(|p| letter_score(p.letter)).sum();
        let score = score_placement(&board, &positions);
        assert!(score.total >= face, "{:?} scored {} < {}", positions, score.total, face);
    }
}

#[test]
fn test_single_tile_reports_only_its_cross_word() {
    let mut board = create_empty_board();
    board.place_letters(&[
        Position::new(7, 6, 'ก'),
        Position::new(7, 7, 'า'),
        Position::new(9, 7, 'ง'),
    ]);

    let words = find_formed_words(&board, &[Position::new(8, 7, 'ร')]);
    let texts: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(texts, vec!["ารง"]);
}

// ============================================================================
// MOVE SEARCH
// ============================================================================

#[test]
fn test_empty_board_anchors_at_center() {
    let anchors = find_anchor_points(&create_empty_board());
    assert_eq!(
        anchors,
        vec![
            AnchorPoint::new(7, 7, Direction::Horizontal),
            AnchorPoint::new(7, 7, Direction::Vertical),
        ]
    );
}

#[tokio::test]
async fn test_exhaustive_search_takes_highest_score() {
    let dictionary = Dictionary::from_words(["กา", "ขา", "ขาว"]);
    let config = AiConfig::default();
    let mut rng = StdRng::seed_from_u64(1);

    let chosen = find_move(
        Strategy::Exhaustive,
        &create_empty_board(),
        &rack("กขาวนมร"),
        &dictionary,
        &config,
        &mut rng,
    )
    .await;

    assert_matches!(chosen, AiMove::Place { ref word, .. } if word == "ขาว");
}

#[tokio::test]
async fn test_simple_search_plays_a_sampled_word() {
    let dictionary = Dictionary::from_words(["กา", "ฆฆฆ", "นม"]);
    let config = AiConfig {
        strategy: Strategy::Simple,
        ..AiConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(3);

    let chosen = find_move(
        Strategy::Simple,
        &create_empty_board(),
        &rack("กานมรลว"),
        &dictionary,
        &config,
        &mut rng,
    )
    .await;

    let AiMove::Place { word, positions, .. } = chosen else {
        panic!("expected the AI to place a word");
    };
    assert!(word == "กา" || word == "นม");
    assert_eq!(positions[0].coords(), (7, 7));
}

#[tokio::test]
async fn test_no_playable_word_falls_back() {
    let dictionary = Dictionary::from_words(["ฆฆฆ"]);
    let config = AiConfig::default();
    let mut rng = StdRng::seed_from_u64(4);

    let swap = find_move(
        Strategy::Exhaustive,
        &create_empty_board(),
        &rack("ฆกขาคจน"),
        &dictionary,
        &config,
        &mut rng,
    )
    .await;
    assert_matches!(swap, AiMove::Swap { ref indices } if indices == &vec![1, 3, 4]);

    let pass = find_move(
        Strategy::Simple,
        &create_empty_board(),
        &rack("ฆขจ"),
        &dictionary,
        &config,
        &mut rng,
    )
    .await;
    assert_eq!(pass, AiMove::Pass);
}

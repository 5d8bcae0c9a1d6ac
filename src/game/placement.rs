//! Geometry and adjacency rules for a proposed placement.
//!
//! Rules are checked in a fixed order and the first violation is reported:
//! non-empty, in bounds, onto empty cells, one line, no empty gaps, and
//! finally the center rule (first move) or the connection rule.

use crate::game::board::{in_bounds, neighbours, Board, CENTER};
use crate::game::position::{Direction, Position};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("at least one letter must be placed")]
    Empty,

    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("position ({row}, {col}) already holds a letter")]
    Occupied { row: usize, col: usize },

    #[error("letters must be placed in a single row or column")]
    NotInLine,

    #[error("there must be no empty cells between placed letters")]
    Gap,

    #[error("the first word must pass through the center square")]
    MissesCenter,

    #[error("the word must connect to letters already on the board")]
    NotConnected,

    #[error("the placement does not form a word of two or more letters")]
    NoWordFormed,
}

pub fn validate_placement(board: &Board, positions: &[Position]) -> Result<(), PlacementError> {
    if positions.is_empty() {
        return Err(PlacementError::Empty);
    }

    let mut seen = HashSet::with_capacity(positions.len());
    for pos in positions {
        if !in_bounds(pos.row, pos.col) {
            return Err(PlacementError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        // a cell claimed twice in one move counts as occupied
        if board.is_occupied(pos.row, pos.col) || !seen.insert(pos.coords()) {
            return Err(PlacementError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
    }

    let first = positions[0];
    let same_row = positions.iter().all(|p| p.row == first.row);
    let same_col = positions.iter().all(|p| p.col == first.col);
    if !same_row && !same_col {
        return Err(PlacementError::NotInLine);
    }

    let direction = Direction::of_placement(positions);
    check_no_gaps(board, positions, direction)?;

    if board.is_empty() {
        if !positions.iter().any(|p| p.coords() == CENTER) {
            return Err(PlacementError::MissesCenter);
        }
    } else {
        let touches_existing = positions.iter().any(|p| {
            neighbours(p.row, p.col).any(|(r, c)| board.is_occupied(r, c))
        });
        if !touches_existing {
            return Err(PlacementError::NotConnected);
        }
    }

    Ok(())
}

fn check_no_gaps(
    board: &Board,
    positions: &[Position],
    direction: Direction,
) -> Result<(), PlacementError> {
    let mut sorted = positions.to_vec();
    sorted.sort_by_key(|p| direction.along(p.row, p.col));

    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let start = direction.along(current.row, current.col);
        let end = direction.along(next.row, next.col);

        for offset in 1..end.saturating_sub(start) {
            let (r, c) = direction.step(current.row, current.col, offset);
            if !board.is_occupied(r, c) {
                return Err(PlacementError::Gap);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::create_empty_board;
    use assert_matches::assert_matches;

    fn board_with(positions: &[Position]) -> Board {
        let mut board = create_empty_board();
        board.place_letters(positions);
        board
    }

    #[test]
    fn test_empty_placement() {
        let board = create_empty_board();
        assert_eq!(validate_placement(&board, &[]), Err(PlacementError::Empty));
    }

    #[test]
    fn test_first_move_through_center() {
        let board = create_empty_board();
        let positions = [Position::new(7, 6, 'ก'), Position::new(7, 7, 'า')];
        assert_eq!(validate_placement(&board, &positions), Ok(()));
    }

    #[test]
    fn test_first_move_off_center() {
        let board = create_empty_board();
        let positions = [Position::new(3, 6, 'ก'), Position::new(3, 7, 'า')];
        assert_eq!(
            validate_placement(&board, &positions),
            Err(PlacementError::MissesCenter)
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let board = create_empty_board();
        let positions = [Position::new(7, 14, 'ก'), Position::new(7, 15, 'า')];
        assert_matches!(
            validate_placement(&board, &positions),
            Err(PlacementError::OutOfBounds { row: 7, col: 15 })
        );
    }

    #[test]
    fn test_occupied_cell() {
        let board = board_with(&[Position::new(7, 7, 'ก')]);
        let positions = [Position::new(7, 7, 'า')];
        assert_matches!(
            validate_placement(&board, &positions),
            Err(PlacementError::Occupied { row: 7, col: 7 })
        );
    }

    #[test]
    fn test_same_cell_twice() {
        let board = create_empty_board();
        let positions = [Position::new(7, 7, 'ก'), Position::new(7, 7, 'า')];
        assert_matches!(
            validate_placement(&board, &positions),
            Err(PlacementError::Occupied { row: 7, col: 7 })
        );
    }

    #[test]
    fn test_not_in_line() {
        let board = create_empty_board();
        let positions = [Position::new(7, 7, 'ก'), Position::new(8, 8, 'า')];
        assert_eq!(
            validate_placement(&board, &positions),
            Err(PlacementError::NotInLine)
        );
    }

    #[test]
    fn test_gap_over_empty_cell() {
        let board = create_empty_board();
        let positions = [Position::new(7, 5, 'ก'), Position::new(7, 7, 'า')];
        assert_eq!(validate_placement(&board, &positions), Err(PlacementError::Gap));
    }

    #[test]
    fn test_gap_over_existing_letter_is_allowed() {
        let board = board_with(&[Position::new(7, 7, 'ก')]);
        // unsorted on purpose
        let positions = [Position::new(7, 8, 'ร'), Position::new(7, 6, 'า')];
        assert_eq!(validate_placement(&board, &positions), Ok(()));

        let vertical = [Position::new(6, 7, 'ส'), Position::new(8, 7, 'า')];
        assert_eq!(validate_placement(&board, &vertical), Ok(()));
    }

    #[test]
    fn test_must_connect_after_first_move() {
        let board = board_with(&[Position::new(7, 7, 'ก'), Position::new(7, 8, 'า')]);
        let far = [Position::new(2, 2, 'น'), Position::new(2, 3, 'า')];
        assert_eq!(
            validate_placement(&board, &far),
            Err(PlacementError::NotConnected)
        );

        let diagonal_only = [Position::new(6, 6, 'น')];
        assert_eq!(
            validate_placement(&board, &diagonal_only),
            Err(PlacementError::NotConnected)
        );

        let adjacent = [Position::new(8, 8, 'น')];
        assert_eq!(validate_placement(&board, &adjacent), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        let board = board_with(&[Position::new(7, 7, 'ก')]);
        // occupied comes before the line check
        let positions = [Position::new(7, 7, 'า'), Position::new(9, 9, 'ร')];
        assert_matches!(
            validate_placement(&board, &positions),
            Err(PlacementError::Occupied { .. })
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let board = board_with(&[Position::new(7, 7, 'ก')]);
        let positions = [Position::new(7, 8, 'า'), Position::new(7, 9, 'ร')];
        let first = validate_placement(&board, &positions);
        let second = validate_placement(&board, &positions);
        assert_eq!(first, second);
        assert_eq!(board.occupied_count(), 1);
    }
}

use crate::game::board::{in_bounds, Board, BOARD_SIZE, CENTER};
use crate::game::position::{Direction, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Empty cell next to a committed letter, where a new word may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl AnchorPoint {
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        AnchorPoint {
            row,
            col,
            direction,
        }
    }
}

/// Anchors in board scan order. Each occupied cell contributes its empty
/// right, left, lower and upper neighbours in that order; right/left read
/// horizontally, lower/upper vertically. Repeats keep their first slot.
/// An empty board has only the center, in both directions.
pub fn find_anchor_points(board: &Board) -> Vec<AnchorPoint> {
    if board.is_empty() {
        return vec![
            AnchorPoint::new(CENTER.0, CENTER.1, Direction::Horizontal),
            AnchorPoint::new(CENTER.0, CENTER.1, Direction::Vertical),
        ];
    }

    let mut seen = HashSet::new();
    let mut anchors = Vec::new();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !board.is_occupied(row, col) {
                continue;
            }

            let around = [
                Some((row, col + 1, Direction::Horizontal)),
                col.checked_sub(1).map(|c| (row, c, Direction::Horizontal)),
                Some((row + 1, col, Direction::Vertical)),
                row.checked_sub(1).map(|r| (r, col, Direction::Vertical)),
            ];

            for (r, c, direction) in around.into_iter().flatten() {
                if in_bounds(r, c) && !board.is_occupied(r, c) {
                    let anchor = AnchorPoint::new(r, c, direction);
                    if seen.insert(anchor) {
                        anchors.push(anchor);
                    }
                }
            }
        }
    }

    anchors
}

/// Lay `letters` forward from the anchor, stepping over committed letters.
/// `None` when the word would run off the board.
pub fn try_place_word(board: &Board, letters: &[char], anchor: &AnchorPoint) -> Option<Vec<Position>> {
    let mut positions = Vec::with_capacity(letters.len());
    let (mut row, mut col) = (anchor.row, anchor.col);

    for &letter in letters {
        while in_bounds(row, col) && board.is_occupied(row, col) {
            (row, col) = anchor.direction.step(row, col, 1);
        }
        if !in_bounds(row, col) {
            return None;
        }
        positions.push(Position::new(row, col, letter));
        (row, col) = anchor.direction.step(row, col, 1);
    }

    if positions.is_empty() {
        None
    } else {
        Some(positions)
    }
}

use crate::game::distribution::LETTER_DISTRIBUTION;
use crate::game::tile::Tile;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Undrawn tiles of one game. Tiles are drawn from the front.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TileBag {
    pub(crate) tiles: Vec<Tile>,
}

impl TileBag {
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        TileBag { tiles }
    }

    /// Get a reference to the tiles in the bag
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Take up to `count` tiles off the front. Asking for more than the bag
    /// holds returns whatever is left.
    pub fn draw(&mut self, count: usize) -> Vec<Tile> {
        let (drawn, remaining) = draw_tiles(&self.tiles, count);
        self.tiles = remaining;
        drawn
    }

    /// Put tiles back and reshuffle the whole bag.
    pub fn return_tiles<R: Rng + ?Sized>(&mut self, tiles: Vec<Tile>, rng: &mut R) {
        self.tiles.extend(tiles);
        self.tiles.shuffle(rng);
    }
}

/// One tile per count unit of the distribution table, Fisher-Yates shuffled.
pub fn create_tile_bag<R: Rng + ?Sized>(rng: &mut R) -> TileBag {
    let mut tiles: Vec<Tile> = LETTER_DISTRIBUTION
        .iter()
        .flat_map(|&(letter, count, score)| {
            (0..count).map(move |_| Tile { letter, score })
        })
        .collect();

    tiles.shuffle(rng);
    TileBag { tiles }
}

/// Split `bag` into its first `count` tiles and the rest.
pub fn draw_tiles(bag: &[Tile], count: usize) -> (Vec<Tile>, Vec<Tile>) {
    let split = count.min(bag.len());
    (bag[..split].to_vec(), bag[split..].to_vec())
}

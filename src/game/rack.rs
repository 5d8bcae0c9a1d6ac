use crate::game::tile::Tile;
use crate::game::tile_bag::TileBag;
use serde::{Deserialize, Serialize};

/// Tiles a side holds after every refill (fewer once the bag runs dry).
pub const RACK_SIZE: usize = 7;

/// A side's hand of tiles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Rack { tiles }
    }

    /// Draw a full rack from the bag.
    pub fn draw_from(bag: &mut TileBag) -> Self {
        Rack {
            tiles: bag.draw(RACK_SIZE),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn letters(&self) -> String {
        self.tiles.iter().map(|t| t.letter).collect()
    }

    /// Remove one tile per requested letter, first match each time.
    ///
    /// Returns the rack without those tiles plus the removed tiles, or the
    /// first letter that is asked for more times than it is held.
    pub fn remove_letters(&self, letters: &[char]) -> Result<(Rack, Vec<Tile>), char> {
        let mut available = self.tiles.clone();
        let mut removed = Vec::with_capacity(letters.len());

        for &letter in letters {
            match available.iter().position(|t| t.letter == letter) {
                Some(index) => removed.push(available.remove(index)),
                None => return Err(letter),
            }
        }

        Ok((Rack { tiles: available }, removed))
    }

    /// Remove the tiles at `indices`. Out-of-range and repeated indices are
    /// ignored.
    pub fn remove_indices(&self, indices: &[usize]) -> (Rack, Vec<Tile>) {
        let mut kept = Vec::with_capacity(self.tiles.len());
        let mut removed = Vec::new();

        for (i, tile) in self.tiles.iter().enumerate() {
            if indices.contains(&i) {
                removed.push(*tile);
            } else {
                kept.push(*tile);
            }
        }

        (Rack { tiles: kept }, removed)
    }

    /// Top the rack back up to [`RACK_SIZE`] from the bag.
    pub fn refill(&mut self, bag: &mut TileBag) -> usize {
        let missing = RACK_SIZE.saturating_sub(self.tiles.len());
        let drawn = bag.draw(missing);
        let count = drawn.len();
        self.tiles.extend(drawn);
        count
    }

    pub fn add_tiles(&mut self, tiles: Vec<Tile>) {
        self.tiles.extend(tiles);
    }

    /// Whether the rack holds every letter of `word` with multiplicity.
    pub fn can_spell(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        letters.iter().all(|letter| {
            let held = self.tiles.iter().filter(|t| t.letter == *letter).count();
            let needed = letters.iter().filter(|l| *l == letter).count();
            held >= needed
        })
    }
}

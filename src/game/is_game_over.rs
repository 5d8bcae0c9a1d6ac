use crate::game::rack::Rack;
use crate::game::tile_bag::TileBag;

/// The game ends once the bag is empty and either side has played out.
pub fn is_game_over(bag: &TileBag, player_rack: &Rack, ai_rack: &Rack) -> bool {
    bag.is_empty() && (player_rack.is_empty() || ai_rack.is_empty())
}

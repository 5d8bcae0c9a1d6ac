pub mod board;
pub mod board_layout;
pub mod distribution;
pub mod game_state;
pub mod is_game_over;
pub mod placement;
pub mod position;
pub mod rack;
pub mod tile;
pub mod tile_bag;

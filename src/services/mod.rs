pub mod game_locks;
pub mod game_manager;
pub mod game_service;

pub use game_locks::GameLocks;
pub use game_manager::GameError;
pub use game_service::GameService;

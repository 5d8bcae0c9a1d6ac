pub mod scoring;
pub mod words;

pub use scoring::{score_placement, score_word, MoveScore, BINGO_BONUS};
pub use words::{find_formed_words, PlacedWord, ScratchBoard};

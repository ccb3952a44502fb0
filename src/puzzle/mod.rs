pub mod catalog;
pub mod config;

pub use config::Answer;
pub use config::PuzzleConfig;

pub mod board;
pub mod health;
pub mod scores;

pub mod health;
pub mod leaderboard;
pub mod openapi;
pub mod player;
pub mod score;
pub mod stats;

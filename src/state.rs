use crate::game::store::GameStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One lock guards players, leaderboard and stats together
pub type AppState = Arc<RwLock<GameStore>>;

/// Seeded store for a fresh server instance
pub fn new_state(leaderboard_capacity: Option<usize>) -> AppState {
    Arc::new(RwLock::new(
        GameStore::seeded().with_leaderboard_capacity(leaderboard_capacity),
    ))
}

pub mod leaderboard;
pub mod player;
pub mod score;
pub mod stats;
pub mod store;

/// Player and score names are cut down to this many characters
pub const MAX_NAME_CHARS: usize = 20;

/// Truncate a name to [`MAX_NAME_CHARS`] characters (not bytes)
pub fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_CHARS).collect()
}

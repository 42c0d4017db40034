use super::leaderboard::{Leaderboard, ScoreEntry};
use super::player::{Player, PlayerRegistry};
use super::score::Score;
use super::stats::GameStats;
use super::truncate_name;

/// A validated score submission, before name truncation
#[derive(Debug, Clone, PartialEq)]
pub struct NewScore {
    pub player_name: String,
    pub score: Score,
    pub game: String,
}

/// In-memory store for players, leaderboard and stats.
///
/// Not synchronized on its own; the server wraps it in a single lock so each
/// operation is one indivisible read or read-modify-write.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    players: PlayerRegistry,
    leaderboard: Leaderboard,
    stats: GameStats,
    leaderboard_capacity: Option<usize>,
}

impl GameStore {
    /// Store preloaded with the launch leaderboard and stats
    pub fn seeded() -> Self {
        let leaderboard = Leaderboard::from_entries(vec![
            ScoreEntry::new("Player1", 15420, "snake"),
            ScoreEntry::new("GameMaster", 12880, "shooter"),
            ScoreEntry::new("ProGamer", 11340, "snake"),
            ScoreEntry::new("SnakeKing", 9750, "snake"),
            ScoreEntry::new("Sharpshooter", 8290, "shooter"),
        ]);

        Self {
            players: PlayerRegistry::default(),
            leaderboard,
            stats: GameStats {
                total_players: 1250,
                games_played: 5430,
                top_score: Score::from(15420),
            },
            leaderboard_capacity: None,
        }
    }

    /// Cap the leaderboard at `capacity` entries, evicting the lowest scores.
    /// `None` keeps every submission.
    pub fn with_leaderboard_capacity(mut self, capacity: Option<usize>) -> Self {
        self.leaderboard_capacity = capacity;
        if let Some(capacity) = capacity {
            self.leaderboard.retain_top(capacity);
        }
        self
    }

    pub fn top_scores(&self, limit: usize) -> Vec<ScoreEntry> {
        self.leaderboard.top(limit)
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn players(&self) -> &[Player] {
        self.players.all()
    }

    /// Append a score and update the aggregates.
    ///
    /// Stats are folded in before any retention eviction, so `total_players`
    /// sees the length including the new entry.
    pub fn submit_score(&mut self, new_score: NewScore) -> ScoreEntry {
        let entry = ScoreEntry {
            name: truncate_name(&new_score.player_name),
            score: new_score.score,
            game: new_score.game,
        };
        self.leaderboard.push(entry.clone());
        self.stats.record_submission(entry.score, self.leaderboard.len());

        if let Some(capacity) = self.leaderboard_capacity {
            for evicted in self.leaderboard.retain_top(capacity) {
                tracing::debug!(
                    name = %evicted.name,
                    score = %evicted.score,
                    game = %evicted.game,
                    "Evicted score from leaderboard"
                );
            }
        }

        entry
    }

    pub fn add_player(&mut self, name: &str, now_millis: u64) -> Player {
        self.players.register(truncate_name(name), now_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::leaderboard::TOP_SCORES_LIMIT;

    fn new_score(name: &str, score: i32, game: &str) -> NewScore {
        NewScore {
            player_name: name.to_string(),
            score: Score::from(score),
            game: game.to_string(),
        }
    }

    #[test]
    fn test_seed_contents() {
        let store = GameStore::seeded();
        assert_eq!(store.leaderboard().len(), 5);
        assert_eq!(store.top_scores(1)[0].name, "Player1");
        assert_eq!(store.stats().top_score, Score::from(15420));
        assert_eq!(store.stats().games_played, 5430);
        assert_eq!(store.stats().total_players, 1250);
        assert!(store.players().is_empty());
    }

    #[test]
    fn test_submission_grows_leaderboard_and_game_count() {
        let mut store = GameStore::seeded();
        let before_len = store.leaderboard().len();
        let before_games = store.stats().games_played;

        store.submit_score(new_score("Rookie", 10, "snake"));

        assert_eq!(store.leaderboard().len(), before_len + 1);
        assert_eq!(store.stats().games_played, before_games + 1);
    }

    #[test]
    fn test_new_high_score_tops_everything() {
        let mut store = GameStore::seeded();
        let entry = store.submit_score(new_score("NewAce", 20000, "snake"));

        assert_eq!(entry.score, Score::from(20000));
        assert_eq!(store.top_scores(TOP_SCORES_LIMIT)[0], entry);
        assert_eq!(store.stats().top_score, Score::from(20000));
    }

    #[test]
    fn test_low_score_keeps_top_score() {
        let mut store = GameStore::seeded();
        store.submit_score(new_score("Rookie", 5, "shooter"));
        assert_eq!(store.stats().top_score, Score::from(15420));
    }

    #[test]
    fn test_submitted_name_truncated() {
        let mut store = GameStore::seeded();
        let entry = store.submit_score(new_score("AVeryLongPlayerNameIndeed", 1, "snake"));

        assert_eq!(entry.name, "AVeryLongPlayerNameI");
        let stored = store.leaderboard().entries().last().unwrap();
        assert_eq!(stored.name, "AVeryLongPlayerNameI");
    }

    #[test]
    fn test_total_players_from_leaderboard_length() {
        let mut store = GameStore::default();
        store.submit_score(new_score("a", 1, "snake"));
        store.submit_score(new_score("b", 2, "snake"));
        assert_eq!(store.stats().total_players, 2);
    }

    #[test]
    fn test_add_player_truncates_and_assigns_id() {
        let mut store = GameStore::seeded();
        let player = store.add_player("AnotherVeryLongNameForAPlayer", 1_700_000_000_000);

        assert_eq!(player.id, 1_700_000_000_000);
        assert_eq!(player.name.chars().count(), 20);
        assert_eq!(store.players(), &[player]);
    }

    #[test]
    fn test_players_do_not_touch_scores() {
        let mut store = GameStore::seeded();
        store.add_player("Alice", 1);
        assert_eq!(store.leaderboard().len(), 5);
        assert_eq!(store.stats().games_played, 5430);
    }

    #[test]
    fn test_capacity_trims_seed() {
        let store = GameStore::seeded().with_leaderboard_capacity(Some(3));
        let names: Vec<_> = store
            .leaderboard()
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Player1", "GameMaster", "ProGamer"]);
    }

    #[test]
    fn test_capacity_applies_after_stats() {
        let mut store = GameStore::default().with_leaderboard_capacity(Some(2));
        store.submit_score(new_score("a", 10, "snake"));
        store.submit_score(new_score("b", 20, "snake"));
        let entry = store.submit_score(new_score("c", 30, "snake"));

        assert_eq!(entry.name, "c");
        assert_eq!(store.leaderboard().len(), 2);
        assert_eq!(store.stats().total_players, 3);
        assert_eq!(store.stats().games_played, 3);
        let names: Vec<_> = store
            .top_scores(TOP_SCORES_LIMIT)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["c", "b"]);
    }
}

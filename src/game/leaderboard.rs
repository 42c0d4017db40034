use super::score::Score;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of entries returned by a leaderboard query
pub const TOP_SCORES_LIMIT: usize = 10;

/// One submitted game score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreEntry {
    /// Player name, at most 20 characters
    pub name: String,
    /// Submitted score
    #[schema(value_type = f64)]
    pub score: Score,
    /// Free-form game label, e.g. "snake" or "shooter"
    pub game: String,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: impl Into<Score>, game: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: score.into(),
            game: game.into(),
        }
    }
}

/// Append-only sequence of score entries, kept in submission order.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn from_entries(entries: Vec<ScoreEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in submission order
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// The `limit` highest scores, best first.
    ///
    /// Sorts a copy, so the stored submission order never changes. The sort is
    /// stable: equal scores come back in the order they were submitted.
    pub fn top(&self, limit: usize) -> Vec<ScoreEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
        sorted.truncate(limit);
        sorted
    }

    /// Drop lowest-scoring entries until at most `capacity` remain.
    /// Among equal lowest scores the most recent submission goes first.
    pub fn retain_top(&mut self, capacity: usize) -> Vec<ScoreEntry> {
        let mut evicted = Vec::new();
        while self.entries.len() > capacity {
            let lowest = self
                .entries
                .iter()
                .enumerate()
                .min_by(|(ia, a), (ib, b)| a.score.total_cmp(&b.score).then(ib.cmp(ia)))
                .map(|(index, _)| index);

            match lowest {
                Some(index) => evicted.push(self.entries.remove(index)),
                None => break,
            }
        }
        evicted
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered player. Independent of score submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    /// Creation time in epoch milliseconds, strictly increasing per registry
    pub id: u64,
    /// Display name, at most 20 characters
    pub name: String,
}

/// Players in registration order
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    last_id: u64,
}

impl PlayerRegistry {
    /// Register a player created at `now_millis`.
    ///
    /// Ids follow the wall clock but never repeat or go backwards: two players
    /// registered within the same millisecond get consecutive ids.
    pub fn register(&mut self, name: String, now_millis: u64) -> Player {
        let id = now_millis.max(self.last_id + 1);
        self.last_id = id;

        let player = Player { id, name };
        self.players.push(player.clone());
        player
    }

    pub fn all(&self) -> &[Player] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_follows_clock() {
        let mut registry = PlayerRegistry::default();
        let player = registry.register("Alice".to_string(), 1_700_000_000_000);
        assert_eq!(player.id, 1_700_000_000_000);
        assert_eq!(player.name, "Alice");
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let mut registry = PlayerRegistry::default();
        let first = registry.register("a".to_string(), 5_000);
        let second = registry.register("b".to_string(), 5_000);
        let third = registry.register("c".to_string(), 4_000);

        assert_eq!(first.id, 5_000);
        assert_eq!(second.id, 5_001);
        assert_eq!(third.id, 5_002);
    }

    #[test]
    fn test_ids_positive_even_at_epoch() {
        let mut registry = PlayerRegistry::default();
        assert_eq!(registry.register("zero".to_string(), 0).id, 1);
    }

    #[test]
    fn test_registration_order_kept() {
        let mut registry = PlayerRegistry::default();
        registry.register("x".to_string(), 10);
        registry.register("y".to_string(), 20);

        let names: Vec<_> = registry.all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }
}

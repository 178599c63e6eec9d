//! Repository port traits for game storage.

use async_trait::async_trait;
use minefield_domain::{Game, GameId};

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

/// Storage for games, keyed by `Game::id`.
///
/// Implementations own their stored copies and hand out clones.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepo: Send + Sync {
    /// Fetch the stored game, or `RepoError::NotFound`.
    async fn get(&self, id: &GameId) -> Result<Game, RepoError>;

    /// Insert or overwrite the entry for `game.id()`. Saving the same id twice
    /// replaces the previous value.
    async fn save(&self, game: &Game) -> Result<(), RepoError>;
}

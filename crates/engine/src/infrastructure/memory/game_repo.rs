//! In-memory game repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use minefield_domain::{Game, GameId};

use crate::infrastructure::ports::{GameRepo, RepoError};

/// Game storage backed by a single lock-guarded map.
///
/// One `RwLock` guards the whole map: reads share the lock, saves take it
/// exclusively. Stored games are never handed out by reference.
#[derive(Default)]
pub struct InMemoryGameRepo {
    games: RwLock<HashMap<GameId, Game>>,
}

impl InMemoryGameRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

#[async_trait]
impl GameRepo for InMemoryGameRepo {
    async fn get(&self, id: &GameId) -> Result<Game, RepoError> {
        self.games
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RepoError::not_found("Game", id))
    }

    async fn save(&self, game: &Game) -> Result<(), RepoError> {
        let previous = self
            .games
            .write()
            .await
            .insert(game.id().clone(), game.clone());
        tracing::trace!(
            game_id = %game.id(),
            replaced = previous.is_some(),
            "Stored game in memory"
        );
        Ok(())
    }
}

//! Game creation and lookup.
//!
//! The service is the only place the board invariant is checked. Storage
//! trusts whatever it is handed.

use std::sync::Arc;

use minefield_domain::value_objects::Board;
use minefield_domain::{DomainError, Game, GameId};

use crate::infrastructure::ports::{GameRepo, IdGeneratorPort, RepoError};

pub const CREATE_FAILED: &str = "create game into repository has failed";
pub const GET_FAILED: &str = "get game from repository has failed";

/// Errors surfaced by the game service.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Caller input violates a game invariant. Nothing was stored.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Game not found: {id}")]
    NotFound { id: GameId },

    /// Input was fine but storage could not complete the operation.
    #[error("{context}")]
    Persistence {
        context: &'static str,
        #[source]
        source: RepoError,
    },
}

impl From<DomainError> for GameError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.message().to_string())
    }
}

pub struct GameService {
    games: Arc<dyn GameRepo>,
    ids: Arc<dyn IdGeneratorPort>,
}

impl GameService {
    pub fn new(games: Arc<dyn GameRepo>, ids: Arc<dyn IdGeneratorPort>) -> Self {
        Self { games, ids }
    }

    /// Validate the board, assign a fresh id and persist the game.
    ///
    /// An invalid board fails before an id is drawn or storage is touched.
    pub async fn create(
        &self,
        name: impl Into<String>,
        size: u32,
        bomb_count: u32,
    ) -> Result<Game, GameError> {
        let board = Board::new(size, bomb_count).map_err(|e| {
            tracing::debug!(size, bomb_count, error = %e, "Rejected game board");
            GameError::from(e)
        })?;

        let game = Game::new(self.ids.next_id(), name, board);

        if let Err(source) = self.games.save(&game).await {
            tracing::error!(game_id = %game.id(), error = %source, "Failed to save game");
            return Err(GameError::Persistence {
                context: CREATE_FAILED,
                source,
            });
        }

        tracing::info!(
            game_id = %game.id(),
            size = game.size(),
            bomb_count = game.bomb_count(),
            "Game created"
        );
        Ok(game)
    }

    pub async fn get(&self, id: &GameId) -> Result<Game, GameError> {
        match self.games.get(id).await {
            Ok(game) => Ok(game),
            Err(RepoError::NotFound { .. }) => Err(GameError::NotFound { id: id.clone() }),
            Err(source) => {
                tracing::error!(game_id = %id, error = %source, "Failed to load game");
                Err(GameError::Persistence {
                    context: GET_FAILED,
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::infrastructure::ids::{SequentialIds, UuidGenerator};
    use crate::infrastructure::memory::InMemoryGameRepo;
    use crate::infrastructure::ports::{MockGameRepo, MockIdGeneratorPort};

    fn in_memory_service() -> (GameService, Arc<InMemoryGameRepo>, Arc<SequentialIds>) {
        let repo = Arc::new(InMemoryGameRepo::new());
        let ids = Arc::new(SequentialIds::new());
        let service = GameService::new(repo.clone(), ids.clone());
        (service, repo, ids)
    }

    #[tokio::test]
    async fn create_then_get_returns_same_game() {
        let (service, _, _) = in_memory_service();

        let created = service.create("Alpha", 5, 3).await.expect("create");
        assert!(!created.id().as_str().is_empty());
        assert_eq!(created.name(), "Alpha");
        assert_eq!(created.size(), 5);
        assert_eq!(created.bomb_count(), 3);

        let loaded = service.get(created.id()).await.expect("get");
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn create_accepts_every_valid_bomb_count() {
        let (service, _, _) = in_memory_service();

        for size in 1..=6u32 {
            for bombs in 0..size * size {
                let game = service.create("grid", size, bombs).await.expect("valid board");
                let loaded = service.get(game.id()).await.expect("stored");
                assert_eq!(loaded.bomb_count(), bombs);
            }
        }
    }

    #[tokio::test]
    async fn invalid_board_fails_without_side_effects() {
        let (service, repo, ids) = in_memory_service();

        for (size, bombs) in [(2, 4), (2, 100), (0, 0), (3, 9)] {
            let err = service
                .create("Bad", size, bombs)
                .await
                .expect_err("bombs >= cells");
            assert!(matches!(err, GameError::InvalidInput(ref m) if m == "the number of bombs is invalid"));
        }

        assert_eq!(ids.issued(), 0);
        assert!(repo.is_empty().await);
        assert!(matches!(
            service.get(&GameId::new("game-1")).await,
            Err(GameError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_board_never_calls_ports() {
        let mut repo = MockGameRepo::new();
        repo.expect_save().times(0);
        let mut ids = MockIdGeneratorPort::new();
        ids.expect_next_id().times(0);

        let service = GameService::new(Arc::new(repo), Arc::new(ids));

        let result = service.create("Bad", 2, 4).await;
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn create_draws_exactly_one_id_and_saves_it() {
        let mut ids = MockIdGeneratorPort::new();
        ids.expect_next_id()
            .times(1)
            .returning(|| GameId::new("fixed-id"));

        let mut repo = MockGameRepo::new();
        repo.expect_save()
            .withf(|game| game.id().as_str() == "fixed-id" && game.name() == "Alpha")
            .times(1)
            .returning(|_| Ok(()));

        let service = GameService::new(Arc::new(repo), Arc::new(ids));

        let game = service.create("Alpha", 5, 3).await.expect("create");
        assert_eq!(game.id().as_str(), "fixed-id");
    }

    #[tokio::test]
    async fn storage_failure_on_create_is_persistence_error() {
        let mut ids = MockIdGeneratorPort::new();
        ids.expect_next_id().returning(|| GameId::new("fixed-id"));

        let mut repo = MockGameRepo::new();
        repo.expect_save()
            .returning(|_| Err(RepoError::database("save_game", "disk full")));

        let service = GameService::new(Arc::new(repo), Arc::new(ids));

        match service.create("Alpha", 5, 3).await {
            Err(GameError::Persistence { context, source }) => {
                assert_eq!(context, CREATE_FAILED);
                assert_eq!(source, RepoError::database("save_game", "disk full"));
            }
            other => panic!("Expected GameError::Persistence, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let (service, _, _) = in_memory_service();

        let err = service
            .get(&GameId::new("nonexistent-id"))
            .await
            .expect_err("never created");

        match err {
            GameError::NotFound { id } => assert_eq!(id.as_str(), "nonexistent-id"),
            other => panic!("Expected GameError::NotFound, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn storage_failure_on_get_is_persistence_error() {
        let mut repo = MockGameRepo::new();
        repo.expect_get()
            .returning(|_| Err(RepoError::database("get_game", "connection reset")));

        let service = GameService::new(Arc::new(repo), Arc::new(MockIdGeneratorPort::new()));

        let err = service
            .get(&GameId::new("g-1"))
            .await
            .expect_err("storage failed");
        assert!(matches!(err, GameError::Persistence { context: GET_FAILED, .. }));
        assert_eq!(err.to_string(), GET_FAILED);
    }

    #[tokio::test]
    async fn identical_creates_get_distinct_ids() {
        let (service, repo, _) = in_memory_service();

        let first = service.create("Alpha", 5, 3).await.expect("first");
        let second = service.create("Alpha", 5, 3).await.expect("second");

        assert_ne!(first.id(), second.id());
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn concurrent_creates_all_persist_with_unique_ids() {
        let repo = Arc::new(InMemoryGameRepo::new());
        let service = Arc::new(GameService::new(repo.clone(), Arc::new(UuidGenerator::new())));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.create(format!("game {i}"), 8, 10).await })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            let game = handle.await.expect("task").expect("create");
            assert_eq!(service.get(game.id()).await.expect("get"), game);
            assert!(seen.insert(game.id().clone()));
        }

        assert_eq!(repo.len().await, 50);
    }
}

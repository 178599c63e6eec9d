//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::BoardDefaults,
    ids::UuidGenerator,
    memory::InMemoryGameRepo,
    ports::{GameRepo, IdGeneratorPort},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the use cases; repository ports are reached only through them.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    /// Applied by the API when a create request omits board dimensions.
    pub board_defaults: BoardDefaults,
}

/// Container for all use cases.
pub struct UseCases {
    pub game: use_cases::GameService,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        game_repo: Arc<dyn GameRepo>,
        ids: Arc<dyn IdGeneratorPort>,
        board_defaults: BoardDefaults,
    ) -> Self {
        let game = use_cases::GameService::new(game_repo, ids);

        Self {
            use_cases: UseCases { game },
            board_defaults,
        }
    }

    /// App backed by the in-memory repository and UUID ids.
    pub fn in_memory(board_defaults: BoardDefaults) -> Self {
        Self::new(
            Arc::new(InMemoryGameRepo::new()),
            Arc::new(UuidGenerator::new()),
            board_defaults,
        )
    }
}

//! Identity port for assigning game ids.

use minefield_domain::GameId;

/// Produces identifiers that have not been handed out before in this process.
#[cfg_attr(test, mockall::automock)]
pub trait IdGeneratorPort: Send + Sync {
    fn next_id(&self) -> GameId;
}

//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Game storage (could swap in-memory -> Postgres)
//! - Identity assignment (for testing)

mod error;
mod ids;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::GameRepo;

// =============================================================================
// Identity Ports
// =============================================================================
pub use ids::IdGeneratorPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use ids::MockIdGeneratorPort;
#[cfg(test)]
pub use repos::MockGameRepo;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;

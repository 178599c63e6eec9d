//! Minefield domain: the game aggregate, its identifiers and invariants.

pub mod aggregates;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::Game;
pub use error::DomainError;
pub use ids::GameId;

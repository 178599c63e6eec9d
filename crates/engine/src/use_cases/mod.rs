//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases sit between the API layer and the infrastructure ports.

pub mod game;

pub use game::{GameError, GameService};

//! In-memory adapters for the repository ports.
//!
//! State lives only as long as the process; nothing is written to disk.

mod game_repo;

pub use game_repo::InMemoryGameRepo;

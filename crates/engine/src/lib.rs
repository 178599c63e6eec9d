//! Minefield Engine library.
//!
//! This crate contains all server-side code for the Minefield game service.
//!
//! ## Structure
//!
//! - `use_cases/` - Game creation and lookup, the only decision logic
//! - `infrastructure/` - Port traits, adapters and configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;

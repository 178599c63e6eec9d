//! Infrastructure - port traits and their concrete adapters.

pub mod config;
pub mod ids;
pub mod memory;
pub mod ports;

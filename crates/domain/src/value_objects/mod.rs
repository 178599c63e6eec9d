//! Value objects - Immutable objects defined by their attributes

mod board;

pub use board::Board;

//! Core library for a bounded, sparse Game of Life.

pub mod cell;
pub mod enc;
pub mod engine;
pub mod session;

pub use cell::Cell;
pub use enc::{PatternCodec, RunLengthEncoded};
pub use engine::{next_state, LifeEngine};
pub use session::Session;

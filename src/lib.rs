//! Fight! Kokaton — a single-session terminal arcade game.
//!
//! The simulation lives in [`compute`] as pure functions over the data
//! types in [`entities`]; all terminal I/O belongs to the binary.

pub mod compute;
pub mod entities;

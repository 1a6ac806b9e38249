//! Game implementations.
//!
//! - `kittens`: Exploding Kittens elimination card game
//! - `connect_four`: Connect Four with a heuristic AI

pub mod connect_four;
pub mod kittens;

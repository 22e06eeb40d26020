//! Incremental breadth-first search over caller-supplied state spaces, with two puzzle
//! bindings (block sliding and water pouring) built on top of it.

pub mod problem;
pub mod search;
pub mod block;
pub mod pouring;
pub mod scenarios;

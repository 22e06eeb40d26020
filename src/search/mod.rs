//! Incremental breadth-first search over caller-supplied state spaces.

pub mod bfs;
pub mod generations;
pub mod movegen;
pub mod path;
pub mod replay;
pub mod resources;

pub use bfs::{goal_paths, shortest_path, solve, GoalPaths, SearchReport};
pub use generations::{Generation, Generations};
pub use path::Path;

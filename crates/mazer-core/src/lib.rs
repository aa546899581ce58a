//! **mazer-core** — weighted maze grids (core types).
//!
//! This crate provides the foundational types used by the *mazer*
//! pathfinding crates: `(row, col)` geometry, the validated [`Grid`] with its
//! token notation and construction errors, and a handful of bundled sample
//! mazes.

pub mod error;
pub mod geom;
pub mod grid;
pub mod presets;

pub use error::{GridError, Malformed, Marker};
pub use geom::{Coord, Range};
pub use grid::{DEFAULT_WEIGHT, Grid, GridStats, OBSTACLE};
pub use presets::Preset;

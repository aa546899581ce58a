//! A* shortest-path search over weighted maze grids.
//!
//! The engine finds a minimum-cost route between two cells of a
//! [`mazer_core::Grid`], where entering a cell costs the geometric move cost
//! (1 for axis-aligned steps, √2 for diagonal ones) times the cell's weight.
//!
//! - **Heuristics**: [`manhattan`] and [`euclidean`], selected per search via
//!   [`Heuristic`]
//! - **Neighbor expansion**: [`Neighbors`], 4- or 8-directional, clipped to
//!   the grid bounds
//! - **Search**: [`AstarSearch`], classic A* with a lazily pruned frontier,
//!   plus the one-shot [`search`] and [`solve`] helpers
//! - **Observation**: any [`Observer`] (closures included) receives every
//!   expanded cell; [`VisitTrace`] records them
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds, neighbors with base move costs |
//! | [`WeightedPather`] : [`Pather`] | obstacle test, cell weight |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic estimate |
//!
//! [`GridPather`] implements all three for a grid and a [`SearchConfig`].

mod astar;
mod config;
mod distance;
mod frontier;
mod neighbors;
mod observer;
mod pather;
mod traits;

pub use astar::{AstarSearch, Path, SearchState, SearchStats, search, solve};
pub use config::SearchConfig;
pub use distance::{Heuristic, euclidean, manhattan};
pub use frontier::SearchNode;
pub use neighbors::{CARDINAL_COST, DIAGONAL_COST, Neighbors, Step, expand_into};
pub use observer::{Observer, VisitTrace};
pub use pather::GridPather;
pub use traits::{AstarPather, Pather, WeightedPather};

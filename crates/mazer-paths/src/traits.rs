use mazer_core::{Coord, Range};

use crate::neighbors::Step;

/// Minimal pathfinding interface — provides bounds and neighbor enumeration.
pub trait Pather {
    /// The rectangle the search may visit.
    fn bounds(&self) -> Range;

    /// Append the in-bounds neighbors of `p` into `buf`, with their base
    /// move costs. The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Step>);
}

/// Pather over weighted, partly blocked cells.
pub trait WeightedPather: Pather {
    /// Whether `p` may not be entered.
    fn is_obstacle(&self, p: Coord) -> bool;

    /// Multiplier applied to the base move cost when entering `p`.
    /// Only queried for cells that are not obstacles; must be > 0.
    fn weight(&self, p: Coord) -> f64;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    fn estimate(&self, from: Coord, to: Coord) -> f64;
}

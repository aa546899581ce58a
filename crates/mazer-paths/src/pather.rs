use mazer_core::{Coord, Grid, Range};

use crate::config::SearchConfig;
use crate::neighbors::{Step, expand_into};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Adapts a [`Grid`] and a [`SearchConfig`] to the pather traits.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    config: SearchConfig,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Pather for GridPather<'_> {
    fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    fn neighbors(&self, p: Coord, buf: &mut Vec<Step>) {
        expand_into(p, self.grid.bounds(), self.config.allow_diagonal, buf);
    }
}

impl WeightedPather for GridPather<'_> {
    fn is_obstacle(&self, p: Coord) -> bool {
        self.grid.is_obstacle(p)
    }

    fn weight(&self, p: Coord) -> f64 {
        self.grid.cost(p).map_or(f64::INFINITY, f64::from)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Coord, to: Coord) -> f64 {
        self.config.heuristic.estimate(from, to)
    }
}

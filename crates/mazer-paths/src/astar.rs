use mazer_core::{Coord, Grid};

use crate::config::SearchConfig;
use crate::frontier::{Frontier, SearchNode};
use crate::observer::Observer;
use crate::pather::GridPather;
use crate::traits::AstarPather;

/// A found route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Cells from start to goal, both included.
    pub cells: Vec<Coord>,
    /// Accumulated cost, equal to `g` at the goal.
    pub cost: f64,
}

impl Path {
    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Whether `p` lies on the path.
    pub fn contains(&self, p: Coord) -> bool {
        self.cells.contains(&p)
    }
}

/// Lifecycle of an [`AstarSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Constructed, not yet run.
    Ready,
    /// Popping and expanding frontier entries.
    Running,
    /// The goal was popped from the frontier.
    Succeeded,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Exhausted)
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped and closed.
    pub expanded: usize,
    /// Frontier insertions, the start included.
    pub pushed: usize,
    /// Popped entries discarded because their cell was already closed.
    pub stale: usize,
}

/// One A* search from `start` to `goal` over a pather.
///
/// The engine runs to completion in a single call and cannot be resumed:
/// running it again after it reached a terminal state returns the stored
/// outcome without searching.
pub struct AstarSearch<'p, P: AstarPather> {
    pather: &'p P,
    start: Coord,
    goal: Coord,
    state: SearchState,
    stats: SearchStats,
    outcome: Option<Path>,
}

impl<'p, P: AstarPather> AstarSearch<'p, P> {
    pub fn new(pather: &'p P, start: Coord, goal: Coord) -> Self {
        Self {
            pather,
            start,
            goal,
            state: SearchState::Ready,
            stats: SearchStats::default(),
            outcome: None,
        }
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Run without an observer.
    pub fn run(&mut self) -> Option<Path> {
        self.run_with(&mut |_: Coord, _: f64| {})
    }

    /// Run, reporting every expanded cell to `observer`.
    ///
    /// Returns `None` when no route exists. `start == goal` succeeds at once
    /// with the single-cell path, wherever that cell lies. Otherwise a start
    /// or goal outside the pather's bounds yields `None`. Obstacle status of
    /// the start and goal is not checked: a start on an obstacle is still
    /// expanded, while a goal on one can never be entered.
    pub fn run_with<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Option<Path> {
        if self.state.is_terminal() {
            return self.outcome.clone();
        }
        self.state = SearchState::Running;

        if self.start == self.goal {
            return self.finish(Some(Path {
                cells: vec![self.start],
                cost: 0.0,
            }));
        }

        let bounds = self.pather.bounds();
        let (Some(start_idx), Some(goal_idx)) = (bounds.index(self.start), bounds.index(self.goal))
        else {
            log::debug!("start {} or goal {} outside {bounds}", self.start, self.goal);
            return self.finish(None);
        };

        let len = bounds.len();
        // Best known g per cell; the source of truth over frontier membership.
        let mut best_g: Vec<Option<f64>> = vec![None; len];
        let mut closed = vec![false; len];
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut open = Frontier::new();

        let h = self.pather.estimate(self.start, self.goal);
        nodes.push(SearchNode {
            pos: self.start,
            parent: None,
            g: 0.0,
            h,
        });
        best_g[start_idx] = Some(0.0);
        open.push(h, 0);
        self.stats.pushed += 1;

        let mut nbuf = Vec::with_capacity(8);

        let found = 'search: loop {
            let Some(entry) = open.pop() else {
                break 'search None;
            };
            let current = nodes[entry.node];
            let Some(ci) = bounds.index(current.pos) else {
                continue;
            };

            // Skip stale entries.
            if closed[ci] {
                self.stats.stale += 1;
                continue;
            }
            closed[ci] = true;
            self.stats.expanded += 1;

            log::trace!("expand {} f={:.3}", current.pos, entry.f);
            observer.visit(current.pos, entry.f);

            if ci == goal_idx {
                break 'search Some(entry.node);
            }

            nbuf.clear();
            self.pather.neighbors(current.pos, &mut nbuf);

            for step in nbuf.iter() {
                let Some(ni) = bounds.index(step.to) else {
                    continue;
                };
                if closed[ni] || self.pather.is_obstacle(step.to) {
                    continue;
                }
                // The cell weight scales the geometric move cost.
                let tentative_g = current.g + step.cost * self.pather.weight(step.to);
                if best_g[ni].is_some_and(|g| tentative_g >= g) {
                    continue;
                }
                best_g[ni] = Some(tentative_g);

                let h = self.pather.estimate(step.to, self.goal);
                nodes.push(SearchNode {
                    pos: step.to,
                    parent: Some(entry.node),
                    g: tentative_g,
                    h,
                });
                open.push(tentative_g + h, nodes.len() - 1);
                self.stats.pushed += 1;
            }
        };

        let path = found.map(|goal_node| reconstruct(&nodes, goal_node));
        match &path {
            Some(p) => log::debug!(
                "path found: {} nodes explored, cost {:.2}, {} cells, {} entries left open",
                self.stats.expanded,
                p.cost,
                p.len(),
                open.len()
            ),
            None => log::debug!("no path: {} nodes explored", self.stats.expanded),
        }
        self.finish(path)
    }

    fn finish(&mut self, outcome: Option<Path>) -> Option<Path> {
        self.state = if outcome.is_some() {
            SearchState::Succeeded
        } else {
            SearchState::Exhausted
        };
        self.outcome = outcome;
        self.outcome.clone()
    }
}

/// Walk predecessor links from the goal node back to the root.
fn reconstruct(nodes: &[SearchNode], goal_node: usize) -> Path {
    let mut cells = Vec::new();
    let mut ni = Some(goal_node);
    while let Some(i) = ni {
        cells.push(nodes[i].pos);
        ni = nodes[i].parent;
    }
    cells.reverse();
    Path {
        cells,
        cost: nodes[goal_node].g,
    }
}

/// Find a minimum-cost route from `start` to `goal` on `grid`.
///
/// ```
/// use mazer_core::Grid;
/// use mazer_paths::{SearchConfig, search};
///
/// let grid = Grid::parse("S 0 1\n1 0 E").unwrap();
/// let path = search(&grid, grid.start(), grid.goal(), &SearchConfig::default(), None).unwrap();
/// assert_eq!(path.cost, 3.0);
/// assert_eq!(path.len(), 4);
/// ```
pub fn search(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    config: &SearchConfig,
    on_visit: Option<&mut dyn Observer>,
) -> Option<Path> {
    let pather = GridPather::new(grid, *config);
    let mut engine = AstarSearch::new(&pather, start, goal);
    match on_visit {
        Some(observer) => engine.run_with(observer),
        None => engine.run(),
    }
}

/// Find a route between the grid's own start and goal markers.
pub fn solve(grid: &Grid, config: &SearchConfig) -> Option<Path> {
    search(grid, grid.start(), grid.goal(), config, None)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path {
            cells: vec![Coord::new(0, 0), Coord::new(0, 1)],
            cost: 1.0,
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}

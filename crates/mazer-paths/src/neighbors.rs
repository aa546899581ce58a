use mazer_core::{Coord, Range};

/// Base cost of an axis-aligned move.
pub const CARDINAL_COST: f64 = 1.0;

/// Base cost of a diagonal move.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

const CARDINAL: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
];

const DIAGONAL: [Coord; 4] = [
    Coord::new(-1, -1),
    Coord::new(-1, 1),
    Coord::new(1, -1),
    Coord::new(1, 1),
];

/// A move to an adjacent cell with its geometric base cost. The cell
/// weight is applied by the search, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub to: Coord,
    pub cost: f64,
}

/// Append the in-bounds neighbors of `p` to `buf`: up, down, left, right,
/// then (with `diagonal`) up-left, up-right, down-left, down-right.
///
/// Only bounds are checked. Diagonal moves are allowed even when both
/// orthogonal cells beside them are blocked.
pub fn expand_into(p: Coord, bounds: Range, diagonal: bool, buf: &mut Vec<Step>) {
    push_in_bounds(p, bounds, &CARDINAL, CARDINAL_COST, buf);
    if diagonal {
        push_in_bounds(p, bounds, &DIAGONAL, DIAGONAL_COST, buf);
    }
}

fn push_in_bounds(p: Coord, bounds: Range, dirs: &[Coord], cost: f64, buf: &mut Vec<Step>) {
    for &d in dirs {
        let to = p + d;
        if bounds.contains(to) {
            buf.push(Step { to, cost });
        }
    }
}

/// Cached neighbor computation helper.
///
/// Reuses one buffer across calls, so repeated expansion does not allocate.
pub struct Neighbors {
    buf: Vec<Step>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 4-directional neighbors of `p` inside `bounds`.
    pub fn cardinal(&mut self, p: Coord, bounds: Range) -> &[Step] {
        self.expand(p, bounds, false)
    }

    /// Return the 8-directional neighbors of `p` inside `bounds`.
    pub fn all(&mut self, p: Coord, bounds: Range) -> &[Step] {
        self.expand(p, bounds, true)
    }

    /// Return the neighbors of `p` inside `bounds` under the given movement
    /// policy.
    pub fn expand(&mut self, p: Coord, bounds: Range, diagonal: bool) -> &[Step] {
        self.buf.clear();
        expand_into(p, bounds, diagonal, &mut self.buf);
        &self.buf
    }
}

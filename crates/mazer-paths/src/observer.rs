//! Read-only side channel for watching a search.

use std::collections::HashSet;

use mazer_core::Coord;

/// Receives every expanded cell, in expansion order, with its `f` cost.
///
/// Observers cannot influence the search. A panic inside `visit` unwinds
/// through the search and aborts it.
pub trait Observer {
    fn visit(&mut self, p: Coord, f: f64);
}

impl<F: FnMut(Coord, f64)> Observer for F {
    #[inline]
    fn visit(&mut self, p: Coord, f: f64) {
        self(p, f)
    }
}

/// Observer that records the visitation trace for later reporting.
#[derive(Debug, Clone, Default)]
pub struct VisitTrace {
    order: Vec<(Coord, f64)>,
    explored: HashSet<Coord>,
}

impl VisitTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expanded cells with their `f` cost, in expansion order.
    pub fn order(&self) -> &[(Coord, f64)] {
        &self.order
    }

    /// Whether `p` was expanded.
    pub fn contains(&self, p: Coord) -> bool {
        self.explored.contains(&p)
    }

    /// The set of expanded cells.
    pub fn explored(&self) -> &HashSet<Coord> {
        &self.explored
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.explored.clear();
    }
}

impl Observer for VisitTrace {
    fn visit(&mut self, p: Coord, f: f64) {
        self.order.push((p, f));
        self.explored.insert(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        {
            let mut obs = |p: Coord, f: f64| seen.push((p, f));
            obs.visit(Coord::new(1, 2), 3.5);
        }
        assert_eq!(seen, vec![(Coord::new(1, 2), 3.5)]);
    }

    #[test]
    fn trace_records_order_and_set() {
        let mut t = VisitTrace::new();
        t.visit(Coord::new(0, 0), 4.0);
        t.visit(Coord::new(0, 1), 4.0);
        assert_eq!(t.len(), 2);
        assert!(t.contains(Coord::new(0, 1)));
        assert!(!t.contains(Coord::new(1, 1)));
        assert_eq!(t.order()[0], (Coord::new(0, 0), 4.0));
        t.clear();
        assert!(t.is_empty());
        assert!(t.explored().is_empty());
    }
}

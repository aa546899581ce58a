use std::cmp::Ordering;
use std::collections::BinaryHeap;

use mazer_core::Coord;

/// A discovered cell with its costs. Nodes live in an arena and refer to
/// their predecessor by index; a cell that is reached again more cheaply
/// gets a fresh node rather than an update in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub pos: Coord,
    /// Arena index of the predecessor, `None` for the start node.
    pub parent: Option<usize>,
    pub g: f64,
    pub h: f64,
}

impl SearchNode {
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Frontier entry, ordered by `f` then insertion order for use in
/// `BinaryHeap`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) f: f64,
    pub(crate) seq: u64,
    pub(crate) node: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest push among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Open set with lazy deletion: superseded entries stay in the heap and
/// are skipped by the caller when popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, f: f64, node: usize) {
        self.heap.push(Entry {
            f,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_f_first() {
        let mut fr = Frontier::new();
        fr.push(5.0, 0);
        fr.push(2.5, 1);
        fr.push(7.0, 2);
        let order: Vec<usize> = std::iter::from_fn(|| fr.pop()).map(|e| e.node).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn equal_f_pops_in_insertion_order() {
        let mut fr = Frontier::new();
        for node in 0..5 {
            fr.push(3.0, node);
        }
        fr.push(1.0, 9);
        assert_eq!(fr.len(), 6);
        let order: Vec<usize> = std::iter::from_fn(|| fr.pop()).map(|e| e.node).collect();
        assert_eq!(order, vec![9, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut fr = Frontier::new();
        fr.push(4.0, 0);
        fr.push(3.0, 1);
        fr.push(4.0, 0);
        assert_eq!(fr.len(), 3);
    }

    #[test]
    fn node_f_is_g_plus_h() {
        let n = SearchNode {
            pos: Coord::new(1, 1),
            parent: None,
            g: 2.0,
            h: 3.5,
        };
        assert_eq!(n.f(), 5.5);
    }
}

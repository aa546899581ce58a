//! Errors raised while building a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::Coord;

/// One of the two required markers in a maze source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Start,
    Goal,
}

impl Marker {
    /// The canonical token for this marker.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Start => "S",
            Self::Goal => "E",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start marker \u{201c}S\u{201d}"),
            Self::Goal => write!(f, "goal marker \u{201c}E\u{201d}"),
        }
    }
}

/// Shape problems with the token table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// No rows, or a first row without any tokens.
    Empty,
    /// Row `row` has `found` tokens where `expected` were required.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// More rows or columns than a [`Coord`] can address.
    TooLarge { rows: usize, cols: usize },
}

/// Errors that can occur when building a grid. All of them are fatal: no
/// partially built grid is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows of unequal length, or zero rows/columns.
    MalformedGrid(Malformed),
    /// No start token, or no goal token.
    MissingMarker(Marker),
    /// More than one start token, or more than one goal token.
    DuplicateMarker {
        marker: Marker,
        first: Coord,
        second: Coord,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid(Malformed::Empty) => {
                write!(f, "malformed grid: the maze must contain at least one cell")
            }
            Self::MalformedGrid(Malformed::RaggedRow {
                row,
                expected,
                found,
            }) => write!(
                f,
                "malformed grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::MalformedGrid(Malformed::TooLarge { rows, cols }) => {
                write!(f, "malformed grid: {rows}x{cols} exceeds the addressable size")
            }
            Self::MissingMarker(m) => write!(f, "missing {m}: the maze must contain exactly one"),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(f, "duplicate {marker} at {second} (first seen at {first})"),
        }
    }
}

impl std::error::Error for GridError {}

//! The [`Grid`] type — a validated, immutable weighted maze.
//!
//! A grid is built once from a table of whitespace-separated tokens and is
//! read-only afterwards. It owns its cells outright (no shared buffers), so a
//! single `Grid` can be searched from several threads at once.
//!
//! # Token notation
//!
//! | Token | Cell |
//! |---|---|
//! | `S` / `s` | start, weight 1 |
//! | `E` / `e` | goal, weight 1 |
//! | `0` | free, weight 1 |
//! | `1` | obstacle (a wall, not a weight of one) |
//! | `v > 1` | weight `v` |
//! | `v < 0` | obstacle |
//! | anything else | obstacle |

use std::fmt;

use crate::error::{GridError, Malformed, Marker};
use crate::geom::{Coord, Range};

/// Cell value marking an impassable cell.
pub const OBSTACLE: i32 = -1;

/// Weight of an ordinary free cell.
pub const DEFAULT_WEIGHT: i32 = 1;

/// How a single source token resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Start,
    Goal,
    Cell(i32),
    /// Not an integer: degrades to an obstacle.
    Unknown,
}

impl Token {
    fn classify(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("S") {
            return Self::Start;
        }
        if s.eq_ignore_ascii_case("E") {
            return Self::Goal;
        }
        match s {
            "0" => Self::Cell(DEFAULT_WEIGHT),
            "1" => Self::Cell(OBSTACLE),
            _ => integer_cell(s).map_or(Self::Unknown, Self::Cell),
        }
    }

    fn value(self) -> i32 {
        match self {
            Self::Start | Self::Goal => DEFAULT_WEIGHT,
            Self::Cell(v) => v,
            Self::Unknown => OBSTACLE,
        }
    }
}

/// Cell value of an integer token, or `None` when `s` is not an integer.
///
/// Weights beyond `i32::MAX` saturate; any negative value is an obstacle,
/// however long its digit string.
fn integer_cell(s: &str) -> Option<i32> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = if digits.bytes().all(|b| b == b'0') {
        DEFAULT_WEIGHT
    } else if negative {
        OBSTACLE
    } else {
        digits.parse::<i32>().unwrap_or(i32::MAX)
    };
    Some(value)
}

/// A weighted maze with exactly one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<i32>,
    tokens: Vec<String>,
    bounds: Range,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Parse a maze from text: one row per line, tokens separated by
    /// whitespace. Blank lines and surrounding whitespace are ignored.
    ///
    /// ```
    /// use mazer_core::{Coord, Grid};
    ///
    /// let g = Grid::parse("S 0 1\n0 0 E").unwrap();
    /// assert_eq!(g.start(), Coord::new(0, 0));
    /// assert_eq!(g.goal(), Coord::new(1, 2));
    /// assert!(g.is_obstacle(Coord::new(0, 2)));
    /// ```
    pub fn parse(source: &str) -> Result<Self, GridError> {
        Self::from_rows(
            source
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::split_whitespace),
        )
    }

    /// Build a maze from an already tokenized table.
    ///
    /// Validation is eager: table shape first, then markers. Any failure
    /// aborts construction.
    pub fn from_rows<I, R, T>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let table: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|t| t.as_ref().trim().to_string()).collect())
            .collect();

        let ncols = table.first().map_or(0, Vec::len);
        if ncols == 0 {
            return Err(GridError::MalformedGrid(Malformed::Empty));
        }
        for (row, tokens) in table.iter().enumerate() {
            if tokens.len() != ncols {
                return Err(GridError::MalformedGrid(Malformed::RaggedRow {
                    row,
                    expected: ncols,
                    found: tokens.len(),
                }));
            }
        }

        let bounds = table_bounds(table.len(), ncols)?;
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;
        let mut cells = Vec::with_capacity(bounds.len());
        let mut tokens = Vec::with_capacity(bounds.len());

        for (p, tok) in bounds.iter().zip(table.into_iter().flatten()) {
            let kind = Token::classify(&tok);
            match kind {
                Token::Start => record_marker(&mut start, Marker::Start, p)?,
                Token::Goal => record_marker(&mut goal, Marker::Goal, p)?,
                Token::Unknown => {
                    log::debug!("unrecognized token {tok:?} at {p} treated as an obstacle");
                }
                Token::Cell(_) => {}
            }
            cells.push(kind.value());
            tokens.push(tok);
        }

        let start = start.ok_or(GridError::MissingMarker(Marker::Start))?;
        let goal = goal.ok_or(GridError::MissingMarker(Marker::Goal))?;

        log::debug!(
            "parsed {}x{} grid, start {start}, goal {goal}",
            bounds.rows(),
            bounds.cols()
        );

        Ok(Self {
            cells,
            tokens,
            bounds,
            start,
            goal,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// The bounding range `[(0, 0), (rows, cols))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Start coordinate.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Goal coordinate.
    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Coord) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is impassable. Out-of-bounds coordinates count as
    /// obstacles.
    #[inline]
    pub fn is_obstacle(&self, p: Coord) -> bool {
        self.cell(p).is_none_or(|v| v == OBSTACLE)
    }

    /// Traversal weight of a free cell; `None` for obstacles and
    /// out-of-bounds coordinates.
    #[inline]
    pub fn cost(&self, p: Coord) -> Option<u32> {
        self.cell(p)
            .filter(|&v| v != OBSTACLE)
            .map(|v| v as u32)
    }

    /// Raw cell value ([`OBSTACLE`] or a positive weight).
    #[inline]
    pub fn cell(&self, p: Coord) -> Option<i32> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// The source token the cell was parsed from.
    pub fn token(&self, p: Coord) -> Option<&str> {
        self.bounds.index(p).map(|i| self.tokens[i].as_str())
    }

    /// Row-major iterator over `(Coord, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Aggregate counts. Informational only.
    pub fn statistics(&self) -> GridStats {
        let total_cells = self.cells.len();
        let obstacles = self.cells.iter().filter(|&&v| v == OBSTACLE).count();
        let free_cells = total_cells - obstacles;
        let weight_sum: u64 = self
            .cells
            .iter()
            .filter(|&&v| v > 0)
            .map(|&v| v as u64)
            .sum();
        let mean_weight = if free_cells == 0 {
            0.0
        } else {
            weight_sum as f64 / free_cells as f64
        };
        GridStats {
            rows: self.rows(),
            cols: self.cols(),
            total_cells,
            free_cells,
            obstacles,
            obstacle_percentage: obstacles as f64 * 100.0 / total_cells as f64,
            mean_weight,
            start: self.start,
            goal: self.goal,
        }
    }
}

/// Bounds of a `rows`×`cols` table, which must be addressable by [`Coord`].
fn table_bounds(rows: usize, cols: usize) -> Result<Range, GridError> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok(Range::sized(r, c)),
        _ => Err(GridError::MalformedGrid(Malformed::TooLarge { rows, cols })),
    }
}

fn record_marker(slot: &mut Option<Coord>, marker: Marker, p: Coord) -> Result<(), GridError> {
    match *slot {
        Some(first) => Err(GridError::DuplicateMarker {
            marker,
            first,
            second: p,
        }),
        None => {
            *slot = Some(p);
            Ok(())
        }
    }
}

/// Writes the grid back out in its source notation.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.cols() as usize;
        for (r, row) in self.tokens.chunks(cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Summary of a grid's contents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridStats {
    pub rows: i32,
    pub cols: i32,
    pub total_cells: usize,
    pub free_cells: usize,
    pub obstacles: usize,
    /// Share of obstacle cells, in percent.
    pub obstacle_percentage: f64,
    /// Mean weight over free cells (0 when there are none).
    pub mean_weight: f64,
    pub start: Coord,
    pub goal: Coord,
}

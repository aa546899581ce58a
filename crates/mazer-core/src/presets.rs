//! Bundled sample mazes.

use crate::error::GridError;
use crate::grid::Grid;

/// One of the built-in sample mazes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// The 4×5 maze from the problem statement.
    Statement,
    /// 8×8 with several competing routes.
    Medium,
    /// 12×12 switchback corridors.
    Large,
    /// 5×6 terrain with weights 2, 3 and 5. The `1` cells are walls, so the
    /// start is sealed off.
    Weighted,
    /// 5×5 where the goal is walled in on all eight sides.
    Unsolvable,
}

impl Preset {
    /// All presets, in catalogue order.
    pub const ALL: [Preset; 5] = [
        Self::Statement,
        Self::Medium,
        Self::Large,
        Self::Weighted,
        Self::Unsolvable,
    ];

    /// Look a preset up by its 1-based catalogue number.
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Short human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Statement => "statement maze (4x5), simple",
            Self::Medium => "medium maze (8x8), several routes",
            Self::Large => "large maze (12x12), switchbacks",
            Self::Weighted => "weighted terrain (5x6)",
            Self::Unsolvable => "unsolvable maze (5x5)",
        }
    }

    /// The maze in source notation.
    pub fn source(self) -> &'static str {
        match self {
            Self::Statement => STATEMENT,
            Self::Medium => MEDIUM,
            Self::Large => LARGE,
            Self::Weighted => WEIGHTED,
            Self::Unsolvable => UNSOLVABLE,
        }
    }

    /// Parse the preset.
    pub fn grid(self) -> Result<Grid, GridError> {
        Grid::parse(self.source())
    }
}

const STATEMENT: &str = "\
S 0 1 0 0
0 0 1 0 1
1 0 1 0 0
1 0 0 E 1";

const MEDIUM: &str = "\
S 0 0 1 0 0 0 1
0 1 0 1 0 1 0 0
0 1 0 0 0 1 1 0
0 0 0 1 0 0 0 0
1 1 0 1 1 1 0 1
0 0 0 0 0 0 0 0
0 1 1 1 1 1 1 0
0 0 0 0 0 0 0 E";

const LARGE: &str = "\
S 0 0 0 1 0 0 0 0 0 0 0
0 1 1 0 1 0 1 1 1 1 1 0
0 0 0 0 0 0 0 0 0 0 0 0
0 1 1 1 1 1 1 1 1 1 1 0
0 0 0 0 0 0 0 0 0 0 0 0
1 1 1 1 1 0 1 1 1 1 1 1
0 0 0 0 0 0 0 0 0 0 0 0
0 1 1 1 1 1 1 1 1 1 1 0
0 0 0 0 0 0 0 0 0 0 0 0
0 1 1 1 1 1 1 1 1 1 0 0
0 0 0 0 0 0 0 0 0 0 0 1
1 1 1 1 1 1 1 1 1 1 0 E";

// `1` is a wall here too, which leaves the start boxed in: this terrain has
// no route under either movement policy.
const WEIGHTED: &str = "\
S 1 1 5 5 5
1 1 1 5 5 5
2 2 1 1 5 5
2 2 2 1 1 1
3 3 2 2 1 E";

const UNSOLVABLE: &str = "\
S 0 0 0 0
0 1 1 1 0
0 1 E 1 0
0 1 1 1 0
0 0 0 0 0";

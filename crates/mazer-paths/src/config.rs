use crate::distance::Heuristic;

/// Per-search settings.
///
/// The default is 4-directional movement with the Manhattan heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Also allow the four diagonal moves (base cost √2).
    pub allow_diagonal: bool,
    pub heuristic: Heuristic,
}

impl SearchConfig {
    /// Create a config from both settings.
    #[inline]
    pub const fn new(allow_diagonal: bool, heuristic: Heuristic) -> Self {
        Self {
            allow_diagonal,
            heuristic,
        }
    }

    /// Set the movement policy (builder).
    #[inline]
    pub const fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }

    /// Set the heuristic (builder).
    #[inline]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = SearchConfig::new(true, Heuristic::Euclidean);
        let json = serde_json::to_string(&c).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}

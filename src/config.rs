use std::fmt;
use std::str::FromStr;

use crate::core::piece::Side;
use crate::search::heuristic::DistanceHeuristic;
use crate::search::strategy::{FirstLegal, Strategy};

/// Which automated player to use for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    FirstLegal,
    Distance,
}

impl StrategyKind {
    pub fn build(self, memory_reset: usize) -> Box<dyn Strategy> {
        match self {
            StrategyKind::FirstLegal => Box::new(FirstLegal),
            StrategyKind::Distance => Box::new(DistanceHeuristic::new(memory_reset)),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" | "first-legal" => Ok(StrategyKind::FirstLegal),
            "distance" => Ok(StrategyKind::Distance),
            other => Err(format!(
                "unknown strategy {other:?} (expected first-legal or distance)"
            )),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::FirstLegal => f.write_str("first-legal"),
            StrategyKind::Distance => f.write_str("distance"),
        }
    }
}

/// Settings for a machine-vs-machine match (pure Rust, no config files).
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Stop after this many plies even if nobody has won.
    pub max_plies: usize,

    /// How often the distance heuristic forgets the moves it already played.
    pub memory_reset: usize,

    pub black: StrategyKind,
    pub white: StrategyKind,
}

impl MatchConfig {
    pub fn new(max_plies: usize) -> Self {
        Self {
            max_plies,
            ..Self::default()
        }
    }

    pub fn with_memory_reset(mut self, every: usize) -> Self {
        self.memory_reset = every;
        self
    }

    pub fn with_strategy(mut self, side: Side, kind: StrategyKind) -> Self {
        match side {
            Side::Black => self.black = kind,
            Side::White => self.white = kind,
        }
        self
    }

    pub fn strategy(&self, side: Side) -> StrategyKind {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            memory_reset: 10,
            black: StrategyKind::Distance,
            white: StrategyKind::Distance,
        }
    }
}

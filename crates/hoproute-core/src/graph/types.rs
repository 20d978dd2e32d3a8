use serde::Serialize;
use std::fmt;

/// Vertex identifier, always inside `[0, N)` for a graph of `N` vertices
pub type Vertex = usize;

/// Edge weight or accumulated path cost.
///
/// Weights accepted into a graph are finite and non-negative, so sums of
/// them are too and the partial order on `f64` is total in practice.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether this value may be used as an edge weight
    pub fn is_valid_weight(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted edge as read from the input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Cost,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, weight: impl Into<Cost>) -> Self {
        Edge {
            from,
            to,
            weight: weight.into(),
        }
    }
}

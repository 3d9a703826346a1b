use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Index of a vertex in the graph's vertex table (insertion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Index of an edge in the graph's edge list (insertion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A labelled vertex. The label is the identity key: two vertices with the
/// same label are the same vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    id: VertexId,
    label: String,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, label: String) -> Self {
        Self { id, label }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Cost of traversing an edge, or an accumulated path cost
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    /// Sentinel for "not reached yet"
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    /// Wrap a raw weight. Negative zero is stored as zero.
    pub fn new(value: f64) -> Self {
        Weight(value + 0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Edge weights must be finite and non-negative for Dijkstra to hold.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Total ordering over weights (NaN sorts last, never produced by a valid graph).
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Weight::new(value)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(f64::from(value))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected weighted edge between two stored vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    id: EdgeId,
    a: VertexId,
    b: VertexId,
    weight: Weight,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, a: VertexId, b: VertexId, weight: Weight) -> Self {
        Self { id, a, b, weight }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Endpoints in insertion order (the order given to `add_edge`)
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// The endpoint opposite `vertex`, or `None` if `vertex` is not on this edge.
    /// A self-loop returns the vertex itself.
    pub fn other_vertex(&self, vertex: VertexId) -> Option<VertexId> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }
}

/// A single edge on a reported path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathLink {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// Path report, serialisable for the CLI output formats
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub vertices: Vec<String>,
    pub links: Vec<PathLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Weight>,
    pub path_length: usize,
}

impl PathResult {
    /// Report for a start/end pair with no connecting path
    pub fn not_found(from: &str, to: &str) -> Self {
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            vertices: Vec::new(),
            links: Vec::new(),
            cost: None,
            path_length: 0,
        }
    }
}

/// Best-known cost from a source vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexDistance {
    pub vertex: String,
    pub cost: Weight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

/// Counters collected during a single solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Vertices finalized (removed from the unvisited set)
    pub settled: usize,
    /// Successful relaxations
    pub relaxed: usize,
    /// Outdated heap entries skipped
    pub stale: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_display_integral() {
        assert_eq!(Weight::from(4).to_string(), "4");
        assert_eq!(Weight::new(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_weight_addition() {
        let sum = Weight::from(2) + Weight::new(3.5);
        assert_eq!(sum.value(), 5.5);
    }

    #[test]
    fn test_weight_validity() {
        assert!(Weight::ZERO.is_valid());
        assert!(Weight::from(7).is_valid());
        assert!(!Weight::new(-1.0).is_valid());
        assert!(!Weight::new(f64::NAN).is_valid());
        assert!(!Weight::INFINITY.is_valid());
    }

    #[test]
    fn test_weight_negative_zero_normalized() {
        let weight = Weight::new(-0.0);
        assert!(weight.is_valid());
        assert!(weight.value().is_sign_positive());
        assert_eq!(weight.to_string(), "0");
        assert_eq!(weight.total_cmp(&Weight::ZERO), Ordering::Equal);
        assert!(Weight::from(-0.0).value().is_sign_positive());
    }

    #[test]
    fn test_weight_total_cmp() {
        assert_eq!(Weight::from(1).total_cmp(&Weight::from(2)), Ordering::Less);
        assert_eq!(
            Weight::INFINITY.total_cmp(&Weight::from(1_000_000)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_edge_other_vertex() {
        let edge = Edge::new(EdgeId(0), VertexId(0), VertexId(1), Weight::from(3));
        assert_eq!(edge.other_vertex(VertexId(0)), Some(VertexId(1)));
        assert_eq!(edge.other_vertex(VertexId(1)), Some(VertexId(0)));
        assert_eq!(edge.other_vertex(VertexId(2)), None);
        assert!(edge.contains_vertex(VertexId(1)));
        assert!(!edge.contains_vertex(VertexId(2)));
    }

    #[test]
    fn test_self_loop_other_vertex() {
        let edge = Edge::new(EdgeId(0), VertexId(4), VertexId(4), Weight::from(1));
        assert_eq!(edge.other_vertex(VertexId(4)), Some(VertexId(4)));
    }
}

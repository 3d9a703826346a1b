use crate::error::{Result, ShortpathError};
use crate::graph::algos::path::{reconstruct_path, Predecessor};
use crate::graph::types::{
    Edge, PathLink, PathResult, SearchStats, Vertex, VertexDistance, VertexId, Weight,
};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by cost, then label)
#[derive(Debug, Clone)]
pub struct HeapEntry<'g> {
    pub vertex: VertexId,
    pub label: &'g str,
    pub cost: Weight,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.label.cmp(other.label))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Per-solve working record for one vertex.
///
/// `cost` only ever decreases until `visited` is set.
#[derive(Debug, Clone)]
pub(crate) struct VertexCost<'g> {
    pub vertex: VertexId,
    pub cost: Weight,
    pub previous: Option<Predecessor<'g>>,
    pub visited: bool,
}

impl VertexCost<'_> {
    fn new(vertex: VertexId) -> Self {
        Self {
            vertex,
            cost: Weight::INFINITY,
            previous: None,
            visited: false,
        }
    }
}

/// Options for a solve
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolverOptions {
    /// Stop expanding once the cheapest unvisited cost exceeds this bound
    pub max_cost: Option<Weight>,
}

/// A shortest path found by the solver, start first and end last
#[derive(Debug, Clone)]
pub struct ShortestPath<'g> {
    pub vertices: Vec<&'g Vertex>,
    /// Edges traversed, `edges[i]` joins `vertices[i]` and `vertices[i + 1]`
    pub edges: Vec<&'g Edge>,
    pub cost: Weight,
    pub stats: SearchStats,
}

impl ShortestPath<'_> {
    pub fn labels(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.label()).collect()
    }

    pub fn links(&self) -> Vec<PathLink> {
        self.vertices
            .windows(2)
            .zip(&self.edges)
            .map(|(pair, edge)| PathLink {
                from: pair[0].label().to_string(),
                to: pair[1].label().to_string(),
                weight: edge.weight(),
            })
            .collect()
    }

    pub fn to_result(&self) -> PathResult {
        let labels = self.labels();
        PathResult {
            from: labels.first().map(|s| s.to_string()).unwrap_or_default(),
            to: labels.last().map(|s| s.to_string()).unwrap_or_default(),
            found: true,
            path_length: self.edges.len(),
            vertices: labels.into_iter().map(String::from).collect(),
            links: self.links(),
            cost: Some(self.cost),
        }
    }
}

/// Dijkstra shortest-path solver over a read-only graph.
///
/// Each call allocates its own working table, so one solver can serve
/// concurrent solves from several threads.
pub struct ShortestPathSolver<'g> {
    provider: &'g (dyn GraphProvider + Sync),
    options: SolverOptions,
}

impl<'g> ShortestPathSolver<'g> {
    pub fn new(provider: &'g (dyn GraphProvider + Sync)) -> Self {
        Self {
            provider,
            options: SolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    fn resolve(&self, label: &str) -> Result<VertexId> {
        self.provider
            .resolve(label)
            .ok_or_else(|| ShortpathError::unknown_vertex(label))
    }

    /// Shortest path from `start` to `end`.
    ///
    /// Returns `Ok(None)` when `end` cannot be reached (or lies beyond
    /// `max_cost`), and `UnknownVertex` when either label is not in the graph.
    #[tracing::instrument(skip(self), fields(max_cost = ?self.options.max_cost))]
    pub fn run(&self, start: &str, end: &str) -> Result<Option<ShortestPath<'g>>> {
        let start_id = self.resolve(start)?;
        let end_id = self.resolve(end)?;

        let (table, stats) = self.search(start_id, Some(end_id));

        let reached = table.get(end_id.index()).filter(|slot| slot.visited);
        let Some(target) = reached else {
            tracing::debug!(settled = stats.settled, relaxed = stats.relaxed, "no_path");
            return Ok(None);
        };

        let (vertices, edges) = reconstruct_path(self.provider, &table, start_id, end_id)
            .ok_or_else(|| {
                ShortpathError::Other(format!("broken predecessor chain from {} to {}", end, start))
            })?;

        tracing::debug!(
            cost = target.cost.value(),
            hops = edges.len(),
            settled = stats.settled,
            relaxed = stats.relaxed,
            stale = stats.stale,
            "path_found"
        );

        Ok(Some(ShortestPath {
            vertices,
            edges,
            cost: target.cost,
            stats,
        }))
    }

    /// Like `run`, but a missing path is reported as `NoPathExists`.
    pub fn find_path(&self, start: &str, end: &str) -> Result<ShortestPath<'g>> {
        self.run(start, end)?
            .ok_or_else(|| ShortpathError::no_path(start, end))
    }

    /// Best cost from `start` to every reachable vertex, ordered by cost then label.
    #[tracing::instrument(skip(self), fields(max_cost = ?self.options.max_cost))]
    pub fn costs_from(&self, start: &str) -> Result<Vec<VertexDistance>> {
        let start_id = self.resolve(start)?;
        let (table, stats) = self.search(start_id, None);

        let label = |id: VertexId| {
            self.provider
                .vertex(id)
                .map(|v| v.label().to_string())
                .unwrap_or_default()
        };

        let mut distances: Vec<VertexDistance> = table
            .iter()
            .filter(|slot| slot.visited)
            .map(|slot| VertexDistance {
                vertex: label(slot.vertex),
                cost: slot.cost,
                previous: slot.previous.as_ref().map(|p| label(p.vertex)),
            })
            .collect();

        distances.sort_by(|a, b| a.cost.total_cmp(&b.cost).then_with(|| a.vertex.cmp(&b.vertex)));

        tracing::debug!(reachable = distances.len(), settled = stats.settled, "costs_from");
        Ok(distances)
    }

    /// Core loop: settle vertices in cost order until the heap drains, the
    /// target is settled, or the cost bound is exceeded.
    fn search(&self, start: VertexId, target: Option<VertexId>) -> (Vec<VertexCost<'g>>, SearchStats) {
        let provider = self.provider;
        let mut stats = SearchStats::default();
        let mut table: Vec<VertexCost<'g>> = (0..provider.vertex_count())
            .map(|i| VertexCost::new(VertexId(i)))
            .collect();
        let mut heap: BinaryHeap<Reverse<HeapEntry<'g>>> = BinaryHeap::new();

        let label_of = move |id: VertexId| provider.vertex(id).map(|v| v.label()).unwrap_or_default();

        if let Some(slot) = table.get_mut(start.index()) {
            slot.cost = Weight::ZERO;
            heap.push(Reverse(HeapEntry {
                vertex: start,
                label: label_of(start),
                cost: Weight::ZERO,
            }));
        }

        while let Some(Reverse(entry)) = heap.pop() {
            let Some(current) = table.get_mut(entry.vertex.index()) else {
                continue;
            };

            // Entries are never removed on decrease-key; skip the outdated ones
            if current.visited || entry.cost.total_cmp(&current.cost) == Ordering::Greater {
                stats.stale += 1;
                continue;
            }

            if let Some(max) = self.options.max_cost {
                if entry.cost.total_cmp(&max) == Ordering::Greater {
                    tracing::trace!(vertex = entry.label, cost = entry.cost.value(), "max_cost");
                    break;
                }
            }

            current.visited = true;
            stats.settled += 1;
            tracing::trace!(vertex = entry.label, cost = entry.cost.value(), "settle");

            if target == Some(entry.vertex) {
                break;
            }

            for edge in provider.incident_edges(entry.vertex) {
                let Some(neighbor) = edge.other_vertex(entry.vertex) else {
                    continue;
                };
                let candidate = entry.cost + edge.weight();

                let Some(slot) = table.get_mut(neighbor.index()) else {
                    continue;
                };
                if slot.visited {
                    continue;
                }
                // A sum can overflow to infinity; the first such route still counts
                let unreached = slot.previous.is_none() && neighbor != start;
                if !unreached && candidate.total_cmp(&slot.cost) != Ordering::Less {
                    continue;
                }

                slot.cost = candidate;
                slot.previous = Some(Predecessor {
                    vertex: entry.vertex,
                    edge,
                });
                stats.relaxed += 1;

                heap.push(Reverse(HeapEntry {
                    vertex: neighbor,
                    label: label_of(neighbor),
                    cost: candidate,
                }));
            }
        }

        (table, stats)
    }
}

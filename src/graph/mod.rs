//! Owned directed graph with integer edge weights.

use std::collections::BTreeMap;
use std::fmt;

mod lattice;

pub use lattice::{LATTICE_EDGES, create_test_graph};

/// Node identifier.
pub type NodeId = u32;

/// Edge weight.
pub type Weight = u32;

/// A directed, weighted edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// Tail of the edge.
	pub source: NodeId,
	/// Head of the edge.
	pub target: NodeId,
	/// Weight carried by the edge.
	pub weight: Weight,
}

/// Directed graph stored as an adjacency map.
///
/// Every node has an entry, even when it has no out-edges. At most one edge
/// exists per ordered `(source, target)` pair; iteration is in ascending id
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
	adjacency: BTreeMap<NodeId, BTreeMap<NodeId, Weight>>,
}

impl Graph {
	/// Creates an empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts an isolated node. Returns `false` if it was already present.
	pub fn add_node(&mut self, id: NodeId) -> bool {
		if self.adjacency.contains_key(&id) {
			return false;
		}
		self.adjacency.insert(id, BTreeMap::new());
		true
	}

	/// Inserts the edge `source -> target`, adding both endpoints if needed.
	///
	/// An existing edge between the same pair has its weight overwritten; the
	/// previous weight is returned in that case.
	pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: Weight) -> Option<Weight> {
		self.add_node(target);
		self.adjacency
			.entry(source)
			.or_default()
			.insert(target, weight)
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.adjacency.len()
	}

	/// Number of directed edges.
	pub fn edge_count(&self) -> usize {
		self.adjacency.values().map(BTreeMap::len).sum()
	}

	/// Whether `id` is a node of the graph.
	pub fn contains_node(&self, id: NodeId) -> bool {
		self.adjacency.contains_key(&id)
	}

	/// Whether the edge `source -> target` exists.
	pub fn contains_edge(&self, source: NodeId, target: NodeId) -> bool {
		self.weight(source, target).is_some()
	}

	/// Weight of the edge `source -> target`, if present.
	pub fn weight(&self, source: NodeId, target: NodeId) -> Option<Weight> {
		self.adjacency.get(&source)?.get(&target).copied()
	}

	/// Node ids in ascending order.
	pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.adjacency.keys().copied()
	}

	/// All edges, ordered by `(source, target)`.
	pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
		self.adjacency.iter().flat_map(|(&source, targets)| {
			targets.iter().map(move |(&target, &weight)| Edge {
				source,
				target,
				weight,
			})
		})
	}

	/// Out-edges of `id` as `(target, weight)` pairs. Empty for unknown nodes.
	pub fn successors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
		self.adjacency
			.get(&id)
			.into_iter()
			.flat_map(|targets| targets.iter().map(|(&t, &w)| (t, w)))
	}
}

impl Extend<(NodeId, NodeId, Weight)> for Graph {
	fn extend<I: IntoIterator<Item = (NodeId, NodeId, Weight)>>(&mut self, iter: I) {
		for (source, target, weight) in iter {
			self.add_edge(source, target, weight);
		}
	}
}

impl FromIterator<(NodeId, NodeId, Weight)> for Graph {
	fn from_iter<I: IntoIterator<Item = (NodeId, NodeId, Weight)>>(iter: I) -> Self {
		let mut graph = Graph::new();
		graph.extend(iter);
		graph
	}
}

impl fmt::Display for Graph {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} nodes, {} edges", self.node_count(), self.edge_count())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add_edge_adds_both_endpoints() {
		let mut graph = Graph::new();
		assert_eq!(graph.add_edge(3, 7, 2), None);
		assert!(graph.contains_node(3));
		assert!(graph.contains_node(7));
		assert_eq!(graph.node_count(), 2);
		assert_eq!(graph.edge_count(), 1);
		assert!(graph.contains_edge(3, 7));
		assert!(!graph.contains_edge(7, 3));
	}

	#[test]
	fn duplicate_edge_overwrites_weight() {
		let mut graph = Graph::new();
		graph.add_edge(0, 1, 2);
		assert_eq!(graph.add_edge(0, 1, 9), Some(2));
		assert_eq!(graph.weight(0, 1), Some(9));
		assert_eq!(graph.edge_count(), 1);
	}

	#[test]
	fn add_node_reports_novelty() {
		let mut graph = Graph::new();
		assert!(graph.add_node(4));
		assert!(!graph.add_node(4));
		assert_eq!(graph.edge_count(), 0);
		assert_eq!(graph.successors(4).count(), 0);
	}

	#[test]
	fn edges_are_ordered_by_source_then_target() {
		let graph: Graph = [(2, 0, 1), (0, 5, 3), (0, 1, 4)].into_iter().collect();
		let pairs: Vec<_> = graph.edges().map(|e| (e.source, e.target)).collect();
		assert_eq!(pairs, vec![(0, 1), (0, 5), (2, 0)]);
		assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![0, 1, 2, 5]);
	}

	#[test]
	fn successors_of_unknown_node_is_empty() {
		let graph: Graph = [(0, 1, 1)].into_iter().collect();
		assert_eq!(graph.successors(42).count(), 0);
		assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![(1, 1)]);
		assert_eq!(graph.weight(42, 0), None);
	}

	#[test]
	fn display_summarises_counts() {
		let graph: Graph = [(0, 1, 1), (1, 2, 1)].into_iter().collect();
		assert_eq!(graph.to_string(), "3 nodes, 2 edges");
	}
}

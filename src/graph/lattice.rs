use super::{Graph, NodeId, Weight};

/// Edges of the 4x4 test lattice as `(source, target, weight)`.
pub const LATTICE_EDGES: [(NodeId, NodeId, Weight); 30] = [
	// rows
	(0, 1, 2),
	(1, 2, 2),
	(2, 3, 3),
	(4, 5, 2),
	(5, 6, 2),
	(6, 7, 3),
	(8, 9, 2),
	(9, 10, 2),
	(10, 11, 3),
	(12, 13, 2),
	(13, 14, 2),
	(14, 15, 3),
	// columns
	(0, 4, 4),
	(1, 5, 4),
	(2, 6, 4),
	(3, 7, 4),
	(4, 8, 4),
	(5, 9, 4),
	(6, 10, 4),
	(7, 11, 4),
	(8, 12, 4),
	(9, 13, 4),
	(10, 14, 4),
	(11, 15, 4),
	// cross edges
	(1, 4, 3),
	(5, 2, 3),
	(6, 9, 3),
	(10, 7, 3),
	(12, 9, 5),
	(13, 10, 5),
];

/// Builds the fixed 16-node test lattice.
pub fn create_test_graph() -> Graph {
	LATTICE_EDGES.into_iter().collect()
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn lattice_has_sixteen_nodes_and_thirty_edges() {
		let graph = create_test_graph();
		assert_eq!(graph.node_count(), 16);
		assert_eq!(graph.edge_count(), 30);
		assert_eq!(graph.nodes().collect::<Vec<_>>(), (0..16).collect::<Vec<_>>());
	}

	#[test]
	fn literal_edges_have_distinct_pairs() {
		let pairs: HashSet<_> = LATTICE_EDGES.iter().map(|&(s, t, _)| (s, t)).collect();
		assert_eq!(pairs.len(), LATTICE_EDGES.len());
	}

	#[test]
	fn weights_come_from_the_literal_set() {
		let graph = create_test_graph();
		for edge in graph.edges() {
			assert!(
				[2, 3, 4, 5].contains(&edge.weight),
				"unexpected weight on {edge:?}"
			);
			assert_ne!(edge.source, edge.target, "self-loop {edge:?}");
		}
	}

	#[test]
	fn spot_check_weights() {
		let graph = create_test_graph();
		assert_eq!(graph.weight(0, 1), Some(2));
		assert_eq!(graph.weight(2, 3), Some(3));
		assert_eq!(graph.weight(12, 9), Some(5));
		assert_eq!(graph.weight(6, 9), Some(3));
		assert_eq!(graph.weight(9, 12), None);
	}

	#[test]
	fn every_literal_triple_is_present() {
		let graph = create_test_graph();
		for (source, target, weight) in LATTICE_EDGES {
			assert_eq!(graph.weight(source, target), Some(weight));
		}
	}

	#[test]
	fn construction_is_deterministic() {
		let first = create_test_graph();
		let second = create_test_graph();
		assert_eq!(first, second);
		assert!(first.edges().eq(second.edges()));
	}
}

use std::collections::BTreeMap;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::LayoutConfig;
use crate::graph::{Graph, NodeId};

const NODE_MASS: f32 = 10.0;

/// A point in figure or simulation space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate, growing downwards on the canvas.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Point halfway between `self` and `other`.
	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

/// Position of every node of a graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	positions: BTreeMap<NodeId, Point>,
}

impl Layout {
	/// Force-directed layout of `graph`.
	///
	/// Nodes start at seeded random positions and are moved by a fixed number
	/// of simulation ticks, so equal inputs always give equal layouts.
	pub fn spring(graph: &Graph, config: &LayoutConfig) -> Self {
		let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
		let mut sim: ForceGraph<NodeId, ()> = ForceGraph::new(SimulationParameters {
			force_charge: config.charge,
			force_spring: config.spring,
			force_max: config.force_max,
			node_speed: config.node_speed,
			damping_factor: config.damping,
		});

		let mut id_to_idx = BTreeMap::new();
		for id in graph.nodes() {
			let (x, y) = (
				rng.gen_range(-1.0f32..1.0) * config.spread,
				rng.gen_range(-1.0f32..1.0) * config.spread,
			);
			let idx = sim.add_node(NodeData {
				x,
				y,
				mass: NODE_MASS,
				is_anchor: false,
				user_data: id,
			});
			id_to_idx.insert(id, idx);
		}

		for edge in graph.edges().filter(|e| e.source != e.target) {
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&edge.source), id_to_idx.get(&edge.target))
			{
				sim.add_edge(src, tgt, EdgeData::default());
			}
		}

		for _ in 0..config.iterations {
			sim.update(config.time_step);
		}

		let mut positions = BTreeMap::new();
		sim.visit_nodes(|node| {
			positions.insert(
				node.data.user_data,
				Point::new(node.x() as f64, node.y() as f64),
			);
		});
		debug!(
			"spring layout: {} nodes, seed {}, {} ticks",
			positions.len(),
			config.seed,
			config.iterations
		);

		Self { positions }
	}

	/// Scales and centres the layout into the rectangle `(x, y, width, height)`.
	///
	/// The aspect ratio is kept. A layout with no extent is placed at the
	/// centre of the rectangle.
	pub fn fit(&self, (x, y, width, height): (f64, f64, f64, f64)) -> Layout {
		let Some(first) = self.positions.values().next() else {
			return Layout::default();
		};
		let (mut min, mut max) = (*first, *first);
		for p in self.positions.values() {
			min.x = min.x.min(p.x);
			min.y = min.y.min(p.y);
			max.x = max.x.max(p.x);
			max.y = max.y.max(p.y);
		}

		let (span_x, span_y) = (max.x - min.x, max.y - min.y);
		let scale = match (span_x > 0.0, span_y > 0.0) {
			(true, true) => (width / span_x).min(height / span_y),
			(true, false) => width / span_x,
			(false, true) => height / span_y,
			(false, false) => 0.0,
		};
		let centre = Point::new(x + width / 2.0, y + height / 2.0);
		let origin = min.midpoint(max);

		let positions = self
			.positions
			.iter()
			.map(|(&id, p)| {
				(
					id,
					Point::new(
						centre.x + (p.x - origin.x) * scale,
						centre.y + (p.y - origin.y) * scale,
					),
				)
			})
			.collect();
		Layout { positions }
	}

	/// Position of node `id`, if it was laid out.
	pub fn position(&self, id: NodeId) -> Option<Point> {
		self.positions.get(&id).copied()
	}

	/// Nodes and positions in ascending id order.
	pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
		self.positions.iter().map(|(&id, &p)| (id, p))
	}

	/// Number of positioned nodes.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// Whether no node was positioned.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}

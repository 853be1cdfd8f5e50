/// Title used when the caller does not provide one.
pub const DEFAULT_TITLE: &str = "Graph";

/// Parameters of the seeded force-directed layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Seed for the initial node placement.
	pub seed: u64,
	/// Number of simulation ticks.
	pub iterations: usize,
	/// Simulated seconds per tick.
	pub time_step: f32,
	/// Half-width of the square the initial positions are drawn from.
	pub spread: f32,
	/// Repulsion between every pair of nodes.
	pub charge: f32,
	/// Attraction along edges.
	pub spring: f32,
	/// Upper bound on the force applied to a node per tick.
	pub force_max: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity damping per tick.
	pub damping: f32,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			seed: 1,
			iterations: 400,
			time_step: 0.016,
			spread: 100.0,
			charge: 150.0,
			spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping: 0.9,
		}
	}
}

/// Look of a rendered figure.
///
/// The defaults give a 6x4 inch figure at 100 dpi with light blue nodes of
/// 800 pt² area.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureConfig {
	/// Canvas width in pixels.
	pub width: u32,
	/// Canvas height in pixels.
	pub height: u32,
	/// Space kept free around the laid-out nodes, below the title band.
	pub margin: f64,
	/// Height of the band the title is drawn in.
	pub title_height: f64,
	/// Fill behind the whole figure.
	pub background: String,
	/// Radius of every node circle.
	pub node_radius: f64,
	/// Fill of the node circles.
	pub node_color: String,
	/// Stroke of edges and fill of arrow heads.
	pub edge_color: String,
	/// Edge line width.
	pub edge_width: f64,
	/// Length of an arrow head.
	pub arrow_size: f64,
	/// Colour of node ids, weights and the title.
	pub label_color: String,
	/// Font of node ids.
	pub label_font: String,
	/// Font of edge weights.
	pub weight_font: String,
	/// Fill of the box behind each weight.
	pub weight_box: String,
	/// Font of the title.
	pub title_font: String,
	/// Layout run before drawing.
	pub layout: LayoutConfig,
}

impl Default for FigureConfig {
	fn default() -> Self {
		Self {
			width: 600,
			height: 400,
			margin: 24.0,
			title_height: 32.0,
			background: "white".into(),
			node_radius: 16.0,
			node_color: "lightblue".into(),
			edge_color: "black".into(),
			edge_width: 1.0,
			arrow_size: 10.0,
			label_color: "black".into(),
			label_font: "12px sans-serif".into(),
			weight_font: "10px sans-serif".into(),
			weight_box: "white".into(),
			title_font: "16px sans-serif".into(),
			layout: LayoutConfig::default(),
		}
	}
}

impl FigureConfig {
	/// Rectangle `(x, y, width, height)` available to node centres.
	pub fn plot_area(&self) -> (f64, f64, f64, f64) {
		let inset = self.margin + self.node_radius;
		let top = self.title_height + inset;
		(
			inset,
			top,
			(self.width as f64 - 2.0 * inset).max(0.0),
			(self.height as f64 - top - inset).max(0.0),
		)
	}
}

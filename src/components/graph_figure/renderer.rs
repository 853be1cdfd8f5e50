use log::info;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::config::{DEFAULT_TITLE, FigureConfig};
use super::error::RenderError;
use super::layout::Layout;
use super::render;
use crate::graph::Graph;

/// Something that can put a graph on screen.
pub trait Renderer {
	/// Draws `graph` with the given title. The graph is only read.
	fn render(&mut self, graph: &Graph, title: &str) -> Result<(), RenderError>;
}

/// Draws graphs into an HTML canvas.
pub struct CanvasRenderer {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	config: FigureConfig,
}

impl CanvasRenderer {
	/// Creates a new figure canvas and appends it to the document body.
	pub fn open(config: FigureConfig) -> Result<Self, RenderError> {
		let document = document()?;
		let body = document.body().ok_or(RenderError::NoDisplay)?;
		let canvas: HtmlCanvasElement = document
			.create_element("canvas")?
			.dyn_into()
			.map_err(|_| RenderError::NoContext)?;
		canvas.set_class_name("graph-figure");
		body.append_child(&canvas)?;
		Self::attach(canvas, config)
	}

	/// Uses an existing canvas, resizing it to the configured figure size.
	pub fn attach(canvas: HtmlCanvasElement, config: FigureConfig) -> Result<Self, RenderError> {
		canvas.set_width(config.width);
		canvas.set_height(config.height);
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(RenderError::NoContext)?
			.dyn_into()
			.map_err(|_| RenderError::NoContext)?;
		Ok(Self {
			canvas,
			ctx,
			config,
		})
	}

	/// Canvas being drawn into.
	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}

	/// Figure settings used for every render.
	pub fn config(&self) -> &FigureConfig {
		&self.config
	}
}

impl Renderer for CanvasRenderer {
	fn render(&mut self, graph: &Graph, title: &str) -> Result<(), RenderError> {
		let layout = Layout::spring(graph, &self.config.layout).fit(self.config.plot_area());
		render::render(graph, &layout, title, &self.config, &self.ctx)?;
		info!("rendered \"{title}\": {graph}");
		Ok(())
	}
}

/// Opens a figure, draws `graph` into it and sets the document title.
///
/// `title` defaults to [`DEFAULT_TITLE`]. Fails with
/// [`RenderError::NoDisplay`] when there is no browser to draw in.
pub fn draw_graph(graph: &Graph, title: Option<&str>) -> Result<(), RenderError> {
	let title = title.unwrap_or(DEFAULT_TITLE);
	let mut renderer = CanvasRenderer::open(FigureConfig::default())?;
	renderer.render(graph, title)?;
	document()?.set_title(title);
	Ok(())
}

#[cfg(target_arch = "wasm32")]
fn document() -> Result<Document, RenderError> {
	web_sys::window()
		.and_then(|window| window.document())
		.ok_or(RenderError::NoDisplay)
}

// wasm-bindgen imports abort outside wasm, so there is never a display here.
#[cfg(not(target_arch = "wasm32"))]
fn document() -> Result<Document, RenderError> {
	Err(RenderError::NoDisplay)
}

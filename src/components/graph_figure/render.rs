use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::FigureConfig;
use super::error::RenderError;
use super::layout::{Layout, Point};
use crate::graph::Graph;

const WEIGHT_BOX_PADDING: f64 = 2.0;
const WEIGHT_BOX_HEIGHT: f64 = 12.0;

/// Paints `graph` at the positions in `layout` onto `ctx`.
pub fn render(
	graph: &Graph,
	layout: &Layout,
	title: &str,
	config: &FigureConfig,
	ctx: &CanvasRenderingContext2d,
) -> Result<(), RenderError> {
	ctx.set_fill_style_str(&config.background);
	ctx.fill_rect(0.0, 0.0, config.width as f64, config.height as f64);
	ctx.save();
	draw_edges(graph, layout, config, ctx);
	draw_nodes(layout, config, ctx)?;
	draw_weights(graph, layout, config, ctx)?;
	draw_title(title, config, ctx)?;
	ctx.restore();
	Ok(())
}

/// Endpoints of an edge clipped to the node circles, or `None` when the
/// nodes overlap.
fn clip(from: Point, to: Point, radius: f64) -> Option<(Point, Point, (f64, f64))> {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist <= 2.0 * radius {
		return None;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	Some((
		Point::new(from.x + ux * radius, from.y + uy * radius),
		Point::new(to.x - ux * radius, to.y - uy * radius),
		(ux, uy),
	))
}

fn draw_edges(graph: &Graph, layout: &Layout, config: &FigureConfig, ctx: &CanvasRenderingContext2d) {
	let arrow = config.arrow_size;
	ctx.set_stroke_style_str(&config.edge_color);
	ctx.set_fill_style_str(&config.edge_color);
	ctx.set_line_width(config.edge_width);

	for edge in graph.edges() {
		let (Some(from), Some(to)) = (layout.position(edge.source), layout.position(edge.target))
		else {
			continue;
		};
		let Some((start, tip, (ux, uy))) = clip(from, to, config.node_radius) else {
			continue;
		};

		let (back_x, back_y) = (tip.x - ux * arrow, tip.y - uy * arrow);
		ctx.begin_path();
		ctx.move_to(start.x, start.y);
		ctx.line_to(back_x, back_y);
		ctx.stroke();

		let (px, py) = (-uy * arrow * 0.4, ux * arrow * 0.4);
		ctx.begin_path();
		ctx.move_to(tip.x, tip.y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(
	layout: &Layout,
	config: &FigureConfig,
	ctx: &CanvasRenderingContext2d,
) -> Result<(), RenderError> {
	ctx.set_font(&config.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for (id, p) in layout.iter() {
		ctx.begin_path();
		ctx.arc(p.x, p.y, config.node_radius, 0.0, 2.0 * PI)?;
		ctx.set_fill_style_str(&config.node_color);
		ctx.fill();

		ctx.set_fill_style_str(&config.label_color);
		ctx.fill_text(&id.to_string(), p.x, p.y)?;
	}
	Ok(())
}

fn draw_weights(
	graph: &Graph,
	layout: &Layout,
	config: &FigureConfig,
	ctx: &CanvasRenderingContext2d,
) -> Result<(), RenderError> {
	ctx.set_font(&config.weight_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for edge in graph.edges() {
		let (Some(from), Some(to)) = (layout.position(edge.source), layout.position(edge.target))
		else {
			continue;
		};
		let mid = from.midpoint(to);
		let label = edge.weight.to_string();
		let width = ctx.measure_text(&label)?.width() + 2.0 * WEIGHT_BOX_PADDING;

		ctx.set_fill_style_str(&config.weight_box);
		ctx.fill_rect(
			mid.x - width / 2.0,
			mid.y - WEIGHT_BOX_HEIGHT / 2.0,
			width,
			WEIGHT_BOX_HEIGHT,
		);
		ctx.set_fill_style_str(&config.label_color);
		ctx.fill_text(&label, mid.x, mid.y)?;
	}
	Ok(())
}

fn draw_title(
	title: &str,
	config: &FigureConfig,
	ctx: &CanvasRenderingContext2d,
) -> Result<(), RenderError> {
	ctx.set_font(&config.title_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(&config.label_color);
	ctx.fill_text(title, config.width as f64 / 2.0, config.title_height / 2.0)?;
	Ok(())
}

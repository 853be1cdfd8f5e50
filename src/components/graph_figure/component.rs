use leptos::prelude::*;
use log::error;

use super::config::FigureConfig;
use super::error::RenderError;
use super::renderer::{CanvasRenderer, Renderer};
use crate::graph::Graph;

/// A static canvas figure of `graph`, drawn once when the canvas mounts.
///
/// A failed draw is raised to the nearest `ErrorBoundary`.
#[component]
pub fn GraphFigure(
	graph: Graph,
	#[prop(into)] title: String,
	#[prop(optional)] config: Option<FigureConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let failure = RwSignal::new(None::<RenderError>);
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let drawn = CanvasRenderer::attach(canvas, config.clone())
			.and_then(|mut renderer| renderer.render(&graph, &title));
		if let Err(err) = drawn {
			error!("failed to draw graph: {err}");
			failure.set(Some(err));
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-figure"
			style="display: block;"
		/>
		{move || failure.get().map_or(Ok(()), Err)}
	}
}

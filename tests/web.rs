//! Browser tests for the canvas renderer.
#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, HtmlElement};
use weighted_graph_canvas::components::graph_figure::{
	CanvasRenderer, DEFAULT_TITLE, FigureConfig, GraphFigure, Renderer, draw_graph,
};
use weighted_graph_canvas::graph::create_test_graph;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

fn host() -> HtmlElement {
	let host: HtmlElement = document().create_element("div").unwrap().dyn_into().unwrap();
	document().body().unwrap().append_child(&host).unwrap();
	host
}

/// Lets pending effects and view updates run.
async fn settle() {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 50)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn mount_figure(host: HtmlElement, config: FigureConfig) {
	let _ = leptos::task::Executor::init_wasm_bindgen();
	let mounted = leptos::mount::mount_to(host, move || {
		view! {
			<ErrorBoundary fallback=|errors| {
				view! {
					<p class="figure-error">
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| e.to_string())
								.collect::<Vec<_>>()
								.join("; ")
						}}
					</p>
				}
			}>
				<GraphFigure graph=create_test_graph() title="Original Graph" config=config.clone() />
			</ErrorBoundary>
		}
	});
	std::mem::forget(mounted);
}

#[wasm_bindgen_test]
fn draw_graph_appends_a_titled_figure() {
	let graph = create_test_graph();
	let before = document().get_elements_by_class_name("graph-figure").length();

	draw_graph(&graph, Some("Original Graph")).unwrap();

	let figures = document().get_elements_by_class_name("graph-figure");
	assert_eq!(figures.length(), before + 1);
	let canvas: HtmlCanvasElement = figures
		.item(figures.length() - 1)
		.unwrap()
		.dyn_into()
		.unwrap();
	let config = FigureConfig::default();
	assert_eq!(canvas.width(), config.width);
	assert_eq!(canvas.height(), config.height);
	assert_eq!(document().title(), "Original Graph");
	assert_eq!(graph, create_test_graph());
}

#[wasm_bindgen_test]
fn draw_graph_defaults_title() {
	draw_graph(&create_test_graph(), None).unwrap();
	assert_eq!(document().title(), DEFAULT_TITLE);
}

#[wasm_bindgen_test]
fn attach_renders_into_detached_canvas() {
	let canvas: HtmlCanvasElement = document()
		.create_element("canvas")
		.unwrap()
		.dyn_into()
		.unwrap();
	let config = FigureConfig {
		width: 320,
		height: 240,
		..FigureConfig::default()
	};
	let mut renderer = CanvasRenderer::attach(canvas, config).unwrap();
	renderer.render(&create_test_graph(), "small").unwrap();
	assert_eq!(renderer.canvas().width(), 320);
	assert_eq!(renderer.canvas().height(), 240);
	assert_eq!(renderer.config().width, 320);
	assert_eq!(renderer.config().layout.seed, 1);
}

#[wasm_bindgen_test]
async fn figure_draws_without_reporting_errors() {
	let host = host();
	mount_figure(host.clone(), FigureConfig::default());
	settle().await;

	assert_eq!(host.get_elements_by_class_name("graph-figure").length(), 1);
	assert_eq!(host.get_elements_by_class_name("figure-error").length(), 0);
}

#[wasm_bindgen_test]
async fn figure_failure_reaches_error_boundary() {
	// canvas arc() rejects a negative radius
	let broken = FigureConfig {
		node_radius: -1.0,
		..FigureConfig::default()
	};
	let host = host();
	mount_figure(host.clone(), broken);
	settle().await;

	let errors = host.get_elements_by_class_name("figure-error");
	assert_eq!(errors.length(), 1);
	let text = errors.item(0).unwrap().text_content().unwrap_or_default();
	assert!(text.contains("canvas error"), "unexpected fallback text: {text:?}");
}

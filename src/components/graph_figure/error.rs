use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure to put a graph on screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
	/// No browser window or document to draw into.
	#[error("no display backend available")]
	NoDisplay,

	/// The canvas did not provide a 2D rendering context.
	#[error("canvas has no 2d rendering context")]
	NoContext,

	/// A canvas or DOM call was rejected by the browser.
	#[error("canvas error: {0}")]
	Canvas(String),
}

impl From<JsValue> for RenderError {
	fn from(value: JsValue) -> Self {
		let message = match value.dyn_ref::<js_sys::Error>() {
			Some(err) => String::from(err.message()),
			None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
		};
		RenderError::Canvas(message)
	}
}

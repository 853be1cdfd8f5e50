//! Static canvas figure of a weighted graph: layout, drawing and the Leptos component.

mod component;
mod config;
mod error;
mod layout;
mod render;
mod renderer;

pub use component::GraphFigure;
pub use config::{DEFAULT_TITLE, FigureConfig, LayoutConfig};
pub use error::RenderError;
pub use layout::{Layout, Point};
pub use renderer::{CanvasRenderer, Renderer, draw_graph};

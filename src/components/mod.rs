//! UI components.

pub mod graph_figure;

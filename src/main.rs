//! Browser entry point.

use weighted_graph_canvas::{App, announce, init_logging};

fn main() {
	init_logging();
	announce();
	leptos::mount::mount_to_body(App);
}

//! Top-level rendering entry point.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI for a pane of `rows` x `cols` to stdout.
///
/// Output is ANSI-positioned; Zellij clears the pane before each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, rows, cols);
}

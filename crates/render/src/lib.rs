//! telemachus-dash-render: Fixed-width text rendering for the instrument panel.
//!
//! Renderers are pure functions from a snapshot to text. They write into
//! any `std::fmt::Write`, so a whole frame can be composed before anything
//! reaches the terminal.

pub mod bar_display;
pub mod panel_layout;
pub mod text_renderer;

pub use bar_display::{bar_cells, render_bar};
pub use panel_layout::{panel_frame, render_panel, PanelRow, NO_SIGNAL, PANEL_LAYOUT};
pub use text_renderer::{
    render_distance, render_duration, render_orientation, render_percent, render_resource,
    render_scalar, render_toggle, scale_distance, ClockParts,
};

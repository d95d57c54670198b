//! Text rendering of the view for the terminal.

pub mod render;
pub mod theme;

pub use render::render_view;
pub use theme::Palette;

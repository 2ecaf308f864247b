//! HTML rendering of inspection records.

pub mod html;
pub mod theme;

pub use html::{escape, render_page, render_table};
pub use theme::Theme;

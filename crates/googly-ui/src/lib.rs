//! Terminal presentation for the googly eye rig.
//!
//! Owns the software rasterizer (an RGBA pixmap implementing the core's
//! drawing-surface contract) and the half-block renderer that puts the
//! pixmap on screen, plus the status bar and screen layout helpers.

pub mod halfblock;
pub mod layout;
pub mod pixmap;
pub mod statusbar;

pub use halfblock::render_pixmap;
pub use layout::{screen_layout, ScreenRects};
pub use pixmap::Pixmap;
pub use statusbar::{render_status, StatusView};

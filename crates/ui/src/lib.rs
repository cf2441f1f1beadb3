//! UI kit for the tracker window.
//!
//! The one component of interest is [`HeaderBar`]; the rest of the crate is
//! the minimal supporting kit it renders with (icons, a ghost button, flex
//! helpers and the theme).

mod button;
mod header_bar;
mod icon;
mod styled;
mod theme;

pub use button::*;
pub use header_bar::*;
pub use icon::*;
pub use styled::*;
pub use theme::*;

use gpui::App;

/// Initialize the theme state. Call once before opening any window.
pub fn init(cx: &mut App) {
    theme::init(cx);
}

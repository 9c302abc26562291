//! Colorize indentation-formatted CLI reports by nesting depth.
//!
//! Feed it text that is already column-aligned (a `describe`-style report,
//! say) and every non-blank line gets a style chosen from its indentation:
//! two spaces per level, levels 0 to 3 each with their own style, anything
//! deeper styled like level 0 since it is almost always a wrapped value.
//! Leading spaces are never touched, so alignment survives.
//!
//! ```
//! let report = "Name:  web-0\nLabels:\n  app=web\n";
//! let colored = indentcolor::colorize(report);
//! print!("{}", colored);
//!
//! assert_eq!(indentcolor::strip_styles(&colored), report);
//! ```
//!
//! Whether to colorize at all (a tty, `NO_COLOR`) is up to the caller;
//! [`colorize`] always does.
#![allow(unknown_lints)]
#[macro_use]
extern crate lazy_static;

#[doc(hidden)]
#[macro_use]
pub mod tlog;
#[doc(hidden)]
#[macro_use]
pub mod tools;
#[doc(hidden)]
pub mod ctime;

pub mod libs;
pub mod palette;
pub mod rcfile;

mod colorize;

pub use colorize::{colorize_line, indent_width, level_of};
pub use libs::colored::RESET;
pub use palette::Palette;

/// Colorize `text` with the default palette.
pub fn colorize(text: &str) -> String {
    colorize::colorize(text)
}

/// Colorize `text` with a custom palette.
pub fn colorize_with(text: &str, palette: &Palette) -> String {
    colorize::colorize_with(text, palette)
}

/// Remove styling from colorized text.
pub fn strip_styles(text: &str) -> std::borrow::Cow<'_, str> {
    libs::re::strip_styles(text)
}

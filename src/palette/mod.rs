//! Output palettes and hex color parsing.

mod error;
mod palette;

pub use error::ParseColorError;
pub use palette::Palette;

//! Dithering output types.

mod indexed;

pub use indexed::IndexedImage;

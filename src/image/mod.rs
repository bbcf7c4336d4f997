//! Pixel buffers and image-level helpers.

mod buffer;
mod gradient;
mod pixel;
mod upscale;

pub use buffer::Image;
pub use gradient::gradient_image;
pub use pixel::Pixel;
pub use upscale::upscale;

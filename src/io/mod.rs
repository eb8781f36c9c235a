//! Image I/O modules
//!
//! Image decoding and the reusable RGBA pixel buffer.

pub mod decoder;
pub mod pixel_buffer;

pub use pixel_buffer::PixelBuffer;

//! Padding transform: re-canvas a buffer to a target fill ratio.
//!
//! Unlike the compositor, padding never rescales the foreground. It only
//! adds a uniform border around the existing pixels so that
//! `long_side / new_size` hits the requested ratio. The original pixel data
//! is copied verbatim, which keeps the operation lossless.

use image::{Rgba, RgbaImage, imageops};

use crate::error::{Error, Result};
use crate::geometry;

/// Wraps `buffer` in a square canvas of `fill` color sized so the original
/// longer side occupies `target_ratio` of the new canvas.
///
/// `new_size = ceil(max(width, height) / target_ratio)`, so the output is
/// always at least as large as the input and the centered offsets are
/// non-negative. The embedded region is pixel-identical to the source; the
/// fill may be fully transparent.
///
/// Fails with [`Error::InvalidRatio`] if `target_ratio` is outside (0, 1].
pub fn pad(buffer: &RgbaImage, target_ratio: f32, fill: Rgba<u8>) -> Result<RgbaImage> {
    if !(target_ratio > 0.0 && target_ratio <= 1.0) {
        return Err(Error::InvalidRatio(target_ratio));
    }

    let (width, height) = buffer.dimensions();
    let long_side = width.max(height);
    let new_size = (long_side as f32 / target_ratio).ceil() as u32;

    let mut canvas = RgbaImage::from_pixel(new_size, new_size, fill);
    let (x, y) = geometry::center_offset(new_size, new_size, width, height);
    imageops::replace(&mut canvas, buffer, x as i64, y as i64);

    Ok(canvas)
}

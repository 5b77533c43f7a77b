//! Geometric primitives: resizing, centering, and alpha-masked pasting.
//!
//! These are the pure building blocks shared by the compositor and the
//! padding transform. All of them produce new buffers except
//! [`paste_with_alpha`], which mutates a destination the caller owns.

use image::{Rgba, RgbaImage, imageops};

use crate::error::{Error, Result};

/// Resizes a buffer to exactly `width` x `height` with Lanczos3 resampling.
///
/// Output is used as a visual brand asset, so a smoothing filter is
/// mandatory; nearest-neighbor and box filtering are not acceptable here.
/// Fails with [`Error::InvalidDimension`] if either dimension is zero.
pub fn resize(src: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(imageops::resize(src, width, height, imageops::FilterType::Lanczos3))
}

/// Shrinks a buffer so its longer side equals `bound`, preserving aspect
/// ratio. Never upscales: a source already within `bound` is returned
/// unchanged (cloned).
pub fn scale_to_fit(src: &RgbaImage, bound: u32) -> Result<RgbaImage> {
    if bound == 0 {
        return Err(Error::InvalidDimension {
            width: bound,
            height: bound,
        });
    }
    let (w, h) = src.dimensions();
    let long_side = w.max(h);
    if long_side <= bound {
        return Ok(src.clone());
    }
    let scale = bound as f32 / long_side as f32;
    let new_w = ((w as f32 * scale).round() as u32).max(1);
    let new_h = ((h as f32 * scale).round() as u32).max(1);
    resize(src, new_w, new_h)
}

/// Computes the top-left offset that centers an `inner` rectangle within an
/// `outer` one, using floor division per axis.
///
/// The floor behavior determines pixel-level centering for odd remainders
/// and must match the offset used when reading the region back out.
pub fn center_offset(outer_w: u32, outer_h: u32, inner_w: u32, inner_h: u32) -> (i32, i32) {
    let x = (outer_w as i32 - inner_w as i32).div_euclid(2);
    let y = (outer_h as i32 - inner_h as i32).div_euclid(2);
    (x, y)
}

/// Pastes `src` onto `dest` at `(x, y)`, using the source alpha channel as
/// the blend mask: every covered destination pixel becomes
/// `lerp(dest, src, src_alpha / 255)` on all four channels.
///
/// Source pixels falling outside the destination bounds are silently
/// clipped; a partial or fully out-of-bounds paste is not an error.
pub fn paste_with_alpha(dest: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    let dest_width = dest.width() as i32;
    let dest_height = dest.height() as i32;

    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let dx = x + sx as i32;
            let dy = y + sy as i32;

            if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
                continue;
            }

            let src_pixel = *src.get_pixel(sx, sy);
            let dst_pixel = *dest.get_pixel(dx as u32, dy as u32);
            dest.put_pixel(dx as u32, dy as u32, lerp_by_alpha(dst_pixel, src_pixel));
        }
    }
}

/// Linear blend of two pixels weighted by the source alpha, with rounding.
fn lerp_by_alpha(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let mask = src[3] as u32;
    let inv = 255 - mask;
    let mix = |d: u8, s: u8| ((d as u32 * inv + s as u32 * mask + 127) / 255) as u8;

    Rgba([
        mix(dst[0], src[0]),
        mix(dst[1], src[1]),
        mix(dst[2], src[2]),
        mix(dst[3], src[3]),
    ])
}

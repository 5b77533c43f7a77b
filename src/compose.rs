//! Compositor: scaled, centered placement of a foreground over a background.
//!
//! Produces the color-backed icon variants. The foreground is shrunk to a
//! fraction of the canvas (never upscaled past its original resolution),
//! pasted centered through its own alpha channel, and optionally clipped to
//! the inscribed circle for "round" launcher variants.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry;

/// Mask applied after compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaskShape {
    /// Keep the full square canvas.
    #[default]
    None,
    /// Clip to the ellipse inscribed in the canvas bounds; corners become
    /// fully transparent.
    Circle,
}

/// Composites `foreground` over a solid `background` color.
///
/// The foreground is scaled so its longer side equals
/// `canvas_size * target_ratio`, preserving aspect ratio. Scaling is
/// shrink-only: a source smaller than the computed target keeps its
/// original resolution rather than being upscaled. The scaled image is
/// pasted centered on a `canvas_size` square filled with `background`,
/// blending through the foreground alpha.
///
/// With [`MaskShape::Circle`] the filled canvas is re-composited onto a
/// fully transparent canvas through the inscribed-circle mask.
///
/// Fails with [`Error::InvalidRatio`] if `target_ratio` is outside (0, 1]
/// and [`Error::InvalidDimension`] if `canvas_size` is zero.
pub fn compose_on_background(
    foreground: &RgbaImage,
    background: Rgba<u8>,
    target_ratio: f32,
    canvas_size: u32,
    mask: MaskShape,
) -> Result<RgbaImage> {
    if !(target_ratio > 0.0 && target_ratio <= 1.0) {
        return Err(Error::InvalidRatio(target_ratio));
    }
    if canvas_size == 0 {
        return Err(Error::InvalidDimension {
            width: canvas_size,
            height: canvas_size,
        });
    }

    let bound = ((canvas_size as f32 * target_ratio) as u32).max(1);
    let scaled = geometry::scale_to_fit(foreground, bound)?;

    let mut canvas = RgbaImage::from_pixel(canvas_size, canvas_size, background);
    let (x, y) = geometry::center_offset(canvas_size, canvas_size, scaled.width(), scaled.height());
    geometry::paste_with_alpha(&mut canvas, &scaled, x, y);

    Ok(match mask {
        MaskShape::None => canvas,
        MaskShape::Circle => apply_circle_mask(&canvas),
    })
}

/// Re-composites `canvas` onto a fully transparent canvas of the same size,
/// keeping only pixels strictly inside the inscribed ellipse.
///
/// Pixel centers are tested against the ellipse equation, so boundary
/// pixels land on whichever side their center falls; edges are hard, not
/// anti-aliased.
pub fn apply_circle_mask(canvas: &RgbaImage) -> RgbaImage {
    let (width, height) = canvas.dimensions();
    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;

    let mut out = RgbaImage::new(width, height);
    for (x, y, pixel) in canvas.enumerate_pixels() {
        let nx = (x as f32 + 0.5 - rx) / rx;
        let ny = (y as f32 + 0.5 - ry) / ry;
        if nx * nx + ny * ny <= 1.0 {
            out.put_pixel(x, y, *pixel);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgba<u8> = Rgba([1, 131, 253, 255]);

    fn white_logo(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn canvas_has_requested_size_and_background() {
        let logo = white_logo(256, 256);
        let out = compose_on_background(&logo, BLUE, 0.6, 512, MaskShape::None).unwrap();

        assert_eq!(out.dimensions(), (512, 512));
        // Corners sit outside the pasted logo region.
        assert_eq!(*out.get_pixel(0, 0), BLUE);
        assert_eq!(*out.get_pixel(511, 511), BLUE);
        // Center is covered by the opaque logo.
        assert_eq!(out.get_pixel(256, 256).0, [255, 255, 255, 255]);
    }

    #[test]
    fn opaque_background_leaves_no_transparent_pixels() {
        let logo = white_logo(100, 60);
        let out = compose_on_background(&logo, BLUE, 0.8, 128, MaskShape::None).unwrap();

        assert!(out.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn foreground_scales_to_ratio_of_canvas() {
        let logo = white_logo(1024, 512);
        let out = compose_on_background(&logo, BLUE, 0.5, 512, MaskShape::None).unwrap();

        // Longer side becomes 256, so the logo spans x in [128, 384) on the
        // center row and the background shows on either side.
        assert_eq!(*out.get_pixel(100, 256), BLUE);
        assert_eq!(out.get_pixel(256, 256).0, [255, 255, 255, 255]);
        assert_eq!(*out.get_pixel(400, 256), BLUE);
    }

    #[test]
    fn small_foreground_is_never_upscaled() {
        let logo = white_logo(10, 10);
        let out = compose_on_background(&logo, BLUE, 0.8, 512, MaskShape::None).unwrap();

        // A 10px logo stays 10px: just outside the centered 10x10 region
        // the canvas is still pure background.
        assert_eq!(out.get_pixel(256, 256).0, [255, 255, 255, 255]);
        assert_eq!(*out.get_pixel(245, 256), BLUE);
        assert_eq!(*out.get_pixel(266, 256), BLUE);
    }

    #[test]
    fn circle_mask_clears_corners_keeps_center() {
        let logo = white_logo(256, 256);
        let out = compose_on_background(&logo, BLUE, 0.6, 512, MaskShape::Circle).unwrap();

        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(511, 0)[3], 0);
        assert_eq!(out.get_pixel(0, 511)[3], 0);
        assert_eq!(out.get_pixel(511, 511)[3], 0);
        assert_eq!(out.get_pixel(256, 256)[3], 255);
        // Edge midpoints lie inside the inscribed circle.
        assert_eq!(out.get_pixel(256, 1)[3], 255);
        assert_eq!(out.get_pixel(1, 256)[3], 255);
    }

    #[test]
    fn invalid_ratio_is_rejected() {
        let logo = white_logo(10, 10);
        assert!(matches!(
            compose_on_background(&logo, BLUE, 0.0, 512, MaskShape::None),
            Err(Error::InvalidRatio(_))
        ));
        assert!(matches!(
            compose_on_background(&logo, BLUE, 1.5, 512, MaskShape::None),
            Err(Error::InvalidRatio(_))
        ));
    }

    #[test]
    fn zero_canvas_is_rejected() {
        let logo = white_logo(10, 10);
        assert!(matches!(
            compose_on_background(&logo, BLUE, 0.6, 0, MaskShape::None),
            Err(Error::InvalidDimension { .. })
        ));
    }
}

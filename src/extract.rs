//! Dominant color extraction.
//!
//! Samples a buffer and picks a representative background color under a
//! caller-supplied domain filter. Color selection must never abort the
//! pipeline, so an empty match yields the configured fallback instead of an
//! error.

use std::cmp::Reverse;
use std::collections::HashMap;

use image::RgbaImage;
use palette::Srgb;

/// The shipped domain filter: pixels whose blue channel strictly dominates
/// both red and green, with blue above 100.
pub fn blue_dominant(r: u8, g: u8, b: u8) -> bool {
    b > r && b > g && b > 100
}

/// Returns the most frequent RGB color among pixels satisfying `predicate`.
///
/// The buffer is flattened to an RGB multiset (alpha is ignored). Ties are
/// broken by first-encountered scan order, so the result is deterministic
/// for a given buffer. If no pixel passes the filter, `fallback` is
/// returned.
pub fn dominant_color<F>(buffer: &RgbaImage, predicate: F, fallback: Srgb<u8>) -> Srgb<u8>
where
    F: Fn(u8, u8, u8) -> bool,
{
    // color -> (occurrences, index of first occurrence)
    let mut counts: HashMap<[u8; 3], (usize, usize)> = HashMap::new();

    for (index, pixel) in buffer.pixels().enumerate() {
        let [r, g, b, _] = pixel.0;
        if !predicate(r, g, b) {
            continue;
        }
        counts.entry([r, g, b]).or_insert((0, index)).0 += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(_, (count, first_seen))| (count, Reverse(first_seen)))
        .map(|([r, g, b], _)| Srgb::new(r, g, b))
        .unwrap_or(fallback)
}

/// Reads the color of the top-left pixel.
///
/// Quick probe for icons that carry a solid background: the corner is
/// outside any centered logo content.
pub fn corner_color(buffer: &RgbaImage) -> Srgb<u8> {
    let pixel = buffer.get_pixel(0, 0);
    Srgb::new(pixel[0], pixel[1], pixel[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn fallback() -> Srgb<u8> {
        Srgb::new(0x00, 0x85, 0xff)
    }

    fn buffer_with(colors: &[([u8; 4], usize)]) -> RgbaImage {
        let total: usize = colors.iter().map(|(_, n)| n).sum();
        let mut img = RgbaImage::new(total as u32, 1);
        let mut x = 0;
        for &(color, n) in colors {
            for _ in 0..n {
                img.put_pixel(x, 0, Rgba(color));
                x += 1;
            }
        }
        img
    }

    #[test]
    fn majority_blue_wins() {
        let img = buffer_with(&[([0, 0, 255, 255], 60), ([255, 0, 0, 255], 40)]);
        let color = dominant_color(&img, blue_dominant, fallback());
        assert_eq!((color.red, color.green, color.blue), (0, 0, 255));
    }

    #[test]
    fn no_match_returns_fallback() {
        let img = buffer_with(&[([255, 0, 0, 255], 100)]);
        let color = dominant_color(&img, blue_dominant, fallback());
        assert_eq!(color, fallback());
    }

    #[test]
    fn most_frequent_shade_wins_among_matches() {
        let img = buffer_with(&[
            ([10, 10, 200, 255], 5),
            ([0, 0, 255, 255], 3),
            ([255, 0, 0, 255], 20),
        ]);
        let color = dominant_color(&img, blue_dominant, fallback());
        assert_eq!((color.red, color.green, color.blue), (10, 10, 200));
    }

    #[test]
    fn tie_breaks_by_scan_order() {
        let img = buffer_with(&[([5, 5, 180, 255], 4), ([9, 9, 220, 255], 4)]);
        let color = dominant_color(&img, blue_dominant, fallback());
        assert_eq!((color.red, color.green, color.blue), (5, 5, 180));
    }

    #[test]
    fn blue_dominant_requires_strict_dominance() {
        assert!(blue_dominant(0, 0, 101));
        assert!(!blue_dominant(0, 0, 100)); // not above threshold
        assert!(!blue_dominant(200, 0, 150)); // red dominates
        assert!(!blue_dominant(0, 150, 150)); // equal green is not strict
    }

    #[test]
    fn corner_color_reads_origin_pixel() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([1, 131, 253, 255]));
        img.put_pixel(2, 2, Rgba([255, 255, 255, 255]));
        assert_eq!(corner_color(&img), Srgb::new(1, 131, 253));
    }
}

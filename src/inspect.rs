//! One-shot inspection utilities.
//!
//! Two small diagnostics that sit next to the composition engine without
//! being part of it: an alpha-channel visualizer for multi-frame ICO
//! containers (sanity-checking that exported icons keep their transparency)
//! and a raw-bytes probe for files suspected of truncation or corruption.

use std::io::Cursor;

use image::RgbaImage;

use crate::error::{Error, Result};
use crate::geometry;

/// Side length of the downsampled alpha grid.
pub const GRID_SIZE: u32 = 32;

/// One decoded ICO frame reduced to an ASCII alpha grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaFrame {
    /// Frame index within the container.
    pub index: usize,
    /// Original frame dimensions.
    pub width: u32,
    pub height: u32,
    /// `GRID_SIZE` rows of `GRID_SIZE` glyphs:
    /// `.` transparent, `#` opaque, `+` in between.
    pub rows: Vec<String>,
}

/// Decodes every frame of an ICO container and renders its alpha channel
/// as a 32x32 ASCII grid.
pub fn visualize_ico_alpha(bytes: &[u8]) -> Result<Vec<AlphaFrame>> {
    let dir = ico::IconDir::read(Cursor::new(bytes))?;

    let mut frames = Vec::with_capacity(dir.entries().len());
    for (index, entry) in dir.entries().iter().enumerate() {
        let decoded = entry.decode()?;
        let (width, height) = (decoded.width(), decoded.height());
        let raster = RgbaImage::from_raw(width, height, decoded.rgba_data().to_vec())
            .ok_or(Error::MalformedFrame(index))?;

        let thumb = geometry::resize(&raster, GRID_SIZE, GRID_SIZE)?;
        let rows = (0..GRID_SIZE)
            .map(|y| {
                (0..GRID_SIZE)
                    .map(|x| alpha_glyph(thumb.get_pixel(x, y)[3]))
                    .collect()
            })
            .collect();

        frames.push(AlphaFrame {
            index,
            width,
            height,
            rows,
        });
    }

    Ok(frames)
}

fn alpha_glyph(alpha: u8) -> char {
    match alpha {
        0..10 => '.',
        241.. => '#',
        _ => '+',
    }
}

/// Raw byte statistics for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProbe {
    pub size: usize,
    /// Count of NUL bytes; nonzero in a text file points at corruption.
    pub nul_bytes: usize,
    /// Whether a `}` appears within the last 100 bytes, a cheap signal
    /// that a brace-delimited file was not cut off mid-write.
    pub has_closing_brace: bool,
    /// The final 20 bytes (fewer for short files).
    pub tail: Vec<u8>,
}

/// Computes raw byte statistics for a file's contents.
pub fn probe_bytes(bytes: &[u8]) -> FileProbe {
    let brace_window = bytes.len().saturating_sub(100);
    let tail_start = bytes.len().saturating_sub(20);

    FileProbe {
        size: bytes.len(),
        nul_bytes: bytes.iter().filter(|b| **b == 0).count(),
        has_closing_brace: bytes[brace_window..].contains(&b'}'),
        tail: bytes[tail_start..].to_vec(),
    }
}

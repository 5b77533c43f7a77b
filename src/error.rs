//! Error types for the composition pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the composition and export engine.
///
/// Geometry and compositing errors are precondition violations and surface
/// to the caller of the pipeline. Export-stage I/O errors are handled
/// per-target so one failed write never prevents sibling targets from being
/// attempted.
#[derive(Debug, Error)]
pub enum Error {
    /// Input bytes are not a valid or supported image.
    #[error("failed to decode image")]
    Decode(#[source] image::ImageError),

    /// The image could not be serialized to the output format.
    #[error("failed to encode image")]
    Encode(#[source] image::ImageError),

    /// A resize or canvas target dimension was zero.
    #[error("invalid target dimension {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A fill or scale ratio outside the half-open range (0, 1].
    #[error("target ratio {0} is outside (0, 1]")]
    InvalidRatio(f32),

    /// A color string that does not parse as `#rrggbb` hex.
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),

    /// A source file that should exist does not.
    #[error("missing input file: {}", .0.display())]
    MissingInput(PathBuf),

    /// An icon container frame whose pixel data does not match its header.
    #[error("icon frame {0} has malformed pixel data")]
    MalformedFrame(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

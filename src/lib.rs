//! icon-foundry: icon asset composition pipeline
//!
//! This crate turns one source logo image into a consistent family of
//! derived icon assets: padded transparent variants, color-composited
//! variants over a solid background, and Android multi-resolution mipmap
//! export sets, plus a diagnostic that visualizes the alpha channel of a
//! multi-frame ICO container.
//!
//! # Example
//!
//! ```
//! use icon_foundry::{compose_on_background, pad, MaskShape, TRANSPARENT};
//! use image::{Rgba, RgbaImage};
//!
//! let logo = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
//!
//! // Transparent padding to a 60% fill ratio.
//! let padded = pad(&logo, 0.6, TRANSPARENT).unwrap();
//! assert_eq!(padded.dimensions(), (107, 107));
//!
//! // Color-backed launcher composition.
//! let icon = compose_on_background(
//!     &logo,
//!     Rgba([1, 131, 253, 255]),
//!     0.6,
//!     512,
//!     MaskShape::None,
//! )
//! .unwrap();
//! assert_eq!(icon.dimensions(), (512, 512));
//! ```
//!
//! # Pipeline
//!
//! For end-to-end runs, [`IconPipeline`] combines the transforms with an
//! [`ImageCodec`] and a [`FileStore`] backend and is driven by a single
//! serializable [`PipelineConfig`]:
//!
//! ```no_run
//! use std::path::Path;
//! use icon_foundry::{IconPipeline, PipelineConfig};
//!
//! let config = PipelineConfig::default().with_res_dir("android/app/src/main/res");
//! let pipeline = IconPipeline::new(config);
//! let summary = pipeline.update_android_icons(Path::new("logo.png")).unwrap();
//! assert!(summary.is_complete());
//! ```

mod codec;
mod color;
mod compose;
mod config;
mod error;
mod export;
mod extract;
mod geometry;
mod inspect;
mod pad;
mod pipeline;

#[cfg(feature = "cli")]
pub mod cli;

pub use codec::{DiskStore, FileStore, ImageCodec, PngCodec};
pub use color::{TRANSPARENT, format_hex, opaque, parse_hex};
pub use compose::{MaskShape, apply_circle_mask, compose_on_background};
pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use export::{
    DensityTier, ExportPlan, ExportSummary, ExportTarget, IconRole, IconVariants,
    default_density_table, export, plan_android_mipmaps,
};
pub use extract::{blue_dominant, corner_color, dominant_color};
pub use geometry::{center_offset, paste_with_alpha, resize, scale_to_fit};
pub use inspect::{AlphaFrame, FileProbe, GRID_SIZE, probe_bytes, visualize_ico_alpha};
pub use pad::pad;
pub use pipeline::IconPipeline;

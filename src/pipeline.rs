//! The composition pipeline engine.
//!
//! `IconPipeline` ties the pure transforms to the codec and store seams:
//! load a source buffer, derive or look up the background color, build the
//! processed variants, and fan them out to the export plan. Each run is
//! self-contained; the engine holds no mutable state between operations.

use std::path::Path;

use image::RgbaImage;
use palette::Srgb;

use crate::codec::{DiskStore, FileStore, ImageCodec, PngCodec};
use crate::color;
use crate::compose::{self, MaskShape};
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::export::{self, ExportSummary, IconVariants};
use crate::extract;
use crate::pad;

/// Composition and export engine over an [`ImageCodec`] and a [`FileStore`].
pub struct IconPipeline<C = PngCodec, S = DiskStore> {
    config: PipelineConfig,
    codec: C,
    store: S,
}

impl IconPipeline {
    /// Creates a pipeline over the PNG codec and the real filesystem.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_backends(config, PngCodec, DiskStore)
    }
}

impl<C, S> IconPipeline<C, S>
where
    C: ImageCodec,
    S: FileStore,
{
    /// Creates a pipeline with explicit codec and store backends.
    pub fn with_backends(config: PipelineConfig, codec: C, store: S) -> Self {
        Self {
            config,
            codec,
            store,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Whether the store has a file at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        self.store.exists(path)
    }

    /// Loads and decodes a source buffer.
    ///
    /// Fails with [`Error::MissingInput`] before touching the codec when
    /// the file does not exist, so callers can report it gracefully.
    pub fn load(&self, path: &Path) -> Result<RgbaImage> {
        if !self.store.exists(path) {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let bytes = self.store.read(path)?;
        self.codec.decode(&bytes)
    }

    /// Encodes and writes a buffer, creating parent directories as needed.
    pub fn save(&self, image: &RgbaImage, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.store.make_dirs(parent)?;
            }
        }
        let bytes = self.codec.encode(image)?;
        self.store.write(path, &bytes)
    }

    /// The background color for composited variants: the configured color,
    /// or the dominant blue of the source with the configured fallback.
    pub fn background_for(&self, source: &RgbaImage) -> Srgb<u8> {
        self.config.background_color.unwrap_or_else(|| {
            extract::dominant_color(source, extract::blue_dominant, self.config.fallback_color)
        })
    }

    /// Pads a source image with transparent border to the configured fill
    /// ratio and writes the result.
    pub fn pad_icon(&self, input: &Path, output: &Path) -> Result<()> {
        let source = self.load(input)?;
        let padded = pad::pad(&source, self.config.target_ratio, color::TRANSPARENT)?;
        log::info!(
            "padded {} to {}x{}",
            input.display(),
            padded.width(),
            padded.height()
        );
        self.save(&padded, output)
    }

    /// Composites a source over the background color on the configured
    /// canvas and writes the result.
    pub fn compose_icon(&self, input: &Path, output: &Path, mask: MaskShape) -> Result<()> {
        let source = self.load(input)?;
        let background = color::opaque(self.background_for(&source));
        let composed = compose::compose_on_background(
            &source,
            background,
            self.config.target_ratio,
            self.config.canvas_size,
            mask,
        )?;
        self.save(&composed, output)
    }

    /// Builds the three processed launcher variants from one source buffer.
    ///
    /// Foreground and legacy share the square composition; round applies
    /// the circle mask on top of the same composition.
    pub fn build_variants(&self, source: &RgbaImage) -> Result<IconVariants> {
        let background = color::opaque(self.background_for(source));
        let square = compose::compose_on_background(
            source,
            background,
            self.config.target_ratio,
            self.config.canvas_size,
            MaskShape::None,
        )?;
        let round = compose::apply_circle_mask(&square);

        Ok(IconVariants {
            foreground: square.clone(),
            legacy: square,
            round,
        })
    }

    /// Regenerates the full Android mipmap set from a source logo.
    ///
    /// Loads the source, builds the variants, and writes every tier/role
    /// target under the configured resource tree. Per-target write failures
    /// are collected in the summary and do not abort the run.
    pub fn update_android_icons(&self, source_path: &Path) -> Result<ExportSummary> {
        let source = self.load(source_path)?;
        let variants = self.build_variants(&source)?;
        let plan =
            export::plan_android_mipmaps(&self.config.res_dir, &self.config.density_table);
        Ok(export::export(&plan, &variants, &self.codec, &self.store))
    }
}

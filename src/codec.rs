//! External collaborator seams: image codec and file store.
//!
//! The engine never touches encoded bytes or the filesystem directly; it
//! goes through these traits so tests can run fully in memory and callers
//! can substitute their own backends.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Decodes and encodes raster buffers.
pub trait ImageCodec {
    /// Decodes encoded image bytes into an RGBA buffer.
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage>;

    /// Encodes an RGBA buffer into the codec's output format.
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>>;
}

/// PNG codec backed by the `image` crate.
///
/// PNG is lossless: encoding then decoding any buffer reproduces its pixel
/// values exactly, which the export round-trip relies on.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage> {
        let img = image::load_from_memory(bytes).map_err(Error::Decode)?;
        Ok(img.to_rgba8())
    }

    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, ImageFormat::Png)
            .map_err(Error::Encode)?;
        Ok(out.into_inner())
    }
}

/// Filesystem operations used by the pipeline.
pub trait FileStore {
    fn exists(&self, path: &Path) -> bool;

    /// Creates a directory and all missing parents. Creating an existing
    /// directory is a no-op, not an error.
    fn make_dirs(&self, path: &Path) -> Result<()>;

    fn copy(&self, src: &Path, dst: &Path) -> Result<()>;

    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Writes `bytes` to `path`, overwriting unconditionally.
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// File store backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn make_dirs(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn copy(&self, src: &Path, dst: &Path) -> Result<()> {
        fs::copy(src, dst)?;
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(fs::read(path)?)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes)?;
        Ok(())
    }
}

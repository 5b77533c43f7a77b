//! Export planning: mapping processed variants to Android mipmap targets.
//!
//! A plan is the full list of (directory, filename, size) outputs for one
//! run: every density tier crossed with the three launcher roles. Writing
//! the plan treats each target as an independent unit of work; a failed
//! write is recorded and logged, and the remaining targets are still
//! attempted.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::codec::{FileStore, ImageCodec};
use crate::error::{Error, Result};
use crate::geometry;

/// The three Android launcher asset kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconRole {
    /// Adaptive icon foreground layer.
    Foreground,
    /// Legacy square launcher icon.
    Legacy,
    /// Round launcher icon (circle-masked).
    Round,
}

impl IconRole {
    pub const ALL: [IconRole; 3] = [IconRole::Foreground, IconRole::Legacy, IconRole::Round];

    /// The fixed output filename for this role.
    pub fn filename(self) -> &'static str {
        match self {
            IconRole::Foreground => "ic_launcher_foreground.png",
            IconRole::Legacy => "ic_launcher.png",
            IconRole::Round => "ic_launcher_round.png",
        }
    }
}

/// A named density bucket with the pixel size applied to all roles in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityTier {
    pub name: String,
    pub size: u32,
}

impl DensityTier {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// The standard five-tier table: adaptive-icon base 108px scaled by the
/// platform density multipliers.
pub fn default_density_table() -> Vec<DensityTier> {
    vec![
        DensityTier::new("mdpi", 108),
        DensityTier::new("hdpi", 162),
        DensityTier::new("xhdpi", 216),
        DensityTier::new("xxhdpi", 324),
        DensityTier::new("xxxhdpi", 432),
    ]
}

/// One planned output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub role: IconRole,
    pub directory: PathBuf,
    pub filename: &'static str,
    pub size: u32,
}

impl ExportTarget {
    /// Full output path (`directory/filename`).
    pub fn path(&self) -> PathBuf {
        self.directory.join(self.filename)
    }
}

/// The complete target list for one export run.
#[derive(Debug, Clone, Default)]
pub struct ExportPlan {
    pub targets: Vec<ExportTarget>,
}

impl ExportPlan {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// The processed buffers feeding an export run, one per role.
#[derive(Debug, Clone)]
pub struct IconVariants {
    pub foreground: RgbaImage,
    pub legacy: RgbaImage,
    pub round: RgbaImage,
}

impl IconVariants {
    /// The variant backing a given role.
    pub fn for_role(&self, role: IconRole) -> &RgbaImage {
        match role {
            IconRole::Foreground => &self.foreground,
            IconRole::Legacy => &self.legacy,
            IconRole::Round => &self.round,
        }
    }
}

/// Maps the density table to the full mipmap target set under `res_dir`:
/// one `mipmap-<tier>` directory per tier, three role files each.
pub fn plan_android_mipmaps(res_dir: &Path, tiers: &[DensityTier]) -> ExportPlan {
    let mut targets = Vec::with_capacity(tiers.len() * IconRole::ALL.len());
    for tier in tiers {
        let directory = res_dir.join(format!("mipmap-{}", tier.name));
        for role in IconRole::ALL {
            targets.push(ExportTarget {
                role,
                directory: directory.clone(),
                filename: role.filename(),
                size: tier.size,
            });
        }
    }
    ExportPlan { targets }
}

/// Outcome of an export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, Error)>,
}

impl ExportSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes every target in `plan`: resize the role's variant to the tier
/// size, encode, create the directory (idempotent), and overwrite the file.
///
/// Targets are independent; a failure is logged and recorded in the summary
/// without rolling back or skipping siblings.
pub fn export<C, S>(
    plan: &ExportPlan,
    variants: &IconVariants,
    codec: &C,
    store: &S,
) -> ExportSummary
where
    C: ImageCodec,
    S: FileStore,
{
    let mut summary = ExportSummary::default();

    for target in &plan.targets {
        match write_target(target, variants, codec, store) {
            Ok(path) => {
                log::info!("wrote {} ({}x{})", path.display(), target.size, target.size);
                summary.written.push(path);
            }
            Err(err) => {
                log::warn!("failed to write {}: {err}", target.path().display());
                summary.failed.push((target.path(), err));
            }
        }
    }

    summary
}

fn write_target<C, S>(
    target: &ExportTarget,
    variants: &IconVariants,
    codec: &C,
    store: &S,
) -> Result<PathBuf>
where
    C: ImageCodec,
    S: FileStore,
{
    let resized = geometry::resize(variants.for_role(target.role), target.size, target.size)?;
    let bytes = codec.encode(&resized)?;
    store.make_dirs(&target.directory)?;
    let path = target.path();
    store.write(&path, &bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::testing::MemoryStore;
    use crate::codec::PngCodec;
    use image::Rgba;
    use std::collections::HashSet;

    fn variants() -> IconVariants {
        let base = RgbaImage::from_pixel(64, 64, Rgba([1, 131, 253, 255]));
        IconVariants {
            foreground: base.clone(),
            legacy: base.clone(),
            round: base,
        }
    }

    #[test]
    fn five_tiers_three_roles_fifteen_unique_targets() {
        let plan = plan_android_mipmaps(Path::new("res"), &default_density_table());

        assert_eq!(plan.len(), 15);

        let unique: HashSet<_> = plan
            .targets
            .iter()
            .map(|t| (t.directory.clone(), t.filename))
            .collect();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn plan_uses_mipmap_directory_convention() {
        let plan = plan_android_mipmaps(Path::new("res"), &[DensityTier::new("hdpi", 162)]);

        assert_eq!(plan.len(), 3);
        for target in &plan.targets {
            assert_eq!(target.directory, Path::new("res").join("mipmap-hdpi"));
            assert_eq!(target.size, 162);
        }
        let names: Vec<_> = plan.targets.iter().map(|t| t.filename).collect();
        assert_eq!(
            names,
            vec![
                "ic_launcher_foreground.png",
                "ic_launcher.png",
                "ic_launcher_round.png"
            ]
        );
    }

    #[test]
    fn export_writes_every_target_at_tier_size() {
        let store = MemoryStore::new();
        let codec = PngCodec;
        let plan = plan_android_mipmaps(Path::new("res"), &default_density_table());

        let summary = export(&plan, &variants(), &codec, &store);

        assert!(summary.is_complete());
        assert_eq!(summary.written.len(), 15);
        assert_eq!(store.file_count(), 15);
        assert!(store.has_dir(Path::new("res/mipmap-xxxhdpi")));

        let bytes = store
            .get(&Path::new("res/mipmap-mdpi").join("ic_launcher.png"))
            .unwrap();
        let decoded = codec.decode(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (108, 108));
    }

    #[test]
    fn failed_target_does_not_block_siblings() {
        let poisoned = Path::new("res/mipmap-hdpi").join("ic_launcher.png");
        let store = MemoryStore::deny_write(poisoned.clone());
        let plan = plan_android_mipmaps(Path::new("res"), &default_density_table());

        let summary = export(&plan, &variants(), &PngCodec, &store);

        assert_eq!(summary.written.len(), 14);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, poisoned);
        assert_eq!(store.file_count(), 14);
    }

    #[test]
    fn export_overwrites_existing_files() {
        let store = MemoryStore::new();
        let plan = plan_android_mipmaps(Path::new("res"), &[DensityTier::new("mdpi", 48)]);
        let stale = plan.targets[0].path();
        store.insert(stale.clone(), vec![0xde, 0xad]);

        export(&plan, &variants(), &PngCodec, &store);

        assert_ne!(store.get(&stale).unwrap(), vec![0xde, 0xad]);
    }
}

//! Command-line surface over the pipeline.
//!
//! Thin wrappers only: each subcommand loads, runs one engine operation,
//! and prints a status line per output. A missing input file is reported
//! and the command returns cleanly instead of failing the process, so a
//! scripted batch keeps going.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::codec::FileStore;
use crate::color;
use crate::compose::MaskShape;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extract;
use crate::inspect;
use crate::pipeline::IconPipeline;

#[derive(Debug, Parser)]
#[command(name = "icon-foundry", version, about = "Icon asset composition pipeline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wrap an icon in transparent padding at a target fill ratio.
    Pad {
        input: PathBuf,
        output: PathBuf,
        /// Fraction of the padded canvas the icon should occupy.
        #[arg(long, default_value_t = 0.6)]
        ratio: f32,
    },
    /// Composite an icon over a solid background color.
    Compose {
        input: PathBuf,
        output: PathBuf,
        /// Background hex color; omit to extract it from the source.
        #[arg(long)]
        background: Option<String>,
        #[arg(long, default_value_t = 0.6)]
        ratio: f32,
        /// Canvas edge in pixels.
        #[arg(long, default_value_t = 512)]
        size: u32,
        /// Clip to the inscribed circle (round launcher variant).
        #[arg(long)]
        round: bool,
    },
    /// Regenerate the Android launcher mipmap set from a source logo.
    Android {
        source: PathBuf,
        /// Android resource tree root the mipmap directories live under.
        #[arg(long, default_value = "android/app/src/main/res")]
        res_dir: PathBuf,
        #[arg(long)]
        background: Option<String>,
        #[arg(long, default_value_t = 0.55)]
        ratio: f32,
        #[arg(long, default_value_t = 512)]
        size: u32,
    },
    /// Print the dominant background color of an image.
    Color { input: PathBuf },
    /// Print ASCII alpha-channel art for every frame of an ICO file.
    Inspect { input: PathBuf },
    /// Report raw byte statistics for files.
    Probe { files: Vec<PathBuf> },
}

/// Runs one parsed command to completion.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Pad {
            input,
            output,
            ratio,
        } => {
            let config = PipelineConfig::default().with_target_ratio(ratio);
            let pipeline = IconPipeline::new(config);
            if report_missing(&pipeline, &input) {
                return Ok(());
            }
            pipeline.pad_icon(&input, &output)?;
            println!("Padded icon saved to {}", output.display());
            Ok(())
        }
        Command::Compose {
            input,
            output,
            background,
            ratio,
            size,
            round,
        } => {
            let config = compose_config(background.as_deref(), ratio, size)?;
            let pipeline = IconPipeline::new(config);
            if report_missing(&pipeline, &input) {
                return Ok(());
            }
            let mask = if round {
                MaskShape::Circle
            } else {
                MaskShape::None
            };
            pipeline.compose_icon(&input, &output, mask)?;
            println!("Composed icon saved to {}", output.display());
            Ok(())
        }
        Command::Android {
            source,
            res_dir,
            background,
            ratio,
            size,
        } => {
            let config = compose_config(background.as_deref(), ratio, size)?.with_res_dir(res_dir);
            let pipeline = IconPipeline::new(config);
            if report_missing(&pipeline, &source) {
                return Ok(());
            }
            let summary = pipeline.update_android_icons(&source)?;
            for path in &summary.written {
                println!("Updated {}", path.display());
            }
            for (path, err) in &summary.failed {
                println!("Failed {}: {err}", path.display());
            }
            Ok(())
        }
        Command::Color { input } => {
            let pipeline = IconPipeline::new(PipelineConfig::default());
            if report_missing(&pipeline, &input) {
                return Ok(());
            }
            let image = pipeline.load(&input)?;
            println!("BG_COLOR:{}", color::format_hex(extract::corner_color(&image)));
            Ok(())
        }
        Command::Inspect { input } => {
            if !input.exists() {
                println!("Error: {} not found!", input.display());
                return Ok(());
            }
            let bytes = std::fs::read(&input)?;
            for frame in inspect::visualize_ico_alpha(&bytes)? {
                println!(
                    "--- Frame {} size={}x{} ---",
                    frame.index, frame.width, frame.height
                );
                for row in &frame.rows {
                    println!("{row}");
                }
            }
            Ok(())
        }
        Command::Probe { files } => {
            for path in files {
                if !path.exists() {
                    println!("File not found: {}", path.display());
                    continue;
                }
                let bytes = std::fs::read(&path)?;
                let probe = inspect::probe_bytes(&bytes);
                println!("File: {}", path.display());
                println!("  Size: {} bytes", probe.size);
                println!("  Null bytes: {}", probe.nul_bytes);
                println!("  Has closing brace near end: {}", probe.has_closing_brace);
                println!("  Last 20 bytes: {:?}", probe.tail);
            }
            Ok(())
        }
    }
}

fn compose_config(background: Option<&str>, ratio: f32, size: u32) -> Result<PipelineConfig> {
    let mut config = PipelineConfig::default()
        .with_target_ratio(ratio)
        .with_canvas_size(size);
    config.background_color = match background {
        Some(hex) => Some(color::parse_hex(hex)?),
        None => None,
    };
    Ok(config)
}

/// Prints the "log and continue" line for an absent input. Returns true if
/// the caller should bail out without an error.
fn report_missing<C, S>(pipeline: &IconPipeline<C, S>, input: &Path) -> bool
where
    C: crate::codec::ImageCodec,
    S: FileStore,
{
    if pipeline.exists(input) {
        false
    } else {
        println!("Error: {} not found!", input.display());
        true
    }
}

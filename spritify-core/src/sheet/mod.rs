//! Sprite-sheet composition via the external montage tool.

pub mod geometry;
pub mod partition;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::export::{self, SheetMeta};
use crate::frames;
use crate::tools::{self, Tool};

/// One produced sprite-sheet file.
#[derive(Debug, Clone)]
pub struct SheetArtifact {
    pub path: PathBuf,
    pub frames: usize,
    pub view_suffix: String,
}

/// Tile the rendered frames into one sheet per batch and view suffix.
///
/// The montage exit status is logged but never trusted (the tool reports
/// nonzero even on success); a batch succeeds iff its output file exists
/// afterwards.
pub fn compose_sheets(config: &Config) -> Result<Vec<SheetArtifact>> {
    let montage = tools::resolve(Tool::Montage, &config.sheet.magick_dir)?;
    let tile = geometry::tile_setting(config.sheet.layout, config.sheet.tiles);
    let (width, height) = geometry::effective_resolution(&config.render);
    let geom = geometry::geometry_string(
        width,
        height,
        config.sheet.offset_x,
        config.sheet.offset_y,
    );
    let background = geometry::background_string(config.sheet.bg_color);

    if config.sheet.filepath.exists() {
        fs::remove_file(&config.sheet.filepath)?;
    }

    let mut artifacts = Vec::new();
    for suffix in config.view_suffixes() {
        let frames = frames::collect_frames(&config.render.render_dir, &suffix)?;
        let batches = partition::partition(&frames, config.sheet.files)?;
        let mut sheets = Vec::new();
        for batch in &batches {
            let out = output_path(
                &config.sheet.filepath,
                config.sheet.files,
                batch.index,
                &suffix,
            );
            run_montage(
                &montage,
                &tile,
                &geom,
                &background,
                config.sheet.quality,
                batch.frames,
                &out,
            )?;
            sheets.push(out.clone());
            artifacts.push(SheetArtifact {
                path: out,
                frames: batch.frames.len(),
                view_suffix: suffix.clone(),
            });
        }
        let meta = SheetMeta {
            tile: tile.clone(),
            geometry: geom.clone(),
            frames: frames.len(),
            sheets,
        };
        export::write_sidecar(&config.sheet.filepath, &suffix, &meta)?;
    }
    Ok(artifacts)
}

/// Output path for one batch: `{stem}-{index}-{suffix}.png` when splitting
/// into several files, `{stem}{suffix}.png` otherwise.
pub fn output_path(base: &Path, files: u32, index: usize, suffix: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sprites");
    let ext = base.extension().and_then(|s| s.to_str()).unwrap_or("png");
    let name = if files > 1 {
        format!("{stem}-{index}-{suffix}.{ext}")
    } else {
        format!("{stem}{suffix}.{ext}")
    };
    base.with_file_name(name)
}

/// montage only accepts 0-100; out-of-range config values are clamped.
fn quality_arg(quality: u8) -> String {
    quality.min(100).to_string()
}

fn run_montage(
    bin: &Path,
    tile: &str,
    geometry: &str,
    background: &str,
    quality: u8,
    frames: &[PathBuf],
    out: &Path,
) -> Result<()> {
    let mut cmd = Command::new(bin);
    cmd.arg("-depth")
        .arg("8")
        .arg("-tile")
        .arg(tile)
        .arg("-geometry")
        .arg(geometry)
        .arg("-background")
        .arg(background)
        .arg("-quality")
        .arg(quality_arg(quality));
    for frame in frames {
        cmd.arg(frame);
    }
    cmd.arg(out);

    log::info!(
        "montage: {} frame(s) -> {} (tile {tile}, geometry {geometry})",
        frames.len(),
        out.display()
    );
    let output = cmd.output()?;
    log::debug!("montage exit status: {}", output.status);
    if !out.is_file() {
        log::warn!(
            "montage stderr: {}",
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
        return Err(Error::CompositionFailed {
            path: out.to_path_buf(),
        });
    }
    Ok(())
}

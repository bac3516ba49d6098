//! Animated GIF assembly via the external convert tool.
//!
//! Frames are staged into a scratch subdirectory first so that stray PNGs
//! sharing the render directory never end up in the animation; the convert
//! call gets the staged file list verbatim rather than a glob.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::frames;
use crate::tools::{self, Tool};

const SCRATCH_DIR: &str = "gif-frames";

#[derive(Debug, Clone)]
pub struct GifArtifact {
    pub path: PathBuf,
    pub frames: usize,
}

/// Assemble every rendered frame into one animated GIF next to the sheet
/// path, looping forever at the render frame rate.
pub fn assemble_gif(config: &Config) -> Result<GifArtifact> {
    let convert = tools::resolve(Tool::Convert, &config.sheet.magick_dir)?;

    let gif_path = config.sheet.filepath.with_extension("gif");
    if gif_path.exists() {
        fs::remove_file(&gif_path)?;
    }

    let render_dir = &config.render.render_dir;
    if !render_dir.is_dir() {
        return Err(Error::MissingGifSource {
            path: render_dir.clone(),
        });
    }

    let scratch = render_dir.join(SCRATCH_DIR);
    let staged = stage_frames(render_dir, &scratch)?;

    let mut cmd = Command::new(&convert);
    cmd.arg("-delay")
        .arg(format!("1x{}", config.render.fps))
        .arg("-dispose")
        .arg("background")
        .arg("-loop")
        .arg("0");
    for frame in &staged {
        cmd.arg(frame);
    }
    cmd.arg(&gif_path);

    log::info!(
        "convert: {} frame(s) -> {} at 1x{} delay",
        staged.len(),
        gif_path.display(),
        config.render.fps
    );
    let output = cmd.output()?;
    log::debug!("convert exit status: {}", output.status);
    if !gif_path.is_file() {
        log::warn!(
            "convert stderr: {}",
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
        return Err(Error::CompositionFailed { path: gif_path });
    }
    Ok(GifArtifact {
        path: gif_path,
        frames: staged.len(),
    })
}

/// Stage the PNG frames for GIF assembly. A fresh render (frames outside
/// the scratch dir) rebuilds the scratch dir from it; when there is nothing
/// new to stage, frames moved into the scratch dir by a previous run are
/// reused as-is, so repeat runs never lose them. Returns the staged paths
/// in frame order.
pub fn stage_frames(render_dir: &Path, scratch: &Path) -> Result<Vec<PathBuf>> {
    let fresh = frames::scan_frames(render_dir, "", Some(scratch))?;
    let mut staged = Vec::with_capacity(fresh.len());
    if !fresh.is_empty() {
        if scratch.exists() {
            fs::remove_dir_all(scratch)?;
        }
        fs::create_dir_all(scratch)?;
        if !scratch.is_dir() {
            return Err(Error::MissingScratch {
                dir: scratch.to_path_buf(),
            });
        }
        for src in &fresh {
            let dest = scratch.join(staged_name(render_dir, src));
            if dest.exists() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    format!("staging collision on {}", dest.display()),
                )
                .into());
            }
            // rename fails across filesystems; fall back to copy + remove
            if fs::rename(src, &dest).is_err() {
                fs::copy(src, &dest)?;
                fs::remove_file(src)?;
            }
            staged.push(dest);
        }
    } else if scratch.is_dir() {
        staged = frames::scan_frames(scratch, "", None)?;
    }
    if staged.is_empty() {
        return Err(Error::NoFramesFound {
            dir: render_dir.to_path_buf(),
        });
    }
    staged.sort();
    Ok(staged)
}

/// Flatten the frame's path relative to the render dir into one file name,
/// so same-named frames from different subdirectories keep distinct
/// destinations in the scratch dir.
fn staged_name(render_dir: &Path, src: &Path) -> String {
    let rel = src.strip_prefix(render_dir).unwrap_or(src);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"png").unwrap();
    }

    #[test]
    fn staging_moves_frames_into_scratch() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "frame0001.png");
        touch(tmp.path(), "frame0002.png");
        touch(tmp.path(), "reference.txt");

        let scratch = tmp.path().join(SCRATCH_DIR);
        let staged = stage_frames(tmp.path(), &scratch).unwrap();

        assert_eq!(staged.len(), 2);
        assert!(staged.iter().all(|p| p.starts_with(&scratch) && p.is_file()));
        assert!(!tmp.path().join("frame0001.png").exists());
        assert!(tmp.path().join("reference.txt").exists());
    }

    #[test]
    fn staging_is_recreated_on_each_run() {
        let tmp = tempfile::tempdir().unwrap();
        let scratch = tmp.path().join(SCRATCH_DIR);
        fs::create_dir(&scratch).unwrap();
        touch(&scratch, "stale.png");
        touch(tmp.path(), "frame0001.png");

        let staged = stage_frames(tmp.path(), &scratch).unwrap();
        let names: Vec<_> = staged
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["frame0001.png"]);
        assert!(!scratch.join("stale.png").exists());
    }

    #[test]
    fn restaging_reuses_frames_from_a_previous_run() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "frame0001.png");
        touch(tmp.path(), "frame0002.png");
        let scratch = tmp.path().join(SCRATCH_DIR);

        let first = stage_frames(tmp.path(), &scratch).unwrap();
        assert_eq!(first.len(), 2);

        // Frames now live only in the scratch dir; a second run must keep
        // them instead of wiping the dir and reporting no frames.
        let second = stage_frames(tmp.path(), &scratch).unwrap();
        assert_eq!(second, first);
        assert!(second.iter().all(|p| p.is_file()));
    }

    #[test]
    fn same_frame_names_in_different_passes_stay_distinct() {
        let tmp = tempfile::tempdir().unwrap();
        for pass in ["pass1", "pass2"] {
            let dir = tmp.path().join(pass);
            fs::create_dir(&dir).unwrap();
            touch(&dir, "frame0001.png");
        }
        let scratch = tmp.path().join(SCRATCH_DIR);

        let staged = stage_frames(tmp.path(), &scratch).unwrap();
        assert_eq!(staged.len(), 2);
        assert_eq!(fs::read_dir(&scratch).unwrap().count(), 2);
        let names: Vec<_> = staged
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["pass1-frame0001.png", "pass2-frame0001.png"]);
    }

    #[test]
    fn staging_without_frames_is_no_frames_found() {
        let tmp = tempfile::tempdir().unwrap();
        let scratch = tmp.path().join(SCRATCH_DIR);
        let err = stage_frames(tmp.path(), &scratch).unwrap_err();
        assert!(matches!(err, Error::NoFramesFound { .. }));
    }

    #[test]
    fn missing_render_dir_is_missing_gif_source() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.render.render_dir = tmp.path().join("never-rendered");
        config.sheet.magick_dir = tmp.path().to_path_buf();
        fs::write(
            tmp.path().join(Tool::Convert.binary_name()),
            b"#!/bin/sh\n",
        )
        .unwrap();

        let err = assemble_gif(&config).unwrap_err();
        assert!(matches!(err, Error::MissingGifSource { .. }));
    }
}

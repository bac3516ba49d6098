//! Collect rendered frames from the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Walk `dir` and return every file ending in `{suffix}.png`, sorted
/// lexicographically by path. An empty suffix matches every PNG frame.
pub fn collect_frames(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let frames = scan_frames(dir, suffix, None)?;
    if frames.is_empty() {
        return Err(Error::NoFramesFound {
            dir: dir.to_path_buf(),
        });
    }
    log::debug!("collected {} frame(s) under {}", frames.len(), dir.display());
    Ok(frames)
}

/// Like [`collect_frames`] but tolerates an empty result and can leave one
/// subdirectory (the GIF scratch dir) out of the walk.
pub(crate) fn scan_frames(dir: &Path, suffix: &str, skip: Option<&Path>) -> Result<Vec<PathBuf>> {
    let pattern = format!("{suffix}.png");
    let mut frames = Vec::new();
    walk(dir, &pattern, skip, &mut frames)?;
    frames.sort();
    Ok(frames)
}

fn walk(dir: &Path, pattern: &str, skip: Option<&Path>, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if skip.is_some_and(|s| path == s) {
                continue;
            }
            walk(&path, pattern, skip, out)?;
        } else if entry
            .file_name()
            .to_string_lossy()
            .ends_with(pattern)
        {
            out.push(path);
        }
    }
    Ok(())
}

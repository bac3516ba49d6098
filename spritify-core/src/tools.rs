//! Locate the external ImageMagick binaries.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Tiles frames into a sprite sheet.
    Montage,
    /// Assembles frames into an animated GIF.
    Convert,
}

impl Tool {
    pub fn binary_name(self) -> String {
        let stem = match self {
            Tool::Montage => "montage",
            Tool::Convert => "convert",
        };
        format!("{stem}{}", std::env::consts::EXE_SUFFIX)
    }
}

/// Resolve the path to `tool`. On Windows the ImageMagick install location
/// from the registry takes precedence over the configured directory. The
/// resolved path must exist as a file; exit codes downstream are unreliable,
/// so this is the only place a missing install is caught.
pub fn resolve(tool: Tool, magick_dir: &Path) -> Result<PathBuf> {
    let dir = registry_bin_path().unwrap_or_else(|| magick_dir.to_path_buf());
    let path = dir.join(tool.binary_name());
    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::ToolNotFound { path })
    }
}

#[cfg(windows)]
fn registry_bin_path() -> Option<PathBuf> {
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    let key = RegKey::predef(HKEY_LOCAL_MACHINE)
        .open_subkey("SOFTWARE\\ImageMagick\\Current")
        .ok()?;
    let bin_path: String = key.get_value("BinPath").ok()?;
    Some(PathBuf::from(bin_path))
}

#[cfg(not(windows))]
fn registry_bin_path() -> Option<PathBuf> {
    None
}

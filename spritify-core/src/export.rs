//! Sheet metadata sidecar written next to the outputs.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct SheetMeta {
    /// Tile arrangement passed to the composition tool, e.g. "8x".
    pub tile: String,
    /// Per-tile geometry passed to the composition tool.
    pub geometry: String,
    /// Total frames tiled for this view.
    pub frames: usize,
    /// Sheet files produced, in batch order.
    pub sheets: Vec<PathBuf>,
}

/// Write `{stem}{suffix}.json` next to the sheet base path.
pub fn write_sidecar(base: &Path, suffix: &str, meta: &SheetMeta) -> Result<PathBuf> {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sprites");
    let path = base.with_file_name(format!("{stem}{suffix}.json"));
    let json = serde_json::to_string_pretty(meta).map_err(std::io::Error::other)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_lands_next_to_the_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("sprites.png");
        let meta = SheetMeta {
            tile: "8x".into(),
            geometry: "64x64+2+2".into(),
            frames: 16,
            sheets: vec![base.clone()],
        };
        let path = write_sidecar(&base, "_L", &meta).unwrap();
        assert_eq!(path, tmp.path().join("sprites_L.json"));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("\"tile\": \"8x\""));
        assert!(text.contains("\"frames\": 16"));
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet: SheetConfig,
    pub render: RenderConfig,
}

/// Sprite-sheet output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Save location for the sprite sheet (PNG; the GIF shares its stem).
    pub filepath: PathBuf,
    /// Directory holding the ImageMagick binaries.
    pub magick_dir: PathBuf,
    /// Quality setting for the sheet image, 0-100.
    pub quality: u8,
    /// Whether tiles run along rows or columns.
    pub layout: LayoutAxis,
    /// Number of tiles in the chosen direction.
    pub tiles: u32,
    /// Number of files to split the sheet into.
    pub files: u32,
    /// Horizontal offset between tiles, in pixels.
    pub offset_x: i32,
    /// Vertical offset between tiles, in pixels.
    pub offset_y: i32,
    /// Fill color behind the sprites, RGBA in 0-1.
    pub bg_color: [f32; 4],
    /// Build the sprite sheet as part of the post-render run.
    pub auto_sprite: bool,
    /// Build the animated GIF as part of the post-render run.
    pub auto_gif: bool,
    /// Emit one sheet per multiview suffix when views are configured.
    pub support_multiview: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            filepath: PathBuf::from("sprites.png"),
            magick_dir: PathBuf::from("/usr/bin"),
            quality: 100,
            layout: LayoutAxis::Rows,
            tiles: 8,
            files: 1,
            offset_x: 2,
            offset_y: 2,
            bg_color: [0.0, 0.0, 0.0, 0.0],
            auto_sprite: true,
            auto_gif: true,
            support_multiview: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutAxis {
    Rows,
    Columns,
}

/// Facts about the render whose frames are being collected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory the frames were rendered into.
    pub render_dir: PathBuf,
    pub resolution_x: u32,
    pub resolution_y: u32,
    /// Resolution scale in percent, as rendered.
    pub resolution_percentage: u32,
    /// Crop-to-border bounds, fractions of the full frame. None = no crop.
    pub crop: Option<CropBorder>,
    /// Frame rate, drives the GIF frame delay.
    pub fps: u32,
    /// Multiview file suffixes (e.g. "_L", "_R"); empty for a single view.
    pub views: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render_dir: PathBuf::from("."),
            resolution_x: 1920,
            resolution_y: 1080,
            resolution_percentage: 100,
            crop: None,
            fps: 24,
            views: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CropBorder {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

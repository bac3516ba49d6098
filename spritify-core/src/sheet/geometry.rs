//! Tile geometry arguments for the composition tool.

use crate::config::{LayoutAxis, RenderConfig};

/// Rendered frame size in pixels after applying the resolution percentage
/// and the optional crop-to-border bounds.
pub fn effective_resolution(render: &RenderConfig) -> (u32, u32) {
    let scale = f64::from(render.resolution_percentage) / 100.0;
    let mut w = f64::from(render.resolution_x) * scale;
    let mut h = f64::from(render.resolution_y) * scale;
    if let Some(crop) = render.crop {
        w = f64::from(crop.max_x) * w - f64::from(crop.min_x) * w;
        h = f64::from(crop.max_y) * h - f64::from(crop.min_y) * h;
    }
    (w.round() as u32, h.round() as u32)
}

/// ImageMagick `-geometry` value: tile size plus inter-tile offsets,
/// e.g. `1920x1080+2+2`.
pub fn geometry_string(width: u32, height: u32, offset_x: i32, offset_y: i32) -> String {
    format!("{width}x{height}+{offset_x}+{offset_y}")
}

/// ImageMagick `-tile` value: `{n}x` fixes the count per row, `x{n}` per
/// column, with the other direction left free.
pub fn tile_setting(layout: LayoutAxis, tiles: u32) -> String {
    match layout {
        LayoutAxis::Rows => format!("{tiles}x"),
        LayoutAxis::Columns => format!("x{tiles}"),
    }
}

/// ImageMagick `-background` value in percent rgba() form; alpha stays 0-1.
pub fn background_string(bg: [f32; 4]) -> String {
    format!(
        "rgba({}%,{}%,{}%,{})",
        bg[0] * 100.0,
        bg[1] * 100.0,
        bg[2] * 100.0,
        bg[3]
    )
}

pub mod schema;

pub use schema::{Config, CropBorder, LayoutAxis, RenderConfig, SheetConfig};

use std::path::Path;

use crate::error::Result;

pub fn load_from_yaml_str(s: &str) -> Result<Config> {
    let cfg: Config = serde_yaml::from_str(s)?;
    Ok(cfg)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let data = std::fs::read_to_string(path)?;
    load_from_yaml_str(&data)
}

impl Config {
    /// Suffixes to fan the sheet run out over: the configured multiview
    /// suffixes when multiview support is on, otherwise the empty suffix.
    pub fn view_suffixes(&self) -> Vec<String> {
        if self.sheet.support_multiview && !self.render.views.is_empty() {
            self.render.views.clone()
        } else {
            vec![String::new()]
        }
    }
}

//! Post-render entry point, decoupled from any host application event loop.

use crate::config::Config;
use crate::error::Result;
use crate::gif::{self, GifArtifact};
use crate::sheet::{self, SheetArtifact};

/// What a post-render run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    pub sheets: Vec<SheetArtifact>,
    pub gif: Option<GifArtifact>,
}

/// Run the enabled steps for a completed animation render, sequentially:
/// sheet composition when `auto_sprite` is set, GIF assembly when
/// `auto_gif` is. Each external process runs to completion before the next
/// starts.
pub fn post_render(config: &Config) -> Result<RunReport> {
    let mut report = RunReport::default();
    if config.sheet.auto_sprite {
        log::info!("making sprite sheet");
        report.sheets = sheet::compose_sheets(config)?;
    }
    if config.sheet.auto_gif {
        log::info!("generating animated GIF");
        report.gif = Some(gif::assemble_gif(config)?);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_toggles_do_nothing() {
        let mut config = Config::default();
        config.sheet.auto_sprite = false;
        config.sheet.auto_gif = false;
        // Nothing is invoked, so no tool or frame lookup can fail.
        let report = post_render(&config).unwrap();
        assert!(report.sheets.is_empty());
        assert!(report.gif.is_none());
    }
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use spritify_core::{config, gif, pipeline, sheet, VERSION};

#[derive(Parser, Debug)]
#[command(name = "spritify", version = VERSION, about = "Sprite sheets and GIFs from rendered frames")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and inspect a spritify config YAML
    Inspect { path: PathBuf },
    /// Compose sprite sheet(s) from the rendered frames
    Sheet {
        #[arg(long)]
        config: PathBuf,
        /// Override the directory holding the rendered frames
        #[arg(long)]
        render_dir: Option<PathBuf>,
        /// Override the sprite sheet output path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Assemble the rendered frames into an animated GIF
    Gif {
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        render_dir: Option<PathBuf>,
    },
    /// Run the full post-render pipeline, honoring the auto toggles
    Run {
        #[arg(long)]
        config: PathBuf,
    },
}

fn apply_overrides(
    cfg: &mut config::Config,
    render_dir: Option<PathBuf>,
    out: Option<PathBuf>,
) {
    if let Some(dir) = render_dir {
        cfg.render.render_dir = dir;
    }
    if let Some(path) = out {
        cfg.sheet.filepath = path;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect { path } => {
            let cfg = config::load_from_path(&path)?;
            println!("Loaded config: {}", path.display());
            println!("  sheet: {}", cfg.sheet.filepath.display());
            println!("  magick dir: {}", cfg.sheet.magick_dir.display());
            println!(
                "  layout: {:?} ({} tiles, {} file(s), offsets {}+{})",
                cfg.sheet.layout,
                cfg.sheet.tiles,
                cfg.sheet.files,
                cfg.sheet.offset_x,
                cfg.sheet.offset_y
            );
            println!("  quality: {}", cfg.sheet.quality);
            println!(
                "  render: {}x{} @ {}% from {}",
                cfg.render.resolution_x,
                cfg.render.resolution_y,
                cfg.render.resolution_percentage,
                cfg.render.render_dir.display()
            );
            println!("  fps: {}", cfg.render.fps);
            println!(
                "  auto: sprite={}, gif={}, multiview={} ({} view(s))",
                cfg.sheet.auto_sprite,
                cfg.sheet.auto_gif,
                cfg.sheet.support_multiview,
                cfg.render.views.len()
            );
        }
        Command::Sheet {
            config,
            render_dir,
            out,
        } => {
            let mut cfg = config::load_from_path(&config)?;
            apply_overrides(&mut cfg, render_dir, out);
            let artifacts = sheet::compose_sheets(&cfg)?;
            for artifact in &artifacts {
                println!(
                    "Wrote {} ({} frame(s))",
                    artifact.path.display(),
                    artifact.frames
                );
            }
        }
        Command::Gif { config, render_dir } => {
            let mut cfg = config::load_from_path(&config)?;
            apply_overrides(&mut cfg, render_dir, None);
            let artifact = gif::assemble_gif(&cfg)?;
            println!(
                "Wrote {} ({} frame(s))",
                artifact.path.display(),
                artifact.frames
            );
        }
        Command::Run { config } => {
            let cfg = config::load_from_path(&config)?;
            let report = pipeline::post_render(&cfg)?;
            for artifact in &report.sheets {
                println!("Sheet: {}", artifact.path.display());
            }
            if let Some(gif) = &report.gif {
                println!("GIF: {} ({} frame(s))", gif.path.display(), gif.frames);
            }
            if report.sheets.is_empty() && report.gif.is_none() {
                println!("Nothing to do: auto_sprite and auto_gif are both off");
            }
        }
    }
    Ok(())
}

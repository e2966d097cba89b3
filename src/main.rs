use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use glasses_compositor::{
    app,
    config::Config,
    preview::{NoPreview, Preview, WindowPreview},
    prompt::Answers,
};

#[derive(Parser)]
#[command(
    name = "glasses-compositor",
    version,
    about = "Recolor and re-texture an eyeglasses frame image",
    long_about = "Glasses-Compositor asks for a frame shape, a frame color, a texture and a texture color, composites them inside the frame's silhouette, shows a preview and saves the result."
)]
struct Cli {
    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing the frame and texture images
    #[arg(short, long)]
    images_dir: Option<PathBuf>,

    /// Output image path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Frame shape key (asked interactively when omitted)
    #[arg(long)]
    frame: Option<String>,

    /// Frame color as B,G,R (asked interactively when omitted)
    #[arg(long)]
    frame_color: Option<String>,

    /// Texture key (asked interactively when omitted)
    #[arg(long)]
    texture: Option<String>,

    /// Texture color as B,G,R (asked interactively when omitted)
    #[arg(long)]
    texture_color: Option<String>,

    /// Save without opening the preview window
    #[arg(long)]
    no_preview: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the prompts on stdout stay readable
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Glasses-Compositor v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => Config::default(),
    };

    if let Some(images_dir) = cli.images_dir {
        config.catalog.images_dir = images_dir;
    }
    if let Some(output) = cli.output {
        config.output.path = output;
    }
    if cli.no_preview {
        config.preview.enabled = false;
    }
    config.validate()?;

    let preset = Answers {
        frame: cli.frame,
        frame_color: cli.frame_color,
        texture: cli.texture,
        texture_color: cli.texture_color,
    };

    let mut preview: Box<dyn Preview> = if config.preview.enabled {
        Box::new(WindowPreview::new(config.preview.title.clone()))
    } else {
        Box::new(NoPreview)
    };

    let stdin = std::io::stdin();
    app::run(&config, &preset, stdin.lock(), std::io::stdout(), preview.as_mut())?;
    Ok(())
}

//! One interactive run: questions, composite, preview, save.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    composition::CompositionEngine,
    config::Config,
    error::Result,
    preview::Preview,
    prompt::{Answers, Session},
    raster::Frame,
};

/// Ask for the missing answers, compose, preview and write the result
///
/// Returns the path the composite was written to. Nothing is written when any
/// step before saving fails.
pub fn run<R, W, P>(
    config: &Config,
    preset: &Answers,
    input: R,
    mut output: W,
    preview: &mut P,
) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
    P: Preview + ?Sized,
{
    let engine = CompositionEngine::new(config.compositor);
    let mut session = Session::new(config, input, &mut output);

    // Decode the frame before asking anything else so a bad file fails early
    let frame_path = session.ask_frame(preset)?;
    let base_frame = engine.load_frame(&frame_path)?;
    let request = session.ask_remaining(frame_path, preset)?;

    let composite = engine.compose_loaded(base_frame, &request)?;

    if preview.is_interactive() {
        writeln!(output)?;
        writeln!(output, "Press any key in the preview window to close it and save the image...")?;
        output.flush()?;
    }
    preview.show(&composite.image)?;

    let path = config.output.path.clone();
    save_output(&composite.image, &path)?;
    writeln!(output)?;
    writeln!(output, "New glasses generated: {}", path.display())?;
    info!("Output saved to: {:?}", path);
    Ok(path)
}

/// Write `frame` to `path`, creating the parent directory when missing
pub fn save_output(frame: &Frame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    frame.save(path)
}

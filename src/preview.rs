//! On-screen preview of the finished composite.

use minifb::{KeyRepeat, Window, WindowOptions};
use tracing::{debug, info};

use crate::{
    error::{PreviewError, Result},
    raster::Frame,
};

/// Something that can show a composite to the user before it is saved
pub trait Preview {
    /// Display `frame`, returning once the user dismisses it
    fn show(&mut self, frame: &Frame) -> Result<()>;

    /// Whether `show` waits for the user
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Native window that stays up until any key is pressed or it is closed
pub struct WindowPreview {
    title: String,
}

impl WindowPreview {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self { title: title.into() }
    }
}

impl Preview for WindowPreview {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        let (width, height) = (frame.width() as usize, frame.height() as usize);
        let pixels = frame.to_packed_rgb();

        let mut window = Window::new(&self.title, width, height, WindowOptions::default())
            .map_err(|e| PreviewError::WindowInit { reason: e.to_string() })?;
        window.set_target_fps(30);
        info!("Preview open; press any key in the window to continue");

        while window.is_open() {
            window
                .update_with_buffer(&pixels, width, height)
                .map_err(|e| PreviewError::WindowUpdate { reason: e.to_string() })?;

            if !window.get_keys_pressed(KeyRepeat::No).is_empty() {
                debug!("Key pressed, closing preview");
                break;
            }
        }
        Ok(())
    }
}

/// Preview that shows nothing, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPreview;

impl Preview for NoPreview {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        debug!("Preview disabled; skipping {}x{} composite", frame.width(), frame.height());
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

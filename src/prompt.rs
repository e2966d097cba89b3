//! Interactive console session.
//!
//! Asks for the frame shape, frame color, texture and texture color in that
//! order, resolving each answer into the typed parameters of a
//! [`CompositionRequest`]. Works over any reader/writer pair so tests can
//! drive it with in-memory buffers.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::{
    color::{Color, ColorParseError},
    composition::CompositionRequest,
    config::Config,
    error::Result,
};

/// Answers supplied up front (e.g. from command-line flags); `None` is asked for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub frame: Option<String>,
    pub frame_color: Option<String>,
    pub texture: Option<String>,
    pub texture_color: Option<String>,
}

/// Outcome of reading a color answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorAnswer {
    Parsed(Color),
    Fallback { color: Color, reason: ColorParseError },
}

impl ColorAnswer {
    pub fn color(&self) -> Color {
        match self {
            ColorAnswer::Parsed(color) => *color,
            ColorAnswer::Fallback { color, .. } => *color,
        }
    }
}

/// Parse a color answer, substituting `default` when it is malformed
pub fn parse_color_or_default(answer: &str, default: Color) -> ColorAnswer {
    match answer.parse::<Color>() {
        Ok(color) => ColorAnswer::Parsed(color),
        Err(reason) => ColorAnswer::Fallback { color: default, reason },
    }
}

/// One run of the four questions
pub struct Session<'a, R, W> {
    config: &'a Config,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a Config, input: R, output: W) -> Self {
        Self { config, input, output }
    }

    /// Ask every question not already answered in `preset`
    ///
    /// An unknown frame or texture key ends the session with a
    /// [`SelectionError`](crate::error::SelectionError); malformed colors fall
    /// back to the configured defaults.
    pub fn run(&mut self, preset: &Answers) -> Result<CompositionRequest> {
        let frame_path = self.ask_frame(preset)?;
        self.ask_remaining(frame_path, preset)
    }

    /// First question only: the frame shape, resolved to its file
    pub fn ask_frame(&mut self, preset: &Answers) -> Result<PathBuf> {
        let config = self.config;
        let catalog = &config.catalog;
        let frame_key = self.choose("Choose a frame shape:", &catalog.frames, preset.frame.as_deref())?;
        let frame_path = catalog.resolve_frame(&frame_key)?;
        debug!("Frame '{}' -> {:?}", frame_key, frame_path);
        Ok(frame_path)
    }

    /// Frame color, texture and texture color, after [`ask_frame`](Self::ask_frame)
    pub fn ask_remaining(&mut self, frame_path: PathBuf, preset: &Answers) -> Result<CompositionRequest> {
        let config = self.config;
        let catalog = &config.catalog;

        let frame_color = self.ask_color(
            "Enter the frame color (B,G,R), e.g. red (0,0,255):",
            "Frame color: ",
            preset.frame_color.as_deref(),
            config.prompt.default_frame_color,
        )?;

        let texture_key = self.choose("Choose a texture:", &catalog.textures, preset.texture.as_deref())?;
        let texture_path = catalog.resolve_texture(&texture_key)?;
        debug!("Texture '{}' -> {:?}", texture_key, texture_path);

        let texture_color = self.ask_color(
            "Enter the texture color (B,G,R), e.g. gold (0,215,255):",
            "Texture color: ",
            preset.texture_color.as_deref(),
            config.prompt.default_texture_color,
        )?;

        Ok(CompositionRequest {
            frame_path,
            frame_color,
            texture_path,
            texture_color,
        })
    }

    /// Print the menu for `options` and read a trimmed key
    fn choose(
        &mut self,
        heading: &str,
        options: &BTreeMap<String, PathBuf>,
        preset: Option<&str>,
    ) -> Result<String> {
        if let Some(answer) = preset {
            return Ok(answer.trim().to_string());
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", heading)?;
        for (key, file) in options {
            writeln!(self.output, "{} - {}", key, file.display())?;
        }
        let keys: Vec<&str> = options.keys().map(String::as_str).collect();
        write!(self.output, "Enter {}: ", keys.join(" or "))?;
        self.output.flush()?;

        Ok(self.read_line()?.unwrap_or_default())
    }

    fn ask_color(
        &mut self,
        question: &str,
        label: &str,
        preset: Option<&str>,
        default: Color,
    ) -> Result<Color> {
        let answer = match preset {
            Some(answer) => answer.trim().to_string(),
            None => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", question)?;
                write!(self.output, "{}", label)?;
                self.output.flush()?;
                self.read_line()?.unwrap_or_default()
            }
        };

        let parsed = parse_color_or_default(&answer, default);
        if let ColorAnswer::Fallback { color, reason } = &parsed {
            warn!("Could not parse color '{}': {}", answer, reason);
            writeln!(self.output, "Invalid input, using default color {}", color)?;
        }
        Ok(parsed.color())
    }

    /// Next line without its line ending; `None` once input is exhausted
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

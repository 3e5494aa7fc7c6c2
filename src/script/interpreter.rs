//! Command execution against a canvas.

use std::path::{Path, PathBuf};

use crate::color::Rgba;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::PngEncoder;
use crate::scene::Canvas;

use super::command::{parse_command, Command};

/// Executes drawing commands and writes saved canvases as PNG files.
#[derive(Debug, Clone)]
pub struct Interpreter {
    canvas: Canvas,
    output_dir: PathBuf,
    saved: Vec<PathBuf>,
}

impl Interpreter {
    /// Interpreter with a default canvas, saving into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            canvas: Canvas::default(),
            output_dir: output_dir.into(),
            saved: Vec::new(),
        }
    }

    /// Interpreter whose initial canvas and output directory come from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured canvas size is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut canvas = Canvas::new(config.canvas.width, config.canvas.height)?;
        canvas.set_background(Rgba::from(config.canvas.background));
        canvas.set_pen(Rgba::from(config.canvas.pen));
        Ok(Self {
            canvas,
            output_dir: config.output_dir(),
            saved: Vec::new(),
        })
    }

    /// The canvas as edited so far.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Directory `saveCanvas` writes into.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written by `saveCanvas`, in order.
    #[must_use]
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Run a whole script, stopping at the first failing line.
    ///
    /// Returns the number of commands executed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for a malformed line and [`Error::Script`]
    /// wrapping the cause when a command fails to execute.
    pub fn run(&mut self, script: &str) -> Result<usize> {
        let mut executed = 0;
        for (index, text) in script.lines().enumerate() {
            let line = index + 1;
            let Some(command) = parse_command(line, text)? else {
                continue;
            };
            log::debug!("line {line}: {command:?}");
            self.execute(command).map_err(|e| Error::Script {
                line,
                source: Box::new(e),
            })?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Read and run a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the script fails.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let script = std::fs::read_to_string(path)?;
        self.run(&script)
    }

    /// Execute a single command.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown identifiers, zero canvas sizes, and
    /// failures writing a saved canvas.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::ResetCanvas { width, height } => self.canvas.reset(width, height),
            Command::SaveCanvas { name } => self.save(&name),
            Command::SetColor(color) => {
                self.canvas.set_pen(color);
                Ok(())
            }
            Command::Draw { id, shape } => {
                self.canvas.insert(id, shape);
                Ok(())
            }
            Command::Transform { id, transform } => self.canvas.apply(&id, transform),
            Command::Clip {
                id,
                window,
                algorithm: Some(algorithm),
            } => self.canvas.clip(&id, window, algorithm),
            Command::Clip {
                id,
                algorithm: None,
                ..
            } => {
                if self.canvas.get(&id).is_none() {
                    return Err(Error::UnknownPrimitive(id));
                }
                log::warn!("clip of '{id}' skipped: no recognised algorithm");
                Ok(())
            }
        }
    }

    fn save(&mut self, name: &str) -> Result<()> {
        let path = self.output_dir.join(format!("{name}.png"));
        let fb = self.canvas.render()?;
        PngEncoder::write_to_file(&fb, &path)?;
        log::info!("saved {}x{} canvas to {}", fb.width(), fb.height(), path.display());
        self.saved.push(path);
        Ok(())
    }
}

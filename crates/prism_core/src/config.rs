//! Render parameter file.
//!
//! The file holds the output resolution as one key per line:
//!
//! ```text
//! width 800
//! height 600
//! ```
//!
//! Any other line is an error. Missing keys keep their defaults.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading render parameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized line {line}: {content:?}")]
    UnrecognizedLine { line: usize, content: String },

    #[error("Invalid value for {key} at line {line}: {value:?}")]
    InvalidValue {
        key: &'static str,
        line: usize,
        value: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Output resolution read from the parameter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    pub width: u32,
    pub height: u32,
}

impl RenderParams {
    /// Resolution used when the file does not set one.
    pub const DEFAULT_WIDTH: u32 = 1000;
    pub const DEFAULT_HEIGHT: u32 = 1000;

    /// Largest accepted width or height.
    pub const MAX_DIMENSION: u32 = 16_384;

    /// Create parameters with an explicit resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Read and parse a parameter file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let params = Self::parse(&content)?;
        log::info!(
            "Loaded parameters from {}: {}x{}",
            path.display(),
            params.width,
            params.height
        );
        Ok(params)
    }

    /// Parse parameter file contents.
    ///
    /// Later lines override earlier ones.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let mut params = Self::default();

        for (index, raw) in content.lines().enumerate() {
            let line = index + 1;

            if let Some(rest) = raw.strip_prefix("width") {
                params.width = parse_dimension("width", line, rest)?;
            } else if let Some(rest) = raw.strip_prefix("height") {
                params.height = parse_dimension("height", line, rest)?;
            } else {
                return Err(ConfigError::UnrecognizedLine {
                    line,
                    content: raw.to_string(),
                });
            }
        }

        Ok(params)
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Parse the value following a key. It must be separated from the key by
/// whitespace and be an integer in `1..=RenderParams::MAX_DIMENSION`.
fn parse_dimension(key: &'static str, line: usize, rest: &str) -> ConfigResult<u32> {
    let invalid = || ConfigError::InvalidValue {
        key,
        line,
        value: rest.trim().to_string(),
    };

    if !rest.starts_with(char::is_whitespace) {
        return Err(invalid());
    }

    match rest.trim().parse::<u32>() {
        Ok(value @ 1..=RenderParams::MAX_DIMENSION) => Ok(value),
        _ => Err(invalid()),
    }
}

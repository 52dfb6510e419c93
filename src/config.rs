// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Screen configuration, read from a toml file such as:
//!
//! ```toml
//! format = "rgb565be"
//! log_level = "debug"
//! log_file = "log/pixel_fb.log"
//!
//! [cell]
//! min = { x = 0, y = 0 }
//! max = { x = 8, y = 16 }
//!
//! [viewport]
//! min = { x = 0, y = 0 }
//! max = { x = 240, y = 128 }
//!
//! [canvas]
//! min = { x = 0, y = 0 }
//! max = { x = 240, y = 128 }
//! ```
//!
//! Every key is optional; missing ones take the `Default` values.

use crate::error::{non_empty, PixelError, Result};
use crate::util::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    Rgba8,
    #[default]
    Rgb565Be,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
            PixelFormat::Rgb565Be => 2,
        }
    }
}

impl FromStr for PixelFormat {
    type Err = PixelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rgba8" | "rgba" => Ok(PixelFormat::Rgba8),
            "rgb565be" | "rgb565" => Ok(PixelFormat::Rgb565Be),
            other => Err(PixelError::Config(format!("unknown pixel format {}", other))),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Rgba8 => write!(f, "rgba8"),
            PixelFormat::Rgb565Be => write!(f, "rgb565be"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub format: PixelFormat,
    pub log_level: String,
    pub log_file: String,
    pub cell: Rect,
    pub viewport: Rect,
    pub canvas: Rect,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            format: PixelFormat::Rgb565Be,
            log_level: "info".to_string(),
            log_file: "log/pixel_fb.log".to_string(),
            cell: Rect::new(0, 0, 8, 16),
            viewport: Rect::new(0, 0, 240, 128),
            canvas: Rect::new(0, 0, 240, 128),
        }
    }
}

impl ScreenConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let cfg: ScreenConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PixelError::Config(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_toml(&text)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| PixelError::Config(e.to_string()))
    }

    /// Rects must have area; a canvas that is not a whole number of cells is allowed.
    pub fn validate(&self) -> Result<()> {
        non_empty("cell", self.cell)?;
        non_empty("viewport", self.viewport)?;
        non_empty("canvas", self.canvas)?;
        Ok(())
    }
}

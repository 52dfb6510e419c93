// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Error type shared by constructors, config loading and image export.
//!
//! Pixel writes, fills, blits and scrolls never fail: bad coordinates are
//! clipped or wrapped and unconvertible colors are dropped. Errors only come
//! from building a buffer around a degenerate rect or from the ambient I/O.

use crate::util::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelError {
    /// A canvas, viewport, cell or buffer rect with no area.
    EmptyRect(&'static str, Rect),
    /// Backing buffer dimensions differ from the working buffer.
    SizeMismatch(Rect, Rect),
    Config(String),
    Io(String),
    Image(String),
    Log(String),
}

impl std::fmt::Display for PixelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelError::EmptyRect(what, r) => {
                write!(
                    f,
                    "empty {} rect ({},{})-({},{})",
                    what, r.min.x, r.min.y, r.max.x, r.max.y
                )
            }
            PixelError::SizeMismatch(a, b) => {
                write!(f, "buffer size mismatch: {:?} vs {:?}", a, b)
            }
            PixelError::Config(msg) => write!(f, "config error: {}", msg),
            PixelError::Io(msg) => write!(f, "i/o error: {}", msg),
            PixelError::Image(msg) => write!(f, "image error: {}", msg),
            PixelError::Log(msg) => write!(f, "log init error: {}", msg),
        }
    }
}

impl std::error::Error for PixelError {}

impl From<std::io::Error> for PixelError {
    fn from(err: std::io::Error) -> PixelError {
        PixelError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for PixelError {
    fn from(err: toml::de::Error) -> PixelError {
        PixelError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PixelError>;

/// Rejects rects with no area.
pub(crate) fn non_empty(what: &'static str, r: Rect) -> Result<Rect> {
    if r.is_empty() {
        return Err(PixelError::EmptyRect(what, r));
    }
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PixelError::EmptyRect("canvas", Rect::new(0, 0, 0, 10));
        assert_eq!(err.to_string(), "empty canvas rect (0,0)-(0,10)");

        let err = PixelError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "config error: missing field");
    }

    #[test]
    fn test_non_empty() {
        assert!(non_empty("cell", Rect::new(0, 0, 8, 16)).is_ok());
        assert_eq!(
            non_empty("cell", Rect::new(3, 3, 3, 3)),
            Err(PixelError::EmptyRect("cell", Rect::new(3, 3, 3, 3)))
        );
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PixelError = io.into();
        assert_eq!(err, PixelError::Io("gone".to_string()));
    }
}

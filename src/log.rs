// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Log module provides a file logger for the framebuffer and its tools, reference
//! https://docs.rs/log4rs
//!
//! The library itself only speaks the `log` facade. Applications call
//! `init_log` once at startup; without it every record is discarded.

use crate::error::{PixelError, Result};
use log::LevelFilter;

#[cfg(feature = "log4rs")]
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Parses a level name such as "info" or "TRACE", falling back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}

/// init logs system
#[cfg(feature = "log4rs")]
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(file_path)
        .map_err(|e| PixelError::Log(format!("{}: {}", file_path, e)))?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| PixelError::Log(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| PixelError::Log(e.to_string()))?;
    Ok(())
}

/// Without log4rs only the max level is set; records go nowhere unless the
/// application installs its own logger.
#[cfg(not(feature = "log4rs"))]
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    if file_path.is_empty() {
        return Err(PixelError::Log("empty log path".to_string()));
    }
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}

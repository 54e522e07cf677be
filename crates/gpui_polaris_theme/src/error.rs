use std::path::PathBuf;

use thiserror::Error;

/// A theme that cannot be turned into custom properties.
///
/// Parsing already rejects bad lengths, so this is only reachable with a
/// config built in code, for example `frame_offset(px(-1.))`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("`{property}` must be a finite, non-negative length, got {value}")]
    InvalidLength { property: &'static str, value: f32 },
}

/// Errors raised while loading a theme configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme configuration from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme configuration")]
    Parse(#[from] serde_json::Error),
}

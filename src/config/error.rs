//! Errors raised while loading `seo.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read SEO config `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    /// The file is not valid TOML or does not match the `seo.toml` schema.
    #[error("malformed SEO config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Parsed fine, but a setting is unusable (empty site name, relative URL, ...).
    #[error("invalid SEO config: {0}")]
    Validation(String),
}

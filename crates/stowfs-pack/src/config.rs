//! Packing configuration (stowfs.toml)
//!
//! Every field is optional; missing fields take the defaults below. Command
//! line flags are layered on top by the CLI.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Runtime crate referenced by generated sources unless configured otherwise.
pub const DEFAULT_IMPORT: &str = "stowfs";

/// Exclusions applied when none are configured: generated Rust sources and
/// macOS folder metadata.
pub const DEFAULT_EXCLUDES: &[&str] = &[r".*\.rs$", r"\.DS_Store$"];

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Options for one packing run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackConfig {
    /// Files or directories to embed, in order
    pub inputs: Vec<PathBuf>,

    /// Output path. A `.rs` path produces one filesystem source; a directory
    /// produces one source per file under it; empty writes each source
    /// beside its input file.
    pub out: PathBuf,

    /// Path of the runtime crate in generated `use` declarations
    pub import: String,

    /// Variable name (filesystem mode) or prefix (per-file mode)
    pub var: String,

    /// Regular expressions matched against absolute input paths
    pub exclude: Vec<String>,

    /// Overwrite existing outputs
    pub force: bool,

    /// Diagnostic logging
    pub verbose: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            out: PathBuf::new(),
            import: DEFAULT_IMPORT.to_string(),
            var: String::new(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            force: false,
            verbose: false,
        }
    }
}

impl PackConfig {
    /// Parse a configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a configuration from a string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

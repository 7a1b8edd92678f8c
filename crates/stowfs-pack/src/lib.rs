//! stowfs packing library
//!
//! Turns directory trees into Rust source for the `stowfs` runtime:
//! - Configuration loading (stowfs.toml)
//! - Regex exclusion filtering
//! - Input traversal and pruning of file-less directories
//! - Deterministic source generation (filesystem or per-file)
//! - Overwrite-aware output writing

pub mod config;
pub mod error;
pub mod fileset;
pub mod filter;
pub mod generate;
pub mod output;
pub mod packer;
pub mod walker;

pub use config::{ConfigError, PackConfig, DEFAULT_EXCLUDES, DEFAULT_IMPORT};
pub use error::PackError;
pub use fileset::FileSet;
pub use filter::{Decision, Filter};
pub use generate::{identifier, render_file, render_fs, GenerateOptions};
pub use output::write_file;
pub use packer::{OutputMode, PackReport, Packer};
pub use walker::{virtual_path, walk};

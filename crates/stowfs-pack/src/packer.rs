//! One packing run: walk the inputs, render sources, write them out.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::PackConfig;
use crate::error::PackError;
use crate::fileset::FileSet;
use crate::filter::Filter;
use crate::generate::{self, GenerateOptions};
use crate::output::write_file;
use crate::walker;

/// Where generated sources go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// One filesystem source at this path
    Aggregate(PathBuf),

    /// One source per file, under this directory or beside each input
    PerFile(Option<PathBuf>),
}

/// Outcome of [`Packer::run`].
#[derive(Debug, Default)]
pub struct PackReport {
    /// Entries kept after filtering and pruning
    pub entries: usize,

    /// Sources written, in write order
    pub written: Vec<PathBuf>,
}

pub struct Packer {
    config: PackConfig,
    filter: Filter,
}

impl Packer {
    /// Create a packer, compiling the exclusion patterns.
    pub fn new(config: PackConfig) -> Result<Self, PackError> {
        let filter = Filter::new(&config.exclude)?;
        Ok(Self { config, filter })
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Output mode selected by the configured output path.
    pub fn mode(&self) -> OutputMode {
        let out = &self.config.out;
        if out.to_string_lossy().ends_with(".rs") {
            OutputMode::Aggregate(out.clone())
        } else if out.as_os_str().is_empty() {
            OutputMode::PerFile(None)
        } else {
            OutputMode::PerFile(Some(out.clone()))
        }
    }

    /// Walk every configured input.
    pub fn walk(&self) -> Result<FileSet, PackError> {
        walker::walk(&self.config.inputs, &self.filter)
    }

    /// Walk, then write every source for the selected mode.
    ///
    /// Nothing is written when the walk fails.
    pub fn run(&self) -> Result<PackReport, PackError> {
        let set = self.walk()?;
        let mut report = PackReport {
            entries: set.len(),
            written: Vec::new(),
        };

        match self.mode() {
            OutputMode::Aggregate(out) => {
                if self.pack_fs(&set, &out)? {
                    report.written.push(out);
                }
            }
            OutputMode::PerFile(dir) => {
                for (true_path, file) in set.sorted() {
                    if file.is_dir() {
                        continue;
                    }
                    let out = per_file_path(true_path, file.path(), dir.as_deref());
                    if self.pack_file(file, &out)? {
                        report.written.push(out);
                    }
                }
            }
        }

        info!(
            entries = report.entries,
            written = report.written.len(),
            "pack complete"
        );
        Ok(report)
    }

    /// Render `set` as one filesystem source and write it to `out`.
    pub fn pack_fs(&self, set: &FileSet, out: &Path) -> Result<bool, PackError> {
        let var = if self.config.var.is_empty() {
            generate::var_name(out)
        } else {
            self.config.var.clone()
        };
        let options = GenerateOptions {
            package: generate::package_name(out),
            import: self.config.import.clone(),
            var,
        };

        debug!(out = %out.display(), var = %options.var, "rendering filesystem");
        let source = generate::render_fs(set, &options);
        write_file(out, source.as_bytes(), self.config.force)
    }

    /// Render one file as a standalone source and write it to `out`.
    pub fn pack_file(&self, file: &stowfs::File, out: &Path) -> Result<bool, PackError> {
        let options = GenerateOptions {
            package: generate::package_name(out),
            import: self.config.import.clone(),
            var: self.config.var.clone(),
        };

        debug!(path = %file.path(), out = %out.display(), "rendering file");
        let source = generate::render_file(file, &options);
        write_file(out, source.as_bytes(), self.config.force)
    }
}

/// `<true path>.rs`, or `<dir>/<virtual path>.rs` when an output directory is set.
fn per_file_path(true_path: &Path, virtual_path: &str, dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => dir.join(format!("{}.rs", virtual_path.trim_start_matches('/'))),
        None => {
            let mut path = true_path.as_os_str().to_owned();
            path.push(".rs");
            PathBuf::from(path)
        }
    }
}

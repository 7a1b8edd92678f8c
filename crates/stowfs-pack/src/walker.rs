//! Input traversal
//!
//! Walks each root, applies the exclusion filter, and records every kept node
//! under its virtual path. Once all roots are walked, directories without any
//! file beneath them are pruned.

use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use stowfs::{codec, File};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::PackError;
use crate::fileset::FileSet;
use crate::filter::{Decision, Filter};

/// Walk every root in order and return the pruned set.
///
/// Any unreadable node aborts the whole walk.
pub fn walk<P: AsRef<Path>>(roots: &[P], filter: &Filter) -> Result<FileSet, PackError> {
    let mut set = FileSet::new();
    for root in roots {
        walk_root(root.as_ref(), filter, &mut set)?;
    }

    let pruned = set.prune();
    info!(
        entries = set.len(),
        files = set.file_count(),
        pruned,
        "walk complete"
    );
    Ok(set)
}

fn walk_root(root: &Path, filter: &Filter, set: &mut FileSet) -> Result<(), PackError> {
    let root = std::path::absolute(root).map_err(|source| PackError::Walk {
        path: root.to_path_buf(),
        source,
    })?;
    debug!(root = %root.display(), "walking");

    let mut entries = WalkDir::new(&root).follow_links(true).into_iter();
    while let Some(next) = entries.next() {
        let entry = next.map_err(|err| PackError::Walk {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.clone()),
            source: err.into(),
        })?;

        let true_path = entry.path();
        let is_dir = entry.file_type().is_dir();
        match filter.decide(true_path, is_dir) {
            Decision::Keep => {}
            Decision::SkipFile => {
                debug!(path = %true_path.display(), "skipped");
                continue;
            }
            Decision::SkipSubtree => {
                debug!(path = %true_path.display(), "skipped with subtree");
                entries.skip_current_dir();
                continue;
            }
        }

        let virtual_path = virtual_path(&root, true_path, is_dir);
        debug!(path = %true_path.display(), virtual_path = %virtual_path, "embedding");

        let file = read_entry(&entry, virtual_path, is_dir)?;
        set.insert(true_path.to_path_buf(), file);
    }
    Ok(())
}

/// Map a node under `root` to its virtual path.
///
/// The root itself becomes `/` when it is a directory and `/<name>` when it is
/// a file; every other node is `/` plus its root-relative path with forward
/// slashes.
pub fn virtual_path(root: &Path, path: &Path, is_dir: bool) -> String {
    if path == root {
        if is_dir {
            return "/".to_string();
        }
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return format!("/{name}");
    }

    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    format!("/{}", parts.join("/"))
}

fn read_entry(entry: &DirEntry, virtual_path: String, is_dir: bool) -> Result<File, PackError> {
    let walk_error = |source: std::io::Error| PackError::Walk {
        path: entry.path().to_path_buf(),
        source,
    };

    let metadata = entry.metadata().map_err(|err| walk_error(err.into()))?;
    let mod_time = metadata.modified().map(unix_secs).unwrap_or(0);
    let name = entry.file_name().to_string_lossy().into_owned();

    if is_dir {
        return Ok(File::from_parts(virtual_path, name, mod_time, true, 0, None));
    }

    let data = std::fs::read(entry.path()).map_err(walk_error)?;
    let payload = if data.is_empty() {
        None
    } else {
        Some(codec::encode(&data)?)
    };
    Ok(File::from_parts(
        virtual_path,
        name,
        mod_time,
        false,
        data.len() as u64,
        payload,
    ))
}

/// Whole seconds since the epoch; negative before it.
fn unix_secs(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    }
}

//! The set of entries produced by one walk.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use stowfs::{File, Fs};

/// Entries keyed by their true (absolute, on-disk) path.
///
/// Iteration for output always goes through [`FileSet::sorted`], which orders
/// by virtual path.
#[derive(Debug, Default)]
pub struct FileSet {
    entries: BTreeMap<PathBuf, File>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any entry with the same true path.
    pub fn insert(&mut self, true_path: PathBuf, file: File) -> Option<File> {
        self.entries.insert(true_path, file)
    }

    pub fn get(&self, true_path: &Path) -> Option<&File> {
        self.entries.get(true_path)
    }

    /// Find an entry by virtual path. Picks the last one in sorted order when
    /// several roots map to the same virtual path.
    pub fn find(&self, virtual_path: &str) -> Option<&File> {
        self.sorted()
            .into_iter()
            .rev()
            .find(|(_, f)| f.path() == virtual_path)
            .map(|(_, f)| f)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of non-directory entries.
    pub fn file_count(&self) -> usize {
        self.entries.values().filter(|f| !f.is_dir()).count()
    }

    /// Entries ordered by virtual path, ties broken by true path.
    pub fn sorted(&self) -> Vec<(&Path, &File)> {
        let mut entries: Vec<(&Path, &File)> = self
            .entries
            .iter()
            .map(|(path, file)| (path.as_path(), file))
            .collect();
        entries.sort_by(|a, b| a.1.path().cmp(b.1.path()).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Virtual paths in output order.
    pub fn virtual_paths(&self) -> Vec<&str> {
        self.sorted().into_iter().map(|(_, f)| f.path()).collect()
    }

    /// Drop every directory that has no file anywhere beneath it.
    ///
    /// Returns the number of directories removed.
    pub fn prune(&mut self) -> usize {
        let occupied: HashSet<String> = self
            .entries
            .values()
            .filter(|f| !f.is_dir())
            .flat_map(|f| ancestors(f.path()))
            .map(str::to_string)
            .collect();

        let before = self.entries.len();
        self.entries
            .retain(|_, f| !f.is_dir() || occupied.contains(f.path()));
        before - self.entries.len()
    }

    /// Turn the set into a runtime filesystem, as generated code would.
    pub fn into_fs(self) -> Fs {
        let mut entries: Vec<(PathBuf, File)> = self.entries.into_iter().collect();
        entries.sort_by(|a, b| a.1.path().cmp(b.1.path()).then_with(|| a.0.cmp(&b.0)));
        Fs::new(entries.into_iter().map(|(_, f)| f))
    }
}

/// Proper ancestors of a virtual path: `/a/b/c` yields `/a/b`, `/a`, `/`.
fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(path);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.rfind('/') {
            Some(0) if current.len() > 1 => {
                rest = None;
                Some("/")
            }
            Some(i) if i > 0 => {
                let parent = &current[..i];
                rest = Some(parent);
                Some(parent)
            }
            _ => {
                rest = None;
                None
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(path: &str) -> File {
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        File::from_parts(path.to_string(), name, 0, true, 0, None)
    }

    fn file(path: &str) -> File {
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        File::from_parts(path.to_string(), name, 0, false, 0, None)
    }

    fn set(entries: Vec<File>) -> FileSet {
        let mut set = FileSet::new();
        for f in entries {
            set.insert(PathBuf::from(format!("/disk{}", f.path())), f);
        }
        set
    }

    #[test]
    fn test_ancestors() {
        assert_eq!(ancestors("/a/b/c").collect::<Vec<_>>(), ["/a/b", "/a", "/"]);
        assert_eq!(ancestors("/a").collect::<Vec<_>>(), ["/"]);
        assert_eq!(ancestors("/").count(), 0);
    }

    #[test]
    fn test_prune_keeps_directories_with_files() {
        let mut set = set(vec![dir("/"), dir("/sub"), file("/sub/b.txt"), dir("/sub/empty")]);
        assert_eq!(set.prune(), 1);
        assert_eq!(set.virtual_paths(), ["/", "/sub", "/sub/b.txt"]);
    }

    #[test]
    fn test_prune_drops_directory_only_chains() {
        let mut set = set(vec![
            dir("/"),
            file("/a.txt"),
            dir("/x"),
            dir("/x/y"),
            dir("/x/y/z"),
        ]);
        assert_eq!(set.prune(), 3);
        assert_eq!(set.virtual_paths(), ["/", "/a.txt"]);
    }

    #[test]
    fn test_prune_is_component_aware() {
        let mut set = set(vec![dir("/"), dir("/sub"), file("/subway.txt")]);
        set.prune();
        assert_eq!(set.virtual_paths(), ["/", "/subway.txt"]);
    }

    #[test]
    fn test_prune_everything_when_no_files() {
        let mut set = set(vec![dir("/"), dir("/a"), dir("/a/b")]);
        assert_eq!(set.prune(), 3);
        assert!(set.is_empty());
    }

    #[test]
    fn test_sorted_by_virtual_path() {
        let mut set = FileSet::new();
        set.insert(PathBuf::from("/z/first"), file("/b"));
        set.insert(PathBuf::from("/a/second"), file("/c"));
        set.insert(PathBuf::from("/m/third"), file("/a"));
        assert_eq!(set.virtual_paths(), ["/a", "/b", "/c"]);
        assert_eq!(set.file_count(), 3);
    }

    #[test]
    fn test_into_fs() {
        let fs = set(vec![dir("/"), file("/a"), file("/b")]).into_fs();
        assert_eq!(fs.paths().collect::<Vec<_>>(), ["/", "/a", "/b"]);
    }
}

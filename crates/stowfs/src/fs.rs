//! Virtual filesystem over embedded entries
//!
//! [`Fs`] maps virtual paths to [`File`]s and hands out [`Handle`]s, which
//! read and seek over an entry's decoded content and list directory children.
//! Content is decoded on first access and shared by every handle to the same
//! entry.

use std::collections::BTreeMap;
use std::io::{self, Read, Seek, SeekFrom};
use std::sync::Arc;

use crate::error::VfsError;
use crate::file::File;

/// A read-only hierarchical file store.
pub trait FileSystem {
    /// Cursor over one opened entry.
    type Handle<'a>: Read + Seek
    where
        Self: 'a;

    /// Open the entry at `path`.
    fn open(&self, path: &str) -> Result<Self::Handle<'_>, VfsError>;

    /// Read the whole content of the entry at `path`.
    fn read_all(&self, path: &str) -> Result<Vec<u8>, VfsError>;
}

/// The embedded filesystem.
///
/// Keys are virtual paths (forward slashes, rooted at `/`); lookups are exact.
#[derive(Debug, Default)]
pub struct Fs {
    files: BTreeMap<String, File>,
}

impl Fs {
    /// Build a filesystem from its entries. A later entry with the same path
    /// replaces an earlier one.
    pub fn new(files: impl IntoIterator<Item = File>) -> Self {
        let files = files
            .into_iter()
            .map(|file| (file.path().to_owned(), file))
            .collect();
        Self { files }
    }

    /// Open the entry at `path`.
    pub fn open(&self, path: &str) -> Result<Handle<'_>, VfsError> {
        let file = self
            .files
            .get(path)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        Ok(Handle::new(Some(self), file))
    }

    /// Read the whole content of the entry at `path`.
    pub fn read_all(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        let handle = self.open(path)?;
        Ok(handle.stat().bytes()?.to_vec())
    }

    /// Look up an entry without opening it.
    pub fn get(&self, path: &str) -> Option<&File> {
        self.files.get(path)
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = &File> {
        self.files.values()
    }

    /// Virtual paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.iter().map(File::path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Every entry strictly beneath `dir`, sorted by name then path.
    fn children(&self, dir: &File) -> Vec<&File> {
        let prefix = format!("{}/", dir.path().trim_end_matches('/'));
        let mut children: Vec<&File> = self
            .files
            .values()
            .filter(|f| f.path() != dir.path() && f.path().starts_with(&prefix))
            .collect();
        children.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.path().cmp(b.path())));
        children
    }
}

impl FileSystem for Fs {
    type Handle<'a> = Handle<'a>;

    fn open(&self, path: &str) -> Result<Handle<'_>, VfsError> {
        Fs::open(self, path)
    }

    fn read_all(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        Fs::read_all(self, path)
    }
}

/// An open entry.
///
/// The read offset and directory cursor belong to this handle alone; open one
/// handle per reader.
#[derive(Debug)]
pub struct Handle<'a> {
    fs: Option<&'a Fs>,
    file: &'a File,
    data: Option<Arc<[u8]>>,
    pos: u64,
    children: Option<Vec<&'a File>>,
    dir_pos: usize,
}

impl<'a> Handle<'a> {
    pub(crate) fn new(fs: Option<&'a Fs>, file: &'a File) -> Self {
        Self {
            fs,
            file,
            data: None,
            pos: 0,
            children: None,
            dir_pos: 0,
        }
    }

    /// Metadata of the opened entry.
    pub fn stat(&self) -> &'a File {
        self.file
    }

    /// List up to `count` entries beneath this directory, continuing where
    /// the previous call stopped. `count == 0` lists everything remaining.
    ///
    /// Returns nothing for files.
    pub fn read_dir(&mut self, count: usize) -> Vec<&'a File> {
        if !self.file.is_dir() {
            return Vec::new();
        }

        let (fs, file) = (self.fs, self.file);
        let children = self
            .children
            .get_or_insert_with(|| fs.map(|fs| fs.children(file)).unwrap_or_default());

        let remaining = children.len().saturating_sub(self.dir_pos);
        let take = if count == 0 {
            remaining
        } else {
            count.min(remaining)
        };
        let listed = children[self.dir_pos..self.dir_pos + take].to_vec();
        self.dir_pos += take;
        listed
    }

    /// Closing releases nothing: the backing store is immutable.
    pub fn close(self) -> io::Result<()> {
        Ok(())
    }

    fn content(&mut self) -> io::Result<&[u8]> {
        if self.data.is_none() {
            let data = self
                .file
                .bytes()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            self.data = Some(data);
        }
        Ok(self.data.as_deref().unwrap_or(&[]))
    }
}

impl Read for Handle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let pos = self.pos;
        let n = {
            let data = self.content()?;
            let start = usize::try_from(pos).unwrap_or(usize::MAX).min(data.len());
            let remaining = &data[start..];
            let n = remaining.len().min(buf.len());
            buf[..n].copy_from_slice(&remaining[..n]);
            n
        };
        self.pos += n as u64;
        Ok(n)
    }
}

impl Seek for Handle<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, offset) = match pos {
            SeekFrom::Start(n) => {
                self.pos = n;
                return Ok(n);
            }
            SeekFrom::End(n) => (self.content()?.len() as u64, n),
            SeekFrom::Current(n) => (self.pos, n),
        };

        match base.checked_add_signed(offset) {
            Some(n) => {
                self.pos = n;
                Ok(n)
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative or overflowing position",
            )),
        }
    }
}

//! Embedded file entries
//!
//! A [`File`] is one node of the embedded tree. Generated code builds them
//! with the `const` constructors ([`File::dir`], [`File::empty`],
//! [`File::file`]) from string literals; the packer builds them from owned
//! strings with [`File::from_parts`]. Both sides share this one type, so the
//! schema written at pack time is the schema read at run time.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::{const_mutex, Mutex};
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::codec;
use crate::error::DecodeError;
use crate::fs::Handle;

/// Permission bits reported for every embedded entry.
pub const MODE: u32 = 0o444;

/// One embedded file or directory.
#[derive(Debug)]
pub struct File {
    path: Cow<'static, str>,
    name: Cow<'static, str>,
    size: u64,
    mod_time: i64,
    is_dir: bool,
    payload: Option<Cow<'static, str>>,

    /// Decoded content; `None` until the first access (or after `reset`).
    cache: Mutex<Option<Arc<[u8]>>>,

    #[cfg(test)]
    decodes: AtomicUsize,
}

impl File {
    /// A directory entry.
    pub const fn dir(path: &'static str, name: &'static str, mod_time: i64) -> Self {
        Self {
            path: Cow::Borrowed(path),
            name: Cow::Borrowed(name),
            size: 0,
            mod_time,
            is_dir: true,
            payload: None,
            cache: const_mutex(None),
            #[cfg(test)]
            decodes: AtomicUsize::new(0),
        }
    }

    /// A zero-length file. Carries no payload.
    pub const fn empty(path: &'static str, name: &'static str, mod_time: i64) -> Self {
        Self {
            path: Cow::Borrowed(path),
            name: Cow::Borrowed(name),
            size: 0,
            mod_time,
            is_dir: false,
            payload: None,
            cache: const_mutex(None),
            #[cfg(test)]
            decodes: AtomicUsize::new(0),
        }
    }

    /// A file whose content is the codec-encoded `payload`.
    pub const fn file(
        path: &'static str,
        name: &'static str,
        mod_time: i64,
        size: u64,
        payload: &'static str,
    ) -> Self {
        Self {
            path: Cow::Borrowed(path),
            name: Cow::Borrowed(name),
            size,
            mod_time,
            is_dir: false,
            payload: Some(Cow::Borrowed(payload)),
            cache: const_mutex(None),
            #[cfg(test)]
            decodes: AtomicUsize::new(0),
        }
    }

    /// Build an entry from owned parts.
    ///
    /// Directories and zero-sized files never keep a payload, and directories
    /// always report size 0.
    pub fn from_parts(
        path: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        mod_time: i64,
        is_dir: bool,
        size: u64,
        payload: Option<String>,
    ) -> Self {
        let size = if is_dir { 0 } else { size };
        let payload = if is_dir || size == 0 {
            None
        } else {
            payload.map(Cow::Owned)
        };

        Self {
            path: path.into(),
            name: name.into(),
            size,
            mod_time,
            is_dir,
            payload,
            cache: const_mutex(None),
            #[cfg(test)]
            decodes: AtomicUsize::new(0),
        }
    }

    /// Virtual path, rooted at `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the decoded content; 0 for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Always [`MODE`]: the store is read-only.
    pub fn mode(&self) -> u32 {
        MODE
    }

    /// Modification time captured at pack time, in seconds since the epoch.
    pub fn mod_time_secs(&self) -> i64 {
        self.mod_time
    }

    /// Modification time as a [`SystemTime`].
    pub fn mod_time(&self) -> SystemTime {
        let offset = Duration::from_secs(self.mod_time.unsigned_abs());
        let time = if self.mod_time >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        };
        time.unwrap_or(UNIX_EPOCH)
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// The encoded payload text, if any.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Decoded content.
    ///
    /// The first call decodes the payload while holding the entry lock, so
    /// concurrent first callers decode once and share the result. A failed
    /// decode is returned to the caller and not cached.
    pub fn bytes(&self) -> Result<Arc<[u8]>, DecodeError> {
        let payload = match &self.payload {
            Some(payload) if !self.is_dir => payload,
            _ => return Ok(Arc::from(Vec::new())),
        };

        let mut cache = self.cache.lock();
        if let Some(data) = cache.as_ref() {
            return Ok(Arc::clone(data));
        }

        #[cfg(test)]
        self.decodes.fetch_add(1, Ordering::SeqCst);
        let data: Arc<[u8]> = codec::decode(payload)?.into();
        *cache = Some(Arc::clone(&data));
        Ok(data)
    }

    /// Whether the decoded content is currently cached.
    pub fn is_decoded(&self) -> bool {
        self.cache.lock().is_some()
    }

    /// Drop the cached content. The next access decodes again.
    ///
    /// Handles that already hold the content keep their copy.
    pub fn reset(&self) {
        *self.cache.lock() = None;
    }

    /// Open a handle over this entry alone.
    ///
    /// Without an owning [`Fs`](crate::Fs), `read_dir` lists nothing.
    pub fn open(&self) -> Handle<'_> {
        Handle::new(None, self)
    }

    /// Number of payload decodes this entry has run.
    #[cfg(test)]
    pub(crate) fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn text_file(path: &str, content: &[u8]) -> File {
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        File::from_parts(
            path.to_string(),
            name,
            1_700_000_000,
            false,
            content.len() as u64,
            Some(codec::encode(content).unwrap()),
        )
    }

    #[test]
    fn test_const_constructors() {
        static DIR: File = File::dir("/", "assets", 10);
        static EMPTY: File = File::empty("/empty.txt", "empty.txt", 20);

        assert!(DIR.is_dir());
        assert_eq!(DIR.size(), 0);
        assert!(DIR.payload().is_none());
        assert!(!EMPTY.is_dir());
        assert_eq!(EMPTY.bytes().unwrap().len(), 0);
        assert_eq!(EMPTY.mod_time_secs(), 20);
    }

    #[test]
    fn test_from_parts_drops_payload_for_dirs() {
        let dir = File::from_parts("/d", "d", 0, true, 4096, Some("junk".to_string()));
        assert_eq!(dir.size(), 0);
        assert!(dir.payload().is_none());
        assert_eq!(dir.bytes().unwrap().len(), 0);
    }

    #[test]
    fn test_metadata() {
        let file = text_file("/docs/readme.md", b"# readme");
        assert_eq!(file.path(), "/docs/readme.md");
        assert_eq!(file.name(), "readme.md");
        assert_eq!(file.size(), 8);
        assert_eq!(file.mode(), 0o444);
        assert_eq!(
            file.mod_time(),
            UNIX_EPOCH + Duration::from_secs(1_700_000_000)
        );
    }

    #[test]
    fn test_negative_mod_time() {
        let file = File::from_parts("/old", "old", -60, false, 0, None);
        assert_eq!(file.mod_time(), UNIX_EPOCH - Duration::from_secs(60));
    }

    #[test]
    fn test_lazy_decode_once_under_concurrency() {
        let content = b"hello world";
        let file = text_file("/concurrent/hello.txt", content);
        assert!(!file.is_decoded());

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..100)
                .map(|_| {
                    scope.spawn(|| {
                        let mut out = Vec::new();
                        file.open().read_to_end(&mut out).unwrap();
                        out
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), content);
            }
        });

        assert!(file.is_decoded());
        assert_eq!(file.decode_count(), 1);
    }

    #[test]
    fn test_reset_rearms_decode() {
        let file = text_file("/reset/data.bin", &[7u8; 300]);
        assert_eq!(file.bytes().unwrap().len(), 300);
        assert_eq!(file.bytes().unwrap().len(), 300);
        assert_eq!(file.decode_count(), 1);

        file.reset();
        assert!(!file.is_decoded());
        assert_eq!(&file.bytes().unwrap()[..], &[7u8; 300][..]);
        assert_eq!(file.decode_count(), 2);
    }

    #[test]
    fn test_decode_count_is_per_entry() {
        let first = text_file("/a/hello.txt", b"hello world");
        let second = text_file("/b/hello.txt", b"hello world");
        assert_eq!(first.payload(), second.payload());

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| first.bytes().unwrap());
                scope.spawn(|| second.bytes().unwrap());
            }
        });

        assert_eq!(first.decode_count(), 1);
        assert_eq!(second.decode_count(), 1);
    }

    #[test]
    fn test_corrupt_payload_is_not_cached() {
        let file = File::from_parts("/bad", "bad", 0, false, 3, Some("@@@".to_string()));
        assert!(file.bytes().is_err());
        assert!(!file.is_decoded());
        assert!(file.bytes().is_err());
        assert_eq!(file.decode_count(), 2);
    }
}

//! stowfs runtime
//!
//! Serves files that `stowfs-pack` embedded into generated Rust source:
//! - **codec**: gzip + base64 payload encoding, wrapped for readable sources
//! - **file**: one embedded entry with its lazily decoded content
//! - **fs**: the read-only filesystem, handles, and the `FileSystem` trait
//!
//! Generated code looks like this:
//!
//! ```text
//! use stowfs::{File, Fs};
//!
//! pub static Assets: LazyLock<Fs> = LazyLock::new(|| {
//!     Fs::new(vec![
//!         File::dir("/", "assets", 1700000000),
//!         File::file("/index.html", "index.html", 1700000000, 120, r"
//! H4sIAAAAAAAC/...
//! "),
//!     ])
//! });
//! ```

pub mod codec;
pub mod error;
pub mod file;
pub mod fs;

pub use error::{DecodeError, VfsError};
pub use file::{File, MODE};
pub use fs::{FileSystem, Fs, Handle};

/// Version of the entry literal schema emitted by the generator.
///
/// Generated sources assert this at compile time.
pub const SCHEMA_VERSION: u32 = 1;

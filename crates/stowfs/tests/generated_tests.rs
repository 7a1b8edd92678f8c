//! Integration tests over checked-in generated sources
//!
//! The fixtures are written in exactly the form the packer emits, so these
//! tests pin the generated-source contract against the runtime.

use std::io::{Read, Seek, SeekFrom};
use std::sync::Arc;
use std::thread;

use stowfs::{FileSystem, VfsError, MODE};

mod site {
    include!("fixtures/site.rs");
}

mod logo {
    include!("fixtures/logo_bin.rs");
}

use logo::AssetLogoBin;
use site::Site;

fn readme_text() -> String {
    format!("# Site docs\n\n{}\n", "Embedded with stowfs. ".repeat(40))
}

#[test]
fn test_read_generated_files() {
    assert_eq!(Site.read_all("/hello.txt").unwrap(), b"hello world\n");
    assert_eq!(Site.read_all("/docs/readme.md").unwrap(), readme_text().as_bytes());
    assert!(Site.read_all("/empty.txt").unwrap().is_empty());
}

#[test]
fn test_generated_metadata() {
    let hello = Site.get("/hello.txt").unwrap();
    assert_eq!(hello.name(), "hello.txt");
    assert_eq!(hello.size(), 12);
    assert_eq!(hello.mode(), MODE);
    assert_eq!(hello.mod_time_secs(), 1_700_000_400);
    assert!(!hello.is_dir());

    let docs = Site.get("/docs").unwrap();
    assert!(docs.is_dir());
    assert_eq!(docs.size(), 0);
}

#[test]
fn test_generated_listing() {
    let mut root = Site.open("/").unwrap();
    let names: Vec<&str> = root.read_dir(0).into_iter().map(|f| f.name()).collect();
    assert_eq!(names, ["docs", "empty.txt", "hello.txt", "readme.md"]);

    let mut docs = Site.open("/docs").unwrap();
    let first = docs.read_dir(1);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].path(), "/docs/readme.md");
    assert!(docs.read_dir(1).is_empty());
}

#[test]
fn test_missing_path() {
    assert!(matches!(Site.open("/nope"), Err(VfsError::NotFound(p)) if p == "/nope"));
    // Lookups are exact; no normalisation of trailing slashes.
    assert!(Site.open("/docs/").is_err());
}

#[test]
fn test_through_trait() {
    fn size_of<F: FileSystem>(fs: &F, path: &str) -> u64 {
        let mut handle = fs.open(path).unwrap();
        handle.seek(SeekFrom::End(0)).unwrap()
    }
    assert_eq!(size_of(&*Site, "/docs/readme.md"), readme_text().len() as u64);
}

#[test]
fn test_per_file_static() {
    let expected: Vec<u8> = (0..4).flat_map(|_| 0..=255u8).collect();
    assert_eq!(AssetLogoBin.size(), 1024);
    assert_eq!(&*AssetLogoBin.bytes().unwrap(), expected.as_slice());

    let mut handle = AssetLogoBin.open();
    handle.seek(SeekFrom::Start(1020)).unwrap();
    let mut tail = Vec::new();
    handle.read_to_end(&mut tail).unwrap();
    assert_eq!(tail, [252, 253, 254, 255]);
    assert!(handle.read_dir(0).is_empty());
}

#[test]
fn test_concurrent_first_reads() {
    let results: Vec<Arc<[u8]>> = thread::scope(|s| {
        let workers: Vec<_> = (0..16)
            .map(|_| s.spawn(|| Site.get("/docs/readme.md").unwrap().bytes().unwrap()))
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    for data in &results {
        assert_eq!(&**data, readme_text().as_bytes());
        assert!(Arc::ptr_eq(data, &results[0]));
    }
}

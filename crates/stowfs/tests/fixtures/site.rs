// Code generated by stowfs for module `fixtures`. DO NOT EDIT.

use std::sync::LazyLock;

use stowfs::{File, Fs};

const _: () = assert!(
    stowfs::SCHEMA_VERSION == 1,
    "generated for stowfs schema version 1"
);

#[allow(non_upper_case_globals)]
pub static Site: LazyLock<Fs> = LazyLock::new(|| {
    Fs::new(vec![
        File::dir("/", "site", 1700000000),
        File::dir("/docs", "docs", 1700000100),
        File::file("/docs/readme.md", "readme.md", 1700000200, 894, r"
H4sIAAAAAAACA1NWCM4sSVVIyU8u5uJyzU1KTUlJTVEozyzJUCguyS9PK9ZTGBUdFR0VpYUoFwDHKBKr
fgMAAA==
"),
        File::empty("/empty.txt", "empty.txt", 1700000300),
        File::file("/hello.txt", "hello.txt", 1700000400, 12, r"
H4sIAAAAAAACA8tIzcnJVyjPL8pJ4QIALTsIrwwAAAA=
"),
    ])
});

//! Payload codec
//!
//! Turns arbitrary bytes into text that can sit inside a Rust raw string
//! literal, and back:
//!
//! ```text
//! bytes ──gzip(best)──▶ compressed ──base64──▶ wrapped text
//! ```
//!
//! The wrapped text starts with a line break and breaks after every
//! [`LINE_WIDTH`] characters, so generated sources stay readable and diff
//! line by line. Decoding ignores all ASCII whitespace.

use std::io::{self, Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::DecodeError;

/// Number of encoded characters per payload line.
pub const LINE_WIDTH: usize = 80;

/// Compress and encode `data` into wrapped base64 text.
///
/// Only the compressor's writer can fail, and it writes into memory, so this
/// succeeds for every input. Empty input still produces a valid stream;
/// callers that embed files should omit the payload for empty contents
/// instead.
pub fn encode(data: &[u8]) -> io::Result<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;

    Ok(wrap(&STANDARD.encode(compressed)))
}

/// Decode text produced by [`encode`] back into the original bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let compressed = STANDARD.decode(compact)?;

    let mut decoder = GzDecoder::new(&compressed[..]);
    let mut data = Vec::new();
    decoder
        .read_to_end(&mut data)
        .map_err(DecodeError::Decompress)?;
    Ok(data)
}

/// Frame base64 text: leading newline, then one newline per full or final line.
fn wrap(encoded: &str) -> String {
    let lines = encoded.len().div_ceil(LINE_WIDTH);
    let mut out = String::with_capacity(encoded.len() + lines + 1);
    out.push('\n');
    // base64 output is ASCII, so byte chunks are char boundaries
    for chunk in encoded.as_bytes().chunks(LINE_WIDTH) {
        out.extend(chunk.iter().map(|&b| b as char));
        out.push('\n');
    }
    out
}

//! Binary sniffing and lossy text reading

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::domain::FileContent;

/// Number of leading bytes inspected when sniffing for binary content.
const SNIFF_BYTES: usize = 8192;

/// Check whether a byte chunk looks binary: a NUL byte, or bytes that are not UTF-8.
///
/// A multibyte sequence cut off at the end of the chunk is not counted as invalid.
pub fn looks_binary(chunk: &[u8]) -> bool {
    if chunk.contains(&0) {
        return true;
    }
    match std::str::from_utf8(chunk) {
        Ok(_) => false,
        Err(e) => e.error_len().is_some(),
    }
}

/// Check whether a file is binary by reading its first chunk.
///
/// Files that cannot be opened or read are reported as binary.
pub fn is_binary_file(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return true,
    };
    let mut chunk = Vec::with_capacity(SNIFF_BYTES);
    match file.by_ref().take(SNIFF_BYTES as u64).read_to_end(&mut chunk) {
        Ok(_) => looks_binary(&chunk),
        Err(_) => true,
    }
}

/// Read a file for rendering. Invalid UTF-8 is replaced rather than rejected.
pub fn read_file_safe(path: &Path) -> FileContent {
    if is_binary_file(path) {
        return FileContent::Binary;
    }
    match fs::read(path) {
        Ok(bytes) => FileContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read file");
            FileContent::Binary
        }
    }
}

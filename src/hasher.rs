//! Directory hash computation for shadow repository keys.
//!
//! The hash is a 31-multiplier rolling hash over UTF-16 code units with
//! unsigned 32-bit wraparound, rendered in decimal and truncated to at most
//! [`DIRECTORY_HASH_MAX_DIGITS`] characters. Existing checkpoint stores are
//! keyed by this exact output, so the iteration unit must stay UTF-16 (not
//! UTF-8 bytes, not `char`s).

use crate::error::CheckpointError;
use crate::types::{DirectoryHash, DIRECTORY_HASH_MAX_DIGITS};
use std::path::Path;

/// Compute the DirectoryHash for a workspace path string.
pub fn hash_working_dir(working_dir: &str) -> Result<DirectoryHash, CheckpointError> {
    if working_dir.is_empty() {
        return Err(CheckpointError::EmptyPath);
    }

    let hash = working_dir
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_mul(31).wrapping_add(u32::from(unit)));

    let digits: String = u64::from(hash)
        .to_string()
        .chars()
        .take(DIRECTORY_HASH_MAX_DIGITS)
        .collect();

    Ok(DirectoryHash::from_digits(digits))
}

/// Compute the DirectoryHash for a workspace path.
///
/// Non-UTF-8 path segments are replaced with U+FFFD before hashing.
pub fn hash_workspace_path(workspace: &Path) -> Result<DirectoryHash, CheckpointError> {
    hash_working_dir(&workspace.to_string_lossy())
}

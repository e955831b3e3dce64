//! Capability-based file access for the route planner's inputs.
//!
//! Every helper opens the parent directory with ambient authority and then
//! works relative to that handle, so callers only deal in UTF-8 paths.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Directory handle for `path`'s parent plus the final path component.
///
/// A bare file name resolves against the current directory.
///
/// # Errors
///
/// Fails when `path` has no file name or the parent cannot be opened.
fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Read a whole UTF-8 text file.
///
/// # Errors
///
/// Fails when the file is missing, unreadable, or not valid UTF-8.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.read_to_string(name)
}

/// Whether `path` exists and is a regular file.
///
/// # Errors
///
/// Returns [`io::ErrorKind::NotFound`] when `path` or its parent is missing.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

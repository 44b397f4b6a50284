/// Path handling shared by the local workspace commands.
use std::io;
use std::path::{Path, PathBuf};

/// Expand `~` and make the path absolute without requiring it to exist.
///
/// # Errors
///
/// Returns the I/O error if the current directory cannot be read.
pub fn expand(path: &Path) -> io::Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());
    std::path::absolute(expanded)
}

mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::{GateError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Resolve the input paths to the sorted, de-duplicated list of files to analyze.
///
/// Directories are walked with `scanner`. A file given directly is kept only
/// if `filter` accepts it.
///
/// # Errors
/// Returns [`GateError::InvalidPath`] for a path that does not exist.
pub fn discover_files<S, F>(paths: &[PathBuf], scanner: &S, filter: &F) -> Result<Vec<PathBuf>>
where
    S: FileScanner,
    F: FileFilter,
{
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scanner.scan(path)?);
        } else if path.is_file() {
            if filter.should_include(path) {
                files.push(path.clone());
            } else {
                tracing::info!(path = %path.display(), "file does not match the extension filter");
            }
        } else {
            return Err(GateError::InvalidPath(path.clone()));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

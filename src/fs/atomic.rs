//! Atomic file write operations.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the target directory
//! 2. Sync the file to disk
//! 3. Rename it over the target path
//!
//! On POSIX, `rename()` atomically replaces the destination when source and
//! target are on the same filesystem, so a crash mid-write can leave behind
//! a stray `.{filename}.tmp` but never a truncated target. The parent
//! directory is created if it does not exist.

use crate::error::{ResumakeError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ResumakeError::IoError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace_file(&temp_path, path)?;

    Ok(())
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around [`atomic_write`] for text content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary file path in the same directory as the target, so the final
/// rename stays on one filesystem.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ResumakeError::IoError(format!("invalid file path '{}'", target.display())))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ResumakeError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        ResumakeError::IoError(format!("failed to write temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        ResumakeError::IoError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // On non-POSIX platforms rename may refuse to replace an existing
    // target, so remove it first.
    #[cfg(not(unix))]
    if target.exists() {
        let _ = fs::remove_file(target);
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        ResumakeError::IoError(format!("failed to replace '{}': {}", target.display(), e))
    })?;

    // Sync the parent directory so the rename itself is durable
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resume.tex");

        atomic_write_file(&path, "\\documentclass{article}").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\\documentclass{article}"
        );
    }

    #[test]
    fn replaces_existing_content_completely() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resume.tex");

        fs::write(&path, "a much longer original document body").unwrap();
        atomic_write_file(&path, "short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output").join("nested").join("cv.tex");

        atomic_write_file(&path, "content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn existing_parent_directory_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("output");
        fs::create_dir_all(&dir).unwrap();

        atomic_write_file(dir.join("cv.tex"), "one").unwrap();
        atomic_write_file(dir.join("cv.tex"), "two").unwrap();

        assert_eq!(fs::read_to_string(dir.join("cv.tex")).unwrap(), "two");
    }

    #[test]
    fn leaves_no_temp_file_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resume.tex");

        atomic_write_file(&path, "content").unwrap();

        assert!(!temp_dir.path().join(".resume.tex.tmp").exists());
    }

    #[test]
    fn temp_path_is_in_target_directory() {
        let temp = temp_path_for(Path::new("/some/dir/file.tex")).unwrap();
        assert_eq!(temp, Path::new("/some/dir/.file.tex.tmp"));
    }

    #[test]
    fn empty_content_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.tex");

        atomic_write(&path, b"").unwrap();

        assert!(fs::read(&path).unwrap().is_empty());
    }

    #[test]
    fn write_failure_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // Target "directory" is actually a file, so creating the temp file
        // underneath it fails.
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();

        let result = atomic_write_file(blocker.join("resume.tex"), "content");
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().exit_code(),
            crate::exit_codes::IO_FAILURE
        );
    }
}

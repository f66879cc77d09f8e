use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
}

/// Read a text file
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Replace `dst` with a recursive copy of `src`.
///
/// A missing `src` is not an error: nothing is copied and `dst` is left
/// untouched. Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, IoError> {
    if !src.exists() {
        log::debug!("Nothing to copy, {} does not exist", src.display());
        return Ok(0);
    }
    if !src.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "{} is not a directory",
            src.display()
        )));
    }

    if dst.exists() {
        log::info!("Removing existing directory {}", dst.display());
        fs::remove_dir_all(dst).map_err(IoError::Io)?;
    }

    let copied = copy_entries(src, dst)?;
    log::info!(
        "Finished copying {} to {} ({copied} files)",
        src.display(),
        dst.display()
    );
    Ok(copied)
}

fn copy_entries(src: &Path, dst: &Path) -> Result<usize, IoError> {
    log::debug!("Creating directory {}", dst.display());
    fs::create_dir_all(dst).map_err(IoError::Io)?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copied += copy_entries(&from, &to)?;
        } else {
            log::debug!("Copying file from {} to {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(IoError::Io)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Scan for markdown files below `root`, sorted by path
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "content directory not found: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

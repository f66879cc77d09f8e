use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

/// A markdown source file addressed relative to the content directory
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPage {
    relative_path: RelativePathBuf,
    output_path: RelativePathBuf,
}

impl ContentPage {
    /// Create a new ContentPage from a path relative to the content root
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let output_path = relative_path.with_extension("html");
        Self {
            relative_path,
            output_path,
        }
    }

    /// Create from a file found under `content_root`.
    ///
    /// Returns `None` when `path` is not below `content_root`.
    pub fn from_content_file(content_root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(content_root).ok()?;
        let relative = RelativePathBuf::from_path(relative).ok()?;
        Some(Self::new(relative))
    }

    /// Get the markdown path relative to the content root
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the generated page path relative to the output root (`.md` becomes `.html`)
    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }
}

impl From<&str> for ContentPage {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}

//! # Site Generation
//!
//! Turns a content directory of markdown files into HTML pages:
//!
//! - **`page`**: `ContentPage`, mapping `x/y.md` under the content root to `x/y.html`
//! - **`template`**: `{{ Title }}` / `{{ Content }}` substitution and base-path rewriting
//!
//! Conversion itself is delegated to [`markdown_to_html`] and
//! [`extract_title`]; this module only reads, fills templates and writes.

pub mod page;
pub mod template;

pub use page::ContentPage;
pub use template::render_template;

use std::path::{Path, PathBuf};

use crate::io::{self, IoError};
use crate::parsing::{ConvertError, markdown_to_html, title::TitleError, title::extract_title};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to convert {path}: {source}")]
    Convert { path: PathBuf, source: ConvertError },
    #[error("Failed to extract title from {path}: {source}")]
    Title { path: PathBuf, source: TitleError },
}

/// Where a site is read from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
    pub base_path: String,
}

/// What a full site build produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub copied_files: usize,
    pub pages: Vec<ContentPage>,
}

/// Generate one page from a markdown file and a template file.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::debug!(
        "Generating page from {} to {} using template {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = io::read_file(from_path)?;
    let template = io::read_file(template_path)?;
    write_page(from_path, &markdown, &template, dest_path, base_path)
}

/// Generate a page for every markdown file below `content_dir`.
///
/// The directory layout is mirrored under `dest_dir`. Stops at the first
/// page that fails.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<ContentPage>, SiteError> {
    let template = io::read_file(template_path)?;
    let mut pages = Vec::new();

    for source in io::scan_markdown_files(content_dir)? {
        let Some(page) = ContentPage::from_content_file(content_dir, &source) else {
            log::warn!("Skipping {} outside of {}", source.display(), content_dir.display());
            continue;
        };
        let dest = page.output_path().to_path(dest_dir);
        log::debug!("Generating page {} -> {}", source.display(), dest.display());

        let markdown = io::read_file(&source)?;
        write_page(&source, &markdown, &template, &dest, base_path)?;
        pages.push(page);
    }

    log::info!("Generated {} pages into {}", pages.len(), dest_dir.display());
    Ok(pages)
}

/// Copy static assets into the output directory, then generate every page.
pub fn build_site(options: &SiteOptions) -> Result<BuildSummary, SiteError> {
    let copied_files = io::copy_dir_recursive(&options.static_dir, &options.output_dir)?;
    let pages = generate_pages_recursive(
        &options.content_dir,
        &options.template_path,
        &options.output_dir,
        &options.base_path,
    )?;
    Ok(BuildSummary {
        copied_files,
        pages,
    })
}

fn write_page(
    source: &Path,
    markdown: &str,
    template: &str,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    let content = markdown_to_html(markdown).map_err(|source_err| SiteError::Convert {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let title = extract_title(markdown).map_err(|source_err| SiteError::Title {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let html = render_template(template, &title, &content, base_path);
    io::write_file(dest, &html)?;
    Ok(())
}

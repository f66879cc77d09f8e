use super::blocks::kinds::Heading;

/// No level-1 heading in the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("No title found in markdown")]
    NotFound,
}

/// Returns the text of the first level-1 heading line (`# `), trimmed.
///
/// Reads raw lines, so a `# ` line inside a code block still counts.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown
        .lines()
        .find(|line| Heading::level(line) == Some(1))
        .and_then(|line| line.strip_prefix(Heading::PREFIX))
        .map(|text| text.trim().to_string())
        .ok_or(TitleError::NotFound)
}

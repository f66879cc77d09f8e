use std::sync::OnceLock;

use regex::Regex;

use super::TargetMatch;

/// Inline image `![alt](url)`.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\]]*)\]\(([^)]*)\)";

    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }

    /// Finds every image in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<TargetMatch<'_>> {
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| {
                Some(TargetMatch {
                    range: caps.get(0)?.range(),
                    text: caps.get(1)?.as_str(),
                    url: caps.get(2)?.as_str(),
                })
            })
            .collect()
    }

    /// Finds every image in `text` as `(alt, url)` pairs.
    #[cfg(test)]
    fn extract(text: &str) -> Vec<(&str, &str)> {
        Self::find_all(text)
            .into_iter()
            .map(|m| (m.text, m.url))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extract_single_image() {
        assert_eq!(
            Image::extract("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)"),
            vec![("image", "https://i.imgur.com/zjjcJKZ.png")]
        );
    }

    #[test]
    fn extract_images_in_text() {
        assert_eq!(
            Image::extract("Start ![img1](url1) middle ![img2](url2) end"),
            vec![("img1", "url1"), ("img2", "url2")]
        );
    }

    #[test]
    fn extract_empty_alt_and_special_chars() {
        assert_eq!(Image::extract("![](/path/to/img.png)"), vec![("", "/path/to/img.png")]);
        assert_eq!(
            Image::extract("![img!@#](url?query=value)"),
            vec![("img!@#", "url?query=value")]
        );
    }

    #[test]
    fn plain_links_are_not_images() {
        assert!(Image::extract("[link](page.html)").is_empty());
        assert!(Image::extract("").is_empty());
    }
}

/// Placeholder replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder replaced with the converted page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Fills a page template and points root-relative URLs at `base_path`.
///
/// `href="/` and `src="/` become `href="{base_path}` and `src="{base_path}`,
/// so a base path of `/` leaves them unchanged. The base path should end in `/`.
pub fn render_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

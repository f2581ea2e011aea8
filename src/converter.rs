//! The HTML to Markdown conversion seam.
//!
//! The filter never looks inside the HTML itself; it hands the whole document
//! to an [`HtmlConverter`]. [`HtmdConverter`] is the implementation the
//! binary uses.

use crate::error::ConversionError;
use htmd::options::{CodeBlockStyle, HeadingStyle, Options};
use htmd::HtmlToMarkdown;

/// Converts a complete HTML document into Markdown text.
pub trait HtmlConverter {
    fn convert(&self, html: &str) -> Result<String, ConversionError>;
}

impl<F> HtmlConverter for F
where
    F: Fn(&str) -> Result<String, ConversionError>,
{
    fn convert(&self, html: &str) -> Result<String, ConversionError> {
        self(html)
    }
}

/// Converter backed by the `htmd` crate: ATX headings, `**` for strong
/// emphasis, inline links, fenced code blocks and GFM pipe tables.
pub struct HtmdConverter {
    inner: HtmlToMarkdown,
}

impl HtmdConverter {
    pub fn new() -> Self {
        let mut options = Options::default();
        options.heading_style = HeadingStyle::Atx;
        options.code_block_style = CodeBlockStyle::Fenced;

        Self {
            inner: HtmlToMarkdown::builder().options(options).build(),
        }
    }
}

impl Default for HtmdConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlConverter for HtmdConverter {
    fn convert(&self, html: &str) -> Result<String, ConversionError> {
        Ok(self.inner.convert(html)?)
    }
}

/// Converts `html` with the default converter.
pub fn convert(html: &str) -> Result<String, ConversionError> {
    HtmdConverter::new().convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_empty_document() {
        let markdown = convert("").unwrap();
        assert!(markdown.trim().is_empty());
    }

    #[test]
    fn converts_heading_to_atx() {
        let markdown = convert("<h1>Title</h1>").unwrap();
        assert!(markdown.contains("# Title"));
    }

    #[test]
    fn converts_strong_and_link() {
        let markdown =
            convert(r#"<p><strong>bold</strong> and <a href="https://example.com">link</a></p>"#)
                .unwrap();
        assert!(markdown.contains("**bold**"));
        assert!(markdown.contains("[link](https://example.com)"));
    }

    #[test]
    fn closure_acts_as_converter() {
        let shout = |html: &str| -> Result<String, ConversionError> { Ok(html.to_uppercase()) };
        assert_eq!(shout.convert("<b>hi</b>").unwrap(), "<B>HI</B>");
    }
}

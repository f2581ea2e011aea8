//! `html2md_filter` turns a complete HTML document into Markdown.
//!
//! It powers the `html2md-filter` command, which reads HTML from standard
//! input and prints Markdown to standard output. The conversion itself is
//! delegated to an [`HtmlConverter`]; this crate only sequences reading,
//! converting and writing so that output is all-or-nothing.
//!
//! # Example
//!
//! ```rust
//! use html2md_filter::{filter, HtmdConverter};
//!
//! # fn demo() -> Result<(), html2md_filter::error::FilterError> {
//! let mut markdown = Vec::new();
//! filter::run("<h1>Title</h1>".as_bytes(), &mut markdown, &HtmdConverter::new())?;
//! assert!(String::from_utf8_lossy(&markdown).contains("# Title"));
//! # Ok(())
//! # }
//! ```

pub mod converter;
pub mod error;
pub mod filter;

pub use converter::{convert, HtmdConverter, HtmlConverter};

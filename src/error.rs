//! Defines custom error types for the filter.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a filter run fails. Every variant is terminal.
pub enum FilterError {
    #[error("Error reading stdin: {0}")]
    Input(#[source] io::Error),

    #[error("Error converting HTML to Markdown: {0}")]
    Conversion(#[source] ConversionError),

    #[error("Error writing stdout: {0}")]
    Output(#[source] io::Error),
}

/// Failure reported by an [`HtmlConverter`](crate::converter::HtmlConverter).
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ConversionError {
    message: String,
    #[source]
    source: Option<io::Error>,
}

impl ConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

impl From<io::Error> for ConversionError {
    fn from(err: io::Error) -> Self {
        Self {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

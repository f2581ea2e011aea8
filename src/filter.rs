//! The read → convert → write pipeline.

use crate::converter::HtmlConverter;
use crate::error::FilterError;
use std::io::{self, Read, Write};

/// Reads `reader` to end-of-stream and decodes it as UTF-8.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected, so
/// only an I/O failure makes this step fail.
pub fn read_input<R: Read>(mut reader: R) -> Result<String, FilterError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(FilterError::Input)?;
    log::debug!("Read {} bytes of HTML", buf.len());

    match String::from_utf8(buf) {
        Ok(html) => Ok(html),
        Err(err) => {
            log::warn!(
                "Input is not valid UTF-8 (first invalid byte at offset {}); invalid sequences were replaced.",
                err.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Runs the whole filter: reads all of `reader`, converts it, then writes the
/// Markdown to `writer` in one go.
///
/// Nothing is written unless reading and conversion both succeeded. A reader
/// that hangs up early (`EPIPE`) ends the run quietly, like a filter killed by
/// `SIGPIPE`.
pub fn run<R, W, C>(reader: R, mut writer: W, converter: &C) -> Result<(), FilterError>
where
    R: Read,
    W: Write,
    C: HtmlConverter + ?Sized,
{
    let html = read_input(reader)?;

    let markdown = converter
        .convert(&html)
        .map_err(FilterError::Conversion)?;
    log::debug!("Converted to {} bytes of Markdown", markdown.len());

    match writer
        .write_all(markdown.as_bytes())
        .and_then(|()| writer.flush())
    {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed early: {err}");
            Ok(())
        }
        Err(err) => Err(FilterError::Output(err)),
    }
}

//! Interactive URL entry used when no URL is passed on the command line

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Text shown before reading a URL from standard input
pub const PROMPT: &str = "Enter the APK download URL: ";

/// Prompt on `output` and read one line from `input`.
///
/// Surrounding whitespace is trimmed. A blank line or end of input yields
/// [`Error::MissingUrl`].
pub fn read_url<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let url = line.trim();
    if url.is_empty() {
        return Err(Error::MissingUrl);
    }
    Ok(url.to_string())
}

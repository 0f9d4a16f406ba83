//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};

pub mod batch;
pub mod entities;
pub mod info;
pub mod parse;
pub mod schema;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Resolve the text a command operates on.
///
/// Uses the positional `text` when given, otherwise the contents of `file`,
/// otherwise stdin. File and stdin input lose one trailing line ending; the
/// positional argument is used exactly as given.
pub fn read_text_input(
    text: Option<String>,
    file: Option<&Utf8PathBuf>,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    if let Some(text) = text {
        check_size("argument", text.len(), max_bytes)?;
        return Ok(text);
    }

    let content = if let Some(path) = file {
        read_input_file(path, max_bytes)?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        check_size("stdin", buf.len(), max_bytes)?;
        buf
    };
    Ok(strip_line_ending(content))
}

fn check_size(source: &str, size: usize, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        anyhow::bail!("input too large: {source} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

/// Drop a single trailing `\n` or `\r\n`.
fn strip_line_ending(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}

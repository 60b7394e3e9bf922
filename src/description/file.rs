//! Description files on disk.

use super::error::DescriptionError;
use super::parser::{parse_description_with, DescriptionFile};
use crate::config::AcceptorConfig;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Read and parse a description file.
pub fn read_description(
    path: &Path,
    config: &AcceptorConfig,
) -> Result<DescriptionFile, DescriptionError> {
    let text = fs::read_to_string(path)?;
    let file = parse_description_with(&text, config)?;
    info!(
        path = %path.display(),
        inputs = file.inputs.len(),
        "description loaded"
    );
    Ok(file)
}

/// Append input strings to a description file, one per line.
///
/// A newline is inserted first when the file does not already end with one,
/// so the first appended string never merges with the last existing line.
/// Returns the number of strings written.
pub fn append_inputs<I, S>(path: &Path, inputs: I) -> Result<usize, DescriptionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let needs_newline = match fs::read(path) {
        Ok(bytes) => bytes.last().is_some_and(|&b| b != b'\n'),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => return Err(e.into()),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_newline {
        writeln!(file)?;
    }

    let mut written = 0;
    for input in inputs {
        let input = input.as_ref();
        debug!(input, "appending input");
        writeln!(file, "{input}")?;
        written += 1;
    }
    file.flush()?;

    info!(path = %path.display(), written, "inputs appended");
    Ok(written)
}

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{TreeError, TreeResult};

/// Read the root directory from the first non-blank line of `reader`
pub fn read_root_path<R: BufRead>(reader: R) -> TreeResult<PathBuf> {
    for line in reader.lines() {
        let line = line.map_err(TreeError::Input)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    Err(TreeError::EmptyInput)
}

/// Prompt on stderr and read the root directory from standard input
pub fn prompt_root_path() -> TreeResult<PathBuf> {
    let mut stderr = std::io::stderr();
    // The prompt is cosmetic; a closed stderr should not stop the run.
    let _ = write!(stderr, "Please enter directory path: ");
    let _ = stderr.flush();

    read_root_path(std::io::stdin().lock())
}

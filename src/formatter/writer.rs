use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{TreeError, TreeResult};

/// Create or truncate `path`, write all of `bytes`, and return the byte count.
///
/// A failed write leaves whatever was already written in place.
pub fn persist(bytes: &[u8], path: &Path) -> TreeResult<usize> {
    let mut file =
        File::create(path).map_err(|e| TreeError::persistence(path.to_path_buf(), e))?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| TreeError::persistence(path.to_path_buf(), e))?;
    Ok(bytes.len())
}

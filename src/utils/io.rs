//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Map an `io::Error` raised while operating on `path`.
///
/// Missing paths become `path.not_found`; everything else is `internal.io_error`
/// with the operation recorded as context.
pub fn map_io_error(err: io::Error, path: &Path, operation: &str) -> Error {
    let context = format!("{} {}", operation, path.display());
    match err.kind() {
        io::ErrorKind::NotFound => Error::path_not_found(path.display().to_string(), Some(context)),
        _ => Error::internal_io(err.to_string(), Some(context)),
    }
}

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| map_io_error(e, path, operation))
}

/// Write content to file with standardized error handling.
pub fn write_file(path: &Path, content: &[u8], operation: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| map_io_error(e, path, operation))
}

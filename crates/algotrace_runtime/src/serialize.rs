//! Trace serialization and deserialization using `MessagePack`.
//!
//! Saved traces are re-validated on load: a file whose steps break the
//! trace invariants is rejected rather than handed to a player.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use algotrace_foundation::{Error, ErrorKind, Result};

use crate::trace::AnyTrace;

/// Serializes a trace to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(trace: &AnyTrace) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(trace)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a trace from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails or the steps do not form a
/// valid trace.
pub fn from_bytes(bytes: &[u8]) -> Result<AnyTrace> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Saves a trace to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(trace: &AnyTrace, path: P) -> Result<()> {
    let path = path.as_ref();
    let io_error = |action: &str, e: std::io::Error| {
        Error::new(ErrorKind::IoError(format!(
            "failed to {action} file '{}': {e}",
            path.display()
        )))
    };

    let bytes = to_bytes(trace)?;
    let file = File::create(path).map_err(|e| io_error("create", e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| io_error("write to", e))?;
    writer.flush().map_err(|e| io_error("flush", e))?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved trace");
    Ok(())
}

/// Loads a trace from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<AnyTrace> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    let trace = from_bytes(&bytes)?;
    tracing::info!(
        path = %path.display(),
        algorithm = %trace.algorithm(),
        steps = trace.len(),
        "loaded trace"
    );
    Ok(trace)
}

//! JSON report file

use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::Result;

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Serialize `data` and overwrite `path` with it.
///
/// The data is fully serialized before the file is touched, so a
/// serialization failure leaves any previous file in place.
pub fn write_json_file<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<()> {
    let contents = format_json(data)?;
    fs::write(path, &contents)?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

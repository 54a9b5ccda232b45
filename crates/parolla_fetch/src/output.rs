use std::path::{Path, PathBuf};

use parolla_core::{Error, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

const INDENT: &[u8] = b"    ";

/// `{dir}/{prefix}{index}.json`, index rendered without padding.
pub fn output_path(dir: &Path, prefix: &str, index: u32) -> PathBuf {
    dir.join(format!("{}{}.json", prefix, index))
}

/// Four-space indented JSON. Keys keep their document order and non-ASCII
/// text is written as-is.
pub fn to_pretty_bytes(value: &Value) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Creates `dir` and any missing parents; an existing directory is left alone.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| Error::filesystem(dir, e))
}

/// Writes `value` to `path`, truncating whatever was there.
pub async fn write_pretty(path: &Path, value: &Value) -> Result<()> {
    let bytes = to_pretty_bytes(value)?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| Error::filesystem(path, e))
}

//! Output file writing.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Namespaces;
use crate::error::Result;
use crate::serializer::OutputFormat;
use crate::sink::GraphSink;

/// Write `content` to `output_file`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// An existing graph is never left half written.
pub fn write_atomic(content: &str, output_file: &Path) -> Result<PathBuf> {
    if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = output_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = output_file.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(&temp_file, output_file)?;

    Ok(output_file.to_path_buf())
}

/// Serialize a graph and save it.
pub fn save_graph(
    sink: &GraphSink,
    format: OutputFormat,
    namespaces: &Namespaces,
    output_file: &Path,
) -> Result<PathBuf> {
    write_atomic(&sink.serialize(format, namespaces), output_file)
}

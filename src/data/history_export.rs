use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::HISTORY_EXPORT_FILENAME;
use crate::error::PoiResult;
use crate::models::PriceHistory;

/// Write the history artifact (pretty JSON array, oldest first)
pub fn write_history(path: &Path, history: &PriceHistory) -> PoiResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(history.to_json_pretty()?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Export target in the working directory
pub fn default_history_path() -> PathBuf {
    PathBuf::from(HISTORY_EXPORT_FILENAME)
}

use std::io;
use std::path::Path;

use burncharts::services::record_files::RecordFormat;

/// Serializes into memory first so a failed serialization leaves no partial file.
pub fn write_output<F>(output: &Path, serialize: F) -> io::Result<()>
where
    F: FnOnce(&mut Vec<u8>, RecordFormat) -> io::Result<()>,
{
    let mut buffer = Vec::new();
    serialize(&mut buffer, RecordFormat::from_path(output))?;
    std::fs::write(output, buffer)
}

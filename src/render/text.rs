use crate::error::{CalcError, CalcResult};
use crate::model::ResultEntry;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use tracing::info;

/// Render one `<name>: <value>` line per entry, values with two decimals.
pub fn render_text_report(entries: &[ResultEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}: {:.2}\n", entry.name, entry.value))
        .collect()
}

/// Write the rendered report to `path`, replacing any existing file.
///
/// The text goes to a temporary file next to `path` first and is renamed
/// into place once fully flushed, so a failed write never leaves a partial
/// report behind. An existing report keeps its permissions; a new one gets
/// the same mode a plain `File::create` would.
pub fn write_report(path: &Path, entries: &[ResultEntry]) -> CalcResult<()> {
    let text = render_text_report(entries);

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = create_temp(dir, path).map_err(|e| CalcError::io(path, e))?;
    tmp.write_all(text.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| CalcError::io(path, e))?;
    tmp.persist(path).map_err(|e| CalcError::io(path, e.error))?;

    info!(path = %path.display(), lines = entries.len(), "wrote report");
    Ok(())
}

fn create_temp(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".arith-report");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Subject to the process umask, like `File::create`.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let tmp = builder.tempfile_in(dir)?;
    if let Ok(meta) = fs::metadata(target) {
        if meta.is_file() {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
    }
    Ok(tmp)
}

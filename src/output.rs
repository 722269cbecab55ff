use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::{Builder, NamedTempFile};

/// Render a document as 2-space indented JSON.
///
/// Non-ASCII text is written as literal UTF-8, never as `\u` escapes.
pub fn render_document(document: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}

/// Replace `path` with `contents`, or leave it untouched on failure.
///
/// The data goes to a temporary file next to the target which is then renamed
/// over it, so a reader never observes a half-written file. An existing
/// target keeps its permissions, and a symlinked target is written through.
pub fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let target = resolve_target(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = new_temp_file(dir)?;
    if let Ok(metadata) = fs::metadata(&target) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    file.write_all(contents)?;
    file.flush()?;
    file.as_file().sync_all()?;
    file.persist(&target).map_err(|e| e.error)?;

    Ok(())
}

/// Follow a symlink to the file it points at; dangling links are replaced
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

// 0666 before the umask, same as a file opened for writing
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

//! Output file lifecycle.
//!
//! The body goes to a `.part` sibling first, is synced, and is then renamed over
//! the final path, so the output path only ever holds a complete file. A part
//! file that is dropped without `finalize` is closed and deleted.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// `output.pdf` -> `output.pdf.part`, in the same directory so the rename stays on one filesystem.
pub fn temp_path_for(final_path: &Path) -> PathBuf {
    let mut name: OsString = final_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(TEMP_SUFFIX);
    final_path.with_file_name(name)
}

/// Scoped temp file that becomes `final_path` on `finalize`.
pub struct PartFile {
    file: Option<File>,
    temp_path: PathBuf,
    final_path: PathBuf,
    written: u64,
}

impl PartFile {
    /// Create (or truncate) the part file next to `final_path`. The parent directory must exist.
    /// A path without a file name (`""`, `dir/..`) is rejected before anything is opened.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        if final_path.file_name().is_none() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("output path has no file name: {}", final_path.display()),
            ));
        }
        let temp_path = temp_path_for(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        Ok(PartFile {
            file: Some(file),
            temp_path,
            final_path: final_path.to_path_buf(),
            written: 0,
        })
    }

    #[cfg(test)]
    pub(crate) fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    pub fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "part file already closed"))?;
        file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Sync, close and rename over the final path. Returns bytes written.
    /// An existing file at the final path is replaced.
    pub fn finalize(mut self) -> io::Result<u64> {
        if let Some(file) = self.file.take() {
            file.sync_all()?;
        }
        std::fs::rename(&self.temp_path, &self.final_path)?;
        let written = self.written;
        // Renamed away; nothing left for Drop to clean up.
        self.temp_path = PathBuf::new();
        Ok(written)
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        drop(self.file.take());
        if self.temp_path.as_os_str().is_empty() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.temp_path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!("failed to remove {}: {}", self.temp_path.display(), e);
            }
        }
    }
}

/// Write `data` to `final_path` all-or-nothing. Returns bytes written.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> io::Result<u64> {
    let mut part = PartFile::create(final_path)?;
    part.write_all(data)?;
    part.finalize()
}

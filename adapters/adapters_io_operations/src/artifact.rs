//! Artifact Module
//!
//! Writes the output digit sequence of a run.
//!
//! The artifact name embeds the input stem, the radix and the output digit
//! count, e.g. `pi_dec_1024_base27_714.txt`, so runs with different inputs or
//! radices never overwrite each other. The symbols go to a temporary file in
//! the destination directory first and are moved into place only once fully
//! written; a failed run leaves no artifact behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use entities_utilities::Radix;
use tempfile::NamedTempFile;
use tracing::info;

use crate::common::IoError;

/// Output artifact writer
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    /// Writer placing artifacts in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<stem>_base<radix>_<out_digit_count>.txt`
    pub fn artifact_name(stem: &str, radix: Radix, out_digit_count: usize) -> String {
        format!("{}_base{}_{}.txt", stem, radix, out_digit_count)
    }

    /// Full path of the artifact for a run
    pub fn path_for(&self, stem: &str, radix: Radix, out_digit_count: usize) -> PathBuf {
        self.dir
            .join(Self::artifact_name(stem, radix, out_digit_count))
    }

    /// Write `symbols` as the artifact of a run
    ///
    /// No separators and no trailing newline are added. Returns the path of
    /// the artifact.
    ///
    /// # Errors
    ///
    /// [`IoError::WriteFailed`] if the temporary file cannot be created or
    /// written, or cannot be moved into place.
    pub fn write(
        &self,
        stem: &str,
        radix: Radix,
        out_digit_count: usize,
        symbols: &str,
    ) -> Result<PathBuf, IoError> {
        let path = self.path_for(stem, radix, out_digit_count);

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| IoError::write(&path, &e))?;
        tmp.write_all(symbols.as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(|e| IoError::write(&path, &e))?;
        tmp.persist(&path)
            .map_err(|e| IoError::write(&path, &e.error))?;

        info!(path = %path.display(), symbols = symbols.len(), "wrote artifact");
        Ok(path)
    }

    /// Write `symbols` to an arbitrary sink, e.g. stdout
    pub fn write_to<W: Write>(mut out: W, symbols: &str) -> Result<(), IoError> {
        out.write_all(symbols.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| IoError::write(Path::new("<stream>"), &e))
    }
}

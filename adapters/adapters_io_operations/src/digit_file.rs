//! Digit File Module
//!
//! Reads a whole input file into one buffer. The buffer is allocated once
//! from the file's metadata length, so a file of hundreds of megabytes is not
//! grown and copied while it is read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::common::IoError;

/// Digit file input
pub struct DigitFile;

impl DigitFile {
    /// Read the entire file at `path`
    ///
    /// # Errors
    ///
    /// - [`IoError::NotFound`] if the path does not exist
    /// - [`IoError::Unreadable`] if it cannot be opened or read
    pub fn read(path: &Path) -> Result<Vec<u8>, IoError> {
        let mut file = File::open(path).map_err(|e| IoError::read(path, &e))?;
        let len = file
            .metadata()
            .map_err(|e| IoError::read(path, &e))?
            .len();

        let mut buffer = Vec::with_capacity(usize::try_from(len).unwrap_or(0));
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::read(path, &e))?;

        debug!(path = %path.display(), bytes = buffer.len(), "read input");
        Ok(buffer)
    }

    /// File stem used to name artifacts derived from `path`
    pub fn stem(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "digits".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"14159265\n").unwrap();
        assert_eq!(DigitFile::read(file.path()).unwrap(), b"14159265\n");
    }

    #[test]
    fn test_read_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(DigitFile::read(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert_eq!(DigitFile::read(&path), Err(IoError::NotFound(path.clone())));
    }

    #[test]
    fn test_stem() {
        assert_eq!(DigitFile::stem(Path::new("/data/pi_dec_1024.txt")), "pi_dec_1024");
        assert_eq!(DigitFile::stem(Path::new("digits")), "digits");
        assert_eq!(DigitFile::stem(Path::new("/")), "digits");
    }
}

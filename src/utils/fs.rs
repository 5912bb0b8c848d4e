//! File system utilities.

use crate::Result;
use std::io::Write;
use std::path::Path;

/// Create a directory and all parent directories.
pub fn create_dir_all(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write bytes to a file, replacing whatever is there.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        create_dir_all(&nested).unwrap();
        create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_write_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thumb.jpg");
        write_file(&path, b"first version").unwrap();
        write_file(&path, b"v2").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"v2");
    }
}

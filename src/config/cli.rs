use crate::core::Storage;
use crate::utils::error::{Result, VanMoofError};
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at the output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> VanMoofError + '_ {
    move |source| VanMoofError::IoError {
        path: path.to_path_buf(),
        source,
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path).await.map_err(io_error(path))
    }

    async fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(io_error(&self.base_path))?;

        let full_path = self.base_path.join(name);
        tokio::fs::write(&full_path, data)
            .await
            .map_err(io_error(&full_path))?;

        tokio::fs::canonicalize(&full_path)
            .await
            .map_err(io_error(&full_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested").join("downloads"));

        let path = storage.write_file("bike.json", b"{}").await.unwrap();

        assert!(path.is_absolute());
        assert_eq!(storage.read_file(&path).await.unwrap(), b"{}");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_path_buf());
        let missing = temp_dir.path().join("missing.json");

        let err = storage.read_file(&missing).await.unwrap_err();

        match err {
            VanMoofError::IoError { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Local image cache: one JPEG per product code.
//!
//! Files live directly in the configured directory as `<code>.jpg` and stay
//! until deleted. Saving the same code again overwrites the previous image.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

const IMAGE_EXTENSION: &str = "jpg";

#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("Invalid product code '{0}'")]
    InvalidCode(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImageStoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ImageStoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Product codes become file names, so anything that could escape the
    /// directory is rejected
    fn file_for(&self, product_code: &str) -> Result<PathBuf, ImageStoreError> {
        let code = product_code.trim();
        let invalid = code.is_empty()
            || code == "."
            || code.contains("..")
            || code.contains(['/', '\\', '\0']);
        if invalid {
            return Err(ImageStoreError::InvalidCode(product_code.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", code, IMAGE_EXTENSION)))
    }

    /// Save (or replace) the image of a product and return its path.
    ///
    /// Bytes are written to a temp file in the same directory and renamed
    /// over the final name, so a reader never sees a half-written image.
    pub async fn save(&self, product_code: &str, image: &[u8]) -> Result<PathBuf, ImageStoreError> {
        let target = self.file_for(product_code)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ImageStoreError::io(&self.dir, e))?;

        let temp = self.dir.join(format!(
            ".{}.{}.tmp",
            product_code.trim(),
            uuid::Uuid::new_v4()
        ));

        if let Err(e) = tokio::fs::write(&temp, image).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(ImageStoreError::io(&temp, e));
        }

        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(ImageStoreError::io(&target, e));
        }

        tracing::info!(
            "Saved image for product {} ({} bytes) at {}",
            product_code,
            image.len(),
            target.display()
        );
        Ok(target)
    }

    pub async fn exists(&self, product_code: &str) -> bool {
        self.get_path(product_code).await.is_some()
    }

    /// Path of the stored image, `None` when there is none
    pub async fn get_path(&self, product_code: &str) -> Option<PathBuf> {
        let path = self.file_for(product_code).ok()?;
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Some(path),
            _ => None,
        }
    }

    pub async fn read(&self, product_code: &str) -> Result<Option<Vec<u8>>, ImageStoreError> {
        let path = self.file_for(product_code)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ImageStoreError::io(&path, e)),
        }
    }

    /// `true` only when a file was actually removed
    pub async fn delete(&self, product_code: &str) -> bool {
        let path = match self.file_for(product_code) {
            Ok(path) => path,
            Err(_) => return false,
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!("Deleted image of product {}", product_code);
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!("Cannot delete {}: {}", path.display(), e);
                false
            }
        }
    }
}

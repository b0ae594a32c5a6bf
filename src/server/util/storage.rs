//! On-disk storage for uploaded message files.
//!
//! Files are written under a single directory with a random UUID name; the original
//! file name only lives in the database. Stored names are validated before every
//! read or delete so a name coming from the database can never escape the directory.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::server::error::AppError;

#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Writes the bytes to a new file and returns its stored name.
    pub async fn save(&self, bytes: &[u8]) -> Result<String, AppError> {
        let name = Uuid::new_v4().simple().to_string();
        tokio::fs::write(self.dir.join(&name), bytes).await?;
        Ok(name)
    }

    /// Reads a stored file.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - File contents
    /// - `Err(AppError::NotFound)` - Invalid name or file missing on disk
    /// - `Err(AppError::IoErr)` - Any other filesystem error
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, AppError> {
        let path = self.path_for(name)?;

        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound("Stored file not found".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, name: &str) -> Result<(), AppError> {
        let path = self.path_for(name)?;

        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes every file in `names`, logging failures instead of aborting.
    ///
    /// Used after rows referencing the files were already deleted, where a leftover
    /// file must not turn a successful delete into an error.
    pub async fn remove_all(&self, names: &[String]) {
        for name in names {
            if let Err(e) = self.remove(name).await {
                tracing::warn!("Failed to remove stored file {}: {}", name, e);
            }
        }
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, AppError> {
        let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(AppError::NotFound("Stored file not found".to_string()));
        }

        Ok(self.dir.join(name))
    }
}

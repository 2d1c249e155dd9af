//! Storage for the static schedule PDF.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::server::error::AppError;

pub const SCHEDULE_PDF_NAME: &str = "schedule.pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";

pub struct DocumentService<'a> {
    upload_dir: &'a Path,
}

impl<'a> DocumentService<'a> {
    pub fn new(upload_dir: &'a Path) -> Self {
        Self { upload_dir }
    }

    fn schedule_path(&self) -> PathBuf {
        self.upload_dir.join(SCHEDULE_PDF_NAME)
    }

    /// Replaces the schedule PDF.
    ///
    /// Each upload is written to its own staging file next to the target and renamed
    /// into place, so readers never see a partial upload and concurrent uploads never
    /// share a file.
    ///
    /// # Returns
    /// - `Ok(())` - File stored
    /// - `Err(AppError::BadRequest)` - Bytes are not a PDF document
    /// - `Err(AppError::IoErr)` - Filesystem error
    pub async fn save_schedule_pdf(&self, bytes: &[u8]) -> Result<(), AppError> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(AppError::BadRequest(
                "Uploaded file is not a PDF document".to_string(),
            ));
        }

        tokio::fs::create_dir_all(self.upload_dir).await?;

        let target = self.schedule_path();
        let staging = self.upload_dir.join(format!(
            ".{}.{}.part",
            SCHEDULE_PDF_NAME,
            uuid::Uuid::new_v4().simple()
        ));

        if let Err(e) = write_and_rename(&staging, &target, bytes).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }

        tracing::info!(path = %target.display(), size = bytes.len(), "stored schedule PDF");

        Ok(())
    }

    /// Reads the schedule PDF, `None` if nothing was uploaded yet.
    pub async fn read_schedule_pdf(&self) -> Result<Option<Vec<u8>>, AppError> {
        match tokio::fs::read(self.schedule_path()).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

async fn write_and_rename(staging: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(staging)
        .await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(staging, target).await
}

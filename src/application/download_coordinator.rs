use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    domain::{
        AppError, BookProps, DownloadRequest, FormError, FormValues, RequestMode, RequestTarget,
    },
    utils::{build_filepath, render_filename},
};

/// Whatever performs the download once a request has been validated.
pub trait JobSink: Send + Sync {
    fn submit(&self, request: &DownloadRequest) -> Result<(), AppError>;
}

/// Writes the request to the log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl JobSink for LoggingSink {
    fn submit(&self, request: &DownloadRequest) -> Result<(), AppError> {
        let json =
            serde_json::to_string(request).map_err(|e| AppError::Dispatch(e.to_string()))?;
        info!(request = %json, "download request submitted");
        Ok(())
    }
}

#[derive(Clone)]
pub struct RequestCoordinator {
    sink: Arc<dyn JobSink>,
}

impl Default for RequestCoordinator {
    fn default() -> Self {
        Self::new(Arc::new(LoggingSink))
    }
}

impl RequestCoordinator {
    pub fn new(sink: Arc<dyn JobSink>) -> Self {
        Self { sink }
    }

    /// Validate the collected values: save folder, filename, start index,
    /// then the mode-specific target.
    pub async fn prepare_request(&self, values: FormValues) -> Result<DownloadRequest, FormError> {
        let save_dir = values.save_dir.as_deref().ok_or(FormError::MissingSaveDir)?;
        check_save_dir(save_dir).await?;

        let filename = render_filename(&values.filename_format, &values.name, &values.author)?;
        let start_chapter = parse_start_chapter(&values.start_chapter)?;

        let target = match values.mode {
            RequestMode::FromCatalogue => RequestTarget::Catalogue {
                site: values.site,
                reference: values.site.parse_ref(&values.catalogue_ref)?,
            },
            RequestMode::ChapterByChapter => RequestTarget::ChapterByChapter {
                site: values.site,
                input: values.chapter_input,
            },
        };

        let request = DownloadRequest {
            book: BookProps {
                filepath: build_filepath(Some(save_dir), &filename),
                name: values.name,
                author: values.author,
                start_chapter,
                preface: values.preface,
            },
            target,
        };
        debug!(?request, "form values validated");
        Ok(request)
    }

    pub async fn choose_save_dir(&self, start: Option<PathBuf>) -> Option<PathBuf> {
        let mut dialog = rfd::AsyncFileDialog::new().set_title("Select a folder");
        if let Some(dir) = start.as_deref().filter(|dir| dir.is_dir()) {
            dialog = dialog.set_directory(dir);
        }
        dialog
            .pick_folder()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    pub fn dispatch(&self, request: DownloadRequest) -> Result<DownloadRequest, AppError> {
        self.sink.submit(&request).inspect_err(|e| {
            warn!(error = %e, "download request rejected by sink");
        })?;
        Ok(request)
    }
}

async fn check_save_dir(dir: &Path) -> Result<(), FormError> {
    let metadata = match tokio::fs::metadata(dir).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(FormError::SaveDirNotFound(dir.to_path_buf()))
        }
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot inspect save folder");
            return Err(FormError::SaveDirInaccessible(dir.to_path_buf()));
        }
    };

    if !metadata.is_dir() {
        return Err(FormError::SaveDirNotDirectory(dir.to_path_buf()));
    }

    // Permission bits say nothing about the current user, so try a write.
    // The scratch file is removed when it drops.
    let owned = dir.to_path_buf();
    let written = tokio::task::spawn_blocking(move || {
        tempfile::Builder::new()
            .prefix(".novel-requester")
            .tempfile_in(&owned)
            .map(drop)
    })
    .await;

    match written {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            debug!(path = %dir.display(), error = %e, "save folder is not writable");
            Err(FormError::SaveDirReadOnly(dir.to_path_buf()))
        }
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "write check did not finish");
            Err(FormError::SaveDirInaccessible(dir.to_path_buf()))
        }
    }
}

fn parse_start_chapter(input: &str) -> Result<u32, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormError::InvalidStartChapter(input.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| FormError::InvalidStartChapter(input.to_string()))
}

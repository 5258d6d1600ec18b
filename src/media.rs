//! Picture download and persistence.
//!
//! The pagination controller only knows the [`MediaStore`] trait; the
//! production implementation is [`MediaDir`], which downloads bytes with
//! reqwest and writes them under a deterministic, filesystem-safe name
//! derived from the headline.

use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, info};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

/// Collaborator that turns a picture URL into a locally persisted file.
pub trait MediaStore {
    /// Download `url` and persist it, returning the local file name.
    async fn fetch(&self, url: &str, title: &str) -> Result<String, ScrapeError>;
}

/// Downloads pictures into a flat directory.
///
/// File names are the headline stripped to alphanumerics and spaces, plus a
/// fixed `.jpg` extension. Two headlines that differ only in punctuation
/// strip to the same name and the later download overwrites the earlier one;
/// that last-write-wins behavior is a known limitation, kept deliberately.
pub struct MediaDir {
    dir: PathBuf,
    client: reqwest::Client,
}

impl MediaDir {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.pictures_dir),
            client: reqwest::Client::new(),
        }
    }

    /// Deterministic file name for a headline: strip every character that is
    /// not alphanumeric or a space, append `.jpg`.
    pub fn file_name_for(title: &str) -> String {
        let stripped: String = title
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect();
        format!("{stripped}.jpg")
    }
}

impl MediaStore for MediaDir {
    async fn fetch(&self, url: &str, title: &str) -> Result<String, ScrapeError> {
        debug!(url, "Downloading picture");
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ScrapeError::MediaDownload {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let bytes = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| ScrapeError::MediaDownload {
                url: url.to_string(),
                source: Box::new(e),
            })?
            .bytes()
            .await
            .map_err(|e| ScrapeError::MediaDownload {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let file_name = Self::file_name_for(title);
        let path = self.dir.join(&file_name);
        fs::write(&path, &bytes)
            .await
            .map_err(|e| ScrapeError::MediaDownload {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        info!(path = %path.display(), bytes = bytes.len(), "Picture saved");
        Ok(file_name)
    }
}

//! Fetch through the upstream API, sniff, and save.
//!
//! `Downloader::fetch_and_save` is the one place where every failure is caught
//! and turned into an `Outcome`; nothing it does can escape as an error or panic.

use crate::config::FetchConfig;
use crate::error::{DownloadError, ErrorKind};
use crate::request::DownloadRequest;
use crate::sniff::PREVIEW_CHARS;
use crate::storage;
use crate::upstream::{self, TransportOptions};
use std::path::PathBuf;

/// Result of one download attempt.
#[derive(Debug)]
pub enum Outcome {
    Success { bytes_written: u64, path: PathBuf },
    Failure(DownloadError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Failure class, or None on success.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure(e) => Some(e.kind()),
        }
    }

    /// Process exit code for this outcome: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

pub struct Downloader {
    cfg: FetchConfig,
}

impl Downloader {
    pub fn new(cfg: FetchConfig) -> Self {
        Self { cfg }
    }

    /// One upstream call, then write the body to `req.output_path()` iff it starts with `%PDF`.
    pub fn fetch_and_save(&self, req: &DownloadRequest) -> Outcome {
        match self.try_fetch_and_save(req) {
            Ok(bytes_written) => {
                tracing::info!(
                    bytes = bytes_written,
                    path = %req.output_path().display(),
                    "pdf saved"
                );
                Outcome::Success {
                    bytes_written,
                    path: req.output_path().to_path_buf(),
                }
            }
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), "download failed: {}", e);
                Outcome::Failure(e)
            }
        }
    }

    fn try_fetch_and_save(&self, req: &DownloadRequest) -> Result<u64, DownloadError> {
        let url = req.upstream_url(&self.cfg)?;
        if let Ok(redacted) = req.redacted_upstream_url(&self.cfg) {
            tracing::info!(target_url = req.target_url(), upstream = %redacted, "fetching");
        }

        let resp = upstream::fetch(&url, &TransportOptions::from(&self.cfg))?;

        if !resp.is_pdf() {
            return Err(DownloadError::NotPdf {
                status: resp.status,
                preview: resp.text_preview(PREVIEW_CHARS),
            });
        }

        let path = req.output_path();
        storage::write_atomic(path, &resp.body).map_err(|source| DownloadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

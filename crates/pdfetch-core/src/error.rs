//! Download error type and its classification into terminal outcomes.

use std::io;
use std::path::PathBuf;

/// Coarse failure class, used for exit reporting and operator messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream did not answer within the request timeout.
    Timeout,
    /// A body arrived but does not start with the PDF magic bytes.
    InvalidContent,
    /// Network, DNS, TLS, endpoint or local file failure.
    TransportOrIo,
}

/// Everything that can end a download attempt without a saved file.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("Request timeout")]
    Timeout,

    /// Upstream error pages, rejected credentials and genuinely non-PDF targets all land here.
    #[error("Response is not a PDF (HTTP {status})")]
    NotPdf { status: u32, preview: String },

    #[error("{0}")]
    Transport(#[source] curl::Error),

    #[error("invalid upstream endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DownloadError::Timeout => ErrorKind::Timeout,
            DownloadError::NotPdf { .. } => ErrorKind::InvalidContent,
            DownloadError::Transport(_) | DownloadError::Endpoint(_) | DownloadError::Io { .. } => {
                ErrorKind::TransportOrIo
            }
        }
    }
}

impl From<curl::Error> for DownloadError {
    fn from(e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            DownloadError::Timeout
        } else {
            DownloadError::Transport(e)
        }
    }
}

//! The single blocking GET against the scraping API.
//!
//! Uses the curl crate (libcurl easy interface). The whole body is buffered in
//! memory; PDFs fetched this way are small enough that streaming is not needed.

mod parse;

use crate::config::FetchConfig;
use crate::error::DownloadError;
use crate::sniff;
use std::str;
use std::time::Duration;
use url::Url;

/// Transfer limits applied to the upstream call.
#[derive(Debug, Clone, Copy)]
pub struct TransportOptions {
    pub timeout: Duration,
    pub connect_timeout: Option<Duration>,
    pub max_redirections: u32,
}

impl From<&FetchConfig> for TransportOptions {
    fn from(cfg: &FetchConfig) -> Self {
        Self {
            timeout: cfg.timeout(),
            connect_timeout: cfg.connect_timeout(),
            max_redirections: cfg.max_redirections,
        }
    }
}

/// What the upstream sent back. Not retained past one download attempt.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u32,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_pdf(&self) -> bool {
        sniff::is_pdf(&self.body)
    }

    /// First `max_chars` characters of the body as text.
    pub fn text_preview(&self, max_chars: usize) -> String {
        sniff::text_preview(&self.body, max_chars)
    }
}

/// Performs one GET and returns status, content type and body.
///
/// Any HTTP status counts as a response; the caller decides validity from the body.
/// Runs in the current thread and blocks up to `opts.timeout`.
pub fn fetch(url: &Url, opts: &TransportOptions) -> Result<UpstreamResponse, DownloadError> {
    let mut body: Vec<u8> = Vec::new();
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    if let Some(ct) = opts.connect_timeout {
        easy.connect_timeout(ct)?;
    }
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    let content_type = parse::content_type(&headers);
    tracing::debug!(
        status,
        content_type = content_type.as_deref().unwrap_or("-"),
        bytes = body.len(),
        "upstream responded"
    );

    Ok(UpstreamResponse {
        status,
        content_type,
        body,
    })
}

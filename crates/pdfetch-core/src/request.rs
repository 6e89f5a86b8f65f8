//! Download request and upstream URL construction.

use crate::config::FetchConfig;
use crate::error::DownloadError;
use std::path::{Path, PathBuf};
use url::Url;

/// One invocation's worth of input. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    target_url: String,
    output_path: PathBuf,
    api_key: String,
}

impl DownloadRequest {
    /// `target_url` is passed to the upstream as-is; its shape is not checked here.
    pub fn new(
        target_url: impl Into<String>,
        output_path: impl Into<PathBuf>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            output_path: output_path.into(),
            api_key: api_key.into(),
        }
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Upstream GET URL: endpoint plus `url`, `apikey` and (if enabled) `premium_proxy`.
    pub fn upstream_url(&self, cfg: &FetchConfig) -> Result<Url, DownloadError> {
        self.build_url(cfg, &self.api_key)
    }

    /// Same as `upstream_url` with the credential masked, for logs.
    pub fn redacted_upstream_url(&self, cfg: &FetchConfig) -> Result<Url, DownloadError> {
        self.build_url(cfg, "***")
    }

    fn build_url(&self, cfg: &FetchConfig, api_key: &str) -> Result<Url, DownloadError> {
        let mut url = Url::parse(&cfg.endpoint)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("url", &self.target_url);
            query.append_pair("apikey", api_key);
            if cfg.premium_proxy {
                query.append_pair("premium_proxy", "true");
            }
        }
        Ok(url)
    }
}

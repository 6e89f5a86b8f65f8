pub mod config;
pub mod logging;

pub mod downloader;
pub mod error;
pub mod request;
pub mod sniff;
pub mod storage;
pub mod upstream;

pub use downloader::{Downloader, Outcome};
pub use error::{DownloadError, ErrorKind};
pub use request::DownloadRequest;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CACHE_CONTROL;
use shelf_logging::shelf_debug;
use url::Url;

use crate::FeedError;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Where the feed lives: an HTTP(S) URL or a local JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    Http(Url),
    File(PathBuf),
}

impl FeedLocation {
    pub fn parse(raw: &str) -> Result<Self, FeedError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FeedError::InvalidLocation {
                location: String::new(),
                message: "empty location".into(),
            });
        }

        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(FeedLocation::Http(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(FeedLocation::File)
                .map_err(|()| FeedError::InvalidLocation {
                    location: raw.to_string(),
                    message: "file URL does not name a local path".into(),
                }),
            // Single-letter schemes are Windows drive prefixes such as `C:\feed.json`.
            Ok(url) if url.scheme().len() > 1 => Err(FeedError::InvalidLocation {
                location: raw.to_string(),
                message: format!("unsupported scheme {}", url.scheme()),
            }),
            _ => Ok(FeedLocation::File(PathBuf::from(raw))),
        }
    }
}

impl fmt::Display for FeedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedLocation::Http(url) => write!(f, "{url}"),
            FeedLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Raw feed bytes. One attempt; retries are the caller's business.
    async fn fetch(&self, location: &FeedLocation) -> Result<Vec<u8>, FeedError>;
}

/// Fetches HTTP(S) feeds with `reqwest` and file feeds with `tokio::fs`.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    settings: FetchSettings,
}

impl FeedFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FeedError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FeedError::Network(err.to_string()))
    }

    async fn fetch_url(&self, url: &Url) -> Result<Vec<u8>, FeedError> {
        let client = self.build_client()?;
        let response = client
            .get(url.as_str())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus(status.as_u16()));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FeedError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FeedError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(next_len),
                });
            }
            bytes.extend_from_slice(&chunk);
        }
        shelf_debug!("fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FeedError> {
        let io_error = |err: std::io::Error| FeedError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        };
        let len = tokio::fs::metadata(path).await.map_err(io_error)?.len();
        if len > self.settings.max_bytes {
            return Err(FeedError::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(len),
            });
        }
        let bytes = tokio::fs::read(path).await.map_err(io_error)?;
        shelf_debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl Fetcher for FeedFetcher {
    async fn fetch(&self, location: &FeedLocation) -> Result<Vec<u8>, FeedError> {
        match location {
            FeedLocation::Http(url) => self.fetch_url(url).await,
            FeedLocation::File(path) => self.read_file(path).await,
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FeedError {
    if err.is_timeout() {
        return FeedError::Timeout(err.to_string());
    }
    FeedError::Network(err.to_string())
}

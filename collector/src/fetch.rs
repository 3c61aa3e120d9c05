//! Fetching repository files over HTTP.

use std::io::Read;

use flate2::read::GzDecoder;

use crate::config::HttpSettings;
use crate::error::CollectError;

/// Source of raw repository files.
///
/// Collectors only depend on this trait, so tests can substitute an
/// in-memory implementation for [`HttpFetcher`].
pub trait Fetch: Send + Sync {
    /// Fetches the body at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Status`] for non-success responses and
    /// [`CollectError::Request`] for transport failures.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, CollectError>;
}

/// Blocking HTTP fetcher backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::ClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(settings: &HttpSettings) -> Result<Self, CollectError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(CollectError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, CollectError> {
        tracing::debug!(url, "GET");
        let request_err = |source| CollectError::Request {
            url: url.to_owned(),
            source,
        };
        let response = self.client.get(url).send().map_err(request_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollectError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().map_err(request_err)?;
        tracing::debug!(url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }
}

/// Decompresses `bytes` according to the suffix of `url`.
///
/// `.gz` and `.zst` are decoded; anything else is returned unchanged.
///
/// # Errors
///
/// Returns [`CollectError::Decompress`] if the payload is corrupt.
pub fn decompress(url: &str, bytes: Vec<u8>) -> Result<Vec<u8>, CollectError> {
    let decode_err = |source| CollectError::Decompress {
        url: url.to_owned(),
        source,
    };
    if url.ends_with(".gz") {
        let mut out = Vec::with_capacity(bytes.len() * 4);
        GzDecoder::new(bytes.as_slice())
            .read_to_end(&mut out)
            .map_err(decode_err)?;
        Ok(out)
    } else if url.ends_with(".zst") {
        zstd::stream::decode_all(bytes.as_slice()).map_err(decode_err)
    } else {
        Ok(bytes)
    }
}

/// Fetches `url`, decompresses it, and decodes it as UTF-8.
///
/// # Errors
///
/// Propagates fetch and decompression errors; returns
/// [`CollectError::Encoding`] if the payload is not UTF-8.
pub fn fetch_text(fetcher: &dyn Fetch, url: &str) -> Result<String, CollectError> {
    let bytes = decompress(url, fetcher.fetch(url)?)?;
    String::from_utf8(bytes).map_err(|_| CollectError::Encoding {
        url: url.to_owned(),
    })
}

/// Like [`fetch_text`], but replaces invalid UTF-8 instead of failing.
///
/// # Errors
///
/// Propagates fetch and decompression errors.
pub fn fetch_text_lossy(fetcher: &dyn Fetch, url: &str) -> Result<String, CollectError> {
    let bytes = decompress(url, fetcher.fetch(url)?)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Joins a repository base URL and a relative path with exactly one `/`.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

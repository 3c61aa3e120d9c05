//! Collector errors.

use std::path::PathBuf;

/// Errors raised while collecting repository metadata.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request could not be sent or its body could not be read.
    #[error("request to {url} failed: {source}")]
    Request {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// A compressed payload could not be decoded.
    #[error("cannot decompress {url}: {source}")]
    Decompress {
        /// URL the payload came from.
        url: String,
        /// Underlying decoder error.
        #[source]
        source: std::io::Error,
    },

    /// A payload that must be text is not valid UTF-8.
    #[error("{url} is not valid UTF-8")]
    Encoding {
        /// URL the payload came from.
        url: String,
    },

    /// The Debian `Release` file lacks a required field.
    #[error("Release file for '{distribution}' is missing {missing}")]
    IncompleteRelease {
        /// Requested distribution.
        distribution: String,
        /// Comma-separated list of the missing fields.
        missing: String,
    },

    /// `repomd.xml` does not list a required metadata type.
    #[error("repomd.xml does not list '{0}' metadata")]
    MissingMetadata(String),

    /// An XML metadata file is malformed.
    #[error("malformed XML in {url}: {source}")]
    Xml {
        /// URL the document came from.
        url: String,
        /// Underlying parser error.
        #[source]
        source: quick_xml::Error,
    },

    /// A worker thread panicked while processing a chunk.
    #[error("worker thread panicked: {0}")]
    Worker(String),

    /// The collector configuration file could not be loaded.
    #[error("invalid collector config {}: {message}", path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}

impl CollectError {
    /// True for errors that mean the resource is not available, as opposed
    /// to malformed content.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CollectError::Status { .. } | CollectError::Request { .. })
    }
}

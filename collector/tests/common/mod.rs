//! Shared fixtures for collector integration tests.

#![allow(dead_code)]

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use mockito::{Mock, Server, ServerGuard};
use packagegraph_collector::{ChunkRunner, CollectContext, CollectorConfig, HttpFetcher, Profiler};

/// A mock repository served over HTTP.
pub struct MockRepo {
    pub server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockRepo {
    pub fn new() -> Self {
        Self {
            server: Server::new(),
            mocks: Vec::new(),
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Serves `body` at `path` with status 200.
    pub fn serve(&mut self, path: &str, body: impl AsRef<[u8]>) -> &mut Self {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(200)
            .with_body(body)
            .create();
        self.mocks.push(mock);
        self
    }

    /// Answers `path` with `status` and an empty body.
    pub fn fail(&mut self, path: &str, status: usize) -> &mut Self {
        let mock = self.server.mock("GET", path).with_status(status).create();
        self.mocks.push(mock);
        self
    }
}

impl Default for MockRepo {
    fn default() -> Self {
        Self::new()
    }
}

pub fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

pub fn zstd(text: &str) -> Vec<u8> {
    zstd::stream::encode_all(text.as_bytes(), 0).expect("zstd encode")
}

/// Services for one test run.
pub struct Harness {
    pub fetcher: HttpFetcher,
    pub profiler: Profiler,
    pub runner: ChunkRunner,
}

impl Harness {
    pub fn sequential() -> Self {
        Self::with_runner(ChunkRunner::sequential())
    }

    pub fn parallel(chunk_size: usize) -> Self {
        Self::with_runner(ChunkRunner::new(true, chunk_size, 3))
    }

    fn with_runner(runner: ChunkRunner) -> Self {
        let config = CollectorConfig::default();
        Self {
            fetcher: HttpFetcher::new(&config.http).expect("http client"),
            profiler: Profiler::new(true),
            runner,
        }
    }

    pub fn ctx(&self) -> CollectContext<'_> {
        CollectContext::new(&self.fetcher, &self.profiler, &self.runner)
    }
}

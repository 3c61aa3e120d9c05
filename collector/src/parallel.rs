//! Chunked processing of large inputs on a worker pool.
//!
//! Inputs at least one chunk long are split into chunks which scoped worker
//! threads pull from a channel. Every chunk is written into its own graph
//! with a dedicated blank-node scope; the chunk graphs are merged into the
//! target in chunk order, so the output does not depend on scheduling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use packagegraph_ontology::Graph;

use crate::error::CollectError;

/// Splits work into chunks and runs it sequentially or on worker threads.
#[derive(Debug)]
pub struct ChunkRunner {
    parallel: bool,
    chunk_size: usize,
    workers: usize,
    runs: AtomicUsize,
}

impl Default for ChunkRunner {
    fn default() -> Self {
        Self::new(true, 1000, 4)
    }
}

impl ChunkRunner {
    /// Creates a runner. Zero `chunk_size` or `workers` are treated as 1.
    #[must_use]
    pub fn new(parallel: bool, chunk_size: usize, workers: usize) -> Self {
        Self {
            parallel,
            chunk_size: chunk_size.max(1),
            workers: workers.max(1),
            runs: AtomicUsize::new(0),
        }
    }

    /// A runner that always processes inline.
    #[must_use]
    pub fn sequential() -> Self {
        Self::new(false, usize::MAX, 1)
    }

    /// Items per chunk.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// True if inputs of `len` items would be split across workers.
    #[must_use]
    pub fn splits(&self, len: usize) -> bool {
        self.parallel && len >= self.chunk_size
    }

    /// Applies `process` to `items`, adding its output to `graph`.
    ///
    /// Returns the number of items processed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Worker`] if `process` panics on a worker
    /// thread; nothing is merged into `graph` in that case.
    pub fn run<T, F>(&self, items: &[T], graph: &mut Graph, process: F) -> Result<usize, CollectError>
    where
        T: Sync,
        F: Fn(&[T], &mut Graph) + Sync,
    {
        if !self.splits(items.len()) {
            process(items, graph);
            return Ok(items.len());
        }

        let run = self.runs.fetch_add(1, Ordering::Relaxed);
        let prefix = format!("{}r{run}c", graph.scope());
        let chunks: Vec<&[T]> = items.chunks(self.chunk_size).collect();
        let workers = self.workers.min(chunks.len());
        tracing::debug!(chunks = chunks.len(), workers, "processing in parallel");

        let (tx, rx) = crossbeam_channel::unbounded::<(usize, &[T])>();
        for job in chunks.iter().copied().enumerate() {
            // the receiver is alive until the scope below ends
            let _ = tx.send(job);
        }
        drop(tx);

        let results: Result<Vec<Vec<(usize, Graph)>>, CollectError> = thread::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let rx = rx.clone();
                    let process = &process;
                    let prefix = prefix.as_str();
                    s.spawn(move || {
                        let mut done = Vec::new();
                        for (index, chunk) in rx.iter() {
                            let mut chunk_graph = Graph::with_scope(format!("{prefix}{index}"));
                            process(chunk, &mut chunk_graph);
                            done.push((index, chunk_graph));
                        }
                        done
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().map_err(|e| CollectError::Worker(panic_message(e.as_ref()))))
                .collect()
        });

        let mut finished: Vec<(usize, Graph)> = results?.into_iter().flatten().collect();
        finished.sort_by_key(|(index, _)| *index);
        for (_, chunk_graph) in finished {
            graph.merge(chunk_graph);
        }
        Ok(items.len())
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use packagegraph_ontology::Term;

    use super::*;

    fn emit(chunk: &[u32], g: &mut Graph) {
        for n in chunk {
            let b = g.fresh_blank();
            g.add(Term::iri(format!("http://x/{n}")), "http://x/p", b.clone());
            g.add(b, "http://x/n", Term::literal(n.to_string()));
        }
    }

    #[test]
    fn small_inputs_run_inline() {
        let runner = ChunkRunner::new(true, 10, 4);
        let mut g = Graph::with_scope("g");
        let n = runner.run(&[1u32, 2, 3], &mut g, emit).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(n, 3);
        assert_eq!(g.len(), 6);
        assert!(g.iter().any(|t| t.object == Term::BlankNode("gb1".to_owned())));
    }

    #[test]
    fn parallel_output_matches_sequential_and_keeps_order() {
        let items: Vec<u32> = (0..103).collect();
        let mut parallel = Graph::with_scope("g");
        ChunkRunner::new(true, 10, 3)
            .run(&items, &mut parallel, emit)
            .unwrap_or_else(|e| panic!("{e}"));
        let mut sequential = Graph::with_scope("g");
        ChunkRunner::sequential()
            .run(&items, &mut sequential, emit)
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(parallel.len(), sequential.len());
        let subjects: Vec<_> = parallel
            .iter()
            .filter(|t| t.predicate == "http://x/p")
            .filter_map(|t| t.subject.as_iri().map(str::to_owned))
            .collect();
        let expected: Vec<_> = items.iter().map(|n| format!("http://x/{n}")).collect();
        assert_eq!(subjects, expected);
    }

    #[test]
    fn chunk_blank_nodes_do_not_collide() {
        let items: Vec<u32> = (0..40).collect();
        let mut g = Graph::with_scope("g");
        let runner = ChunkRunner::new(true, 10, 2);
        runner.run(&items, &mut g, emit).unwrap_or_else(|e| panic!("{e}"));
        runner.run(&items, &mut g, emit).unwrap_or_else(|e| panic!("{e}"));
        let blanks: std::collections::HashSet<_> =
            g.iter().filter(|t| t.object.is_blank()).map(|t| &t.object).collect();
        assert_eq!(blanks.len(), 80);
    }

    #[test]
    fn worker_panics_become_errors() {
        let items: Vec<u32> = (0..20).collect();
        let mut g = Graph::new();
        let result = ChunkRunner::new(true, 5, 2).run(&items, &mut g, |chunk, _| {
            if chunk.contains(&12) {
                panic!("bad item");
            }
        });
        assert!(matches!(result, Err(CollectError::Worker(ref m)) if m == "bad item"));
        assert!(g.is_empty());
    }
}

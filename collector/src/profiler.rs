//! Step timing for collection runs.
//!
//! A [`Profiler`] is passed explicitly to the code it measures. When
//! disabled, [`Profiler::step`] only runs the closure.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use parking_lot::Mutex;

/// Records how long named steps take.
#[derive(Debug, Default)]
pub struct Profiler {
    enabled: bool,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    timings: IndexMap<String, Vec<Duration>>,
    // (step name, start) of the steps currently running, innermost last
    active: Vec<(String, Instant)>,
}

impl Profiler {
    /// Creates a profiler; a disabled one records nothing.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            state: Mutex::default(),
        }
    }

    /// True if timings are being recorded.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Runs `f` as the step `name` and records its duration.
    ///
    /// Steps may nest; each level is recorded under its own name.
    pub fn step<T>(&self, name: &str, f: impl FnOnce() -> T) -> T {
        if !self.enabled {
            return f();
        }
        self.state.lock().active.push((name.to_owned(), Instant::now()));
        let _running = RunningStep {
            profiler: self,
            name,
        };
        f()
    }

    /// Logs `message` with the time elapsed in the innermost running step.
    pub fn log(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let current = self
            .state
            .lock()
            .active
            .last()
            .map(|(name, start)| (name.clone(), start.elapsed()));
        match current {
            Some((step, elapsed)) => {
                tracing::info!(step = %step, "  {message} (+{:.2}s)", elapsed.as_secs_f64());
            }
            None => tracing::info!("{message}"),
        }
    }

    /// Total recorded time of `name`, if it ran.
    #[must_use]
    pub fn total(&self, name: &str) -> Option<Duration> {
        self.state
            .lock()
            .timings
            .get(name)
            .map(|times| times.iter().sum())
    }

    /// Renders the per-step timing table.
    ///
    /// Returns `None` when disabled or nothing was recorded.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let state = self.state.lock();
        if state.timings.is_empty() {
            return None;
        }

        let rule = "=".repeat(50);
        let mut out = format!("{rule}\nPROFILING SUMMARY\n{rule}\n");
        let mut grand = Duration::ZERO;
        for (name, times) in &state.timings {
            let total: Duration = times.iter().sum();
            grand += total;
            let secs = total.as_secs_f64();
            if times.len() > 1 {
                let avg = secs / times.len() as f64;
                let _ = writeln!(
                    out,
                    "{name:30}: {secs:8.2}s total ({}x, avg: {avg:.2}s)",
                    times.len()
                );
            } else {
                let _ = writeln!(out, "{name:30}: {secs:8.2}s");
            }
        }
        let _ = writeln!(out, "{}", "-".repeat(50));
        let _ = writeln!(out, "{:30}: {:8.2}s", "TOTAL", grand.as_secs_f64());
        out.push_str(&rule);
        Some(out)
    }

    /// Emits [`summary`](Self::summary) through `tracing`, if there is one.
    pub fn report(&self) {
        if let Some(summary) = self.summary() {
            for line in summary.lines() {
                tracing::info!("{line}");
            }
        }
    }
}

/// Closes the innermost active step when dropped, also while unwinding.
struct RunningStep<'a> {
    profiler: &'a Profiler,
    name: &'a str,
}

impl Drop for RunningStep<'_> {
    fn drop(&mut self) {
        let elapsed = {
            let mut state = self.profiler.state.lock();
            let Some((_, start)) = state.active.pop() else {
                return;
            };
            let elapsed = start.elapsed();
            state
                .timings
                .entry(self.name.to_owned())
                .or_default()
                .push(elapsed);
            elapsed
        };
        let name = self.name;
        tracing::info!(step = name, "{name}: {:.2}s", elapsed.as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_profiler_runs_closures_without_recording() {
        let profiler = Profiler::new(false);
        assert_eq!(profiler.step("work", || 7), 7);
        assert!(profiler.total("work").is_none());
        assert!(profiler.summary().is_none());
    }

    #[test]
    fn records_nested_and_repeated_steps() {
        let profiler = Profiler::new(true);
        profiler.step("outer", || {
            profiler.step("inner", || profiler.log("halfway"));
            profiler.step("inner", || ());
        });
        assert!(profiler.total("outer").is_some());
        let summary = profiler.summary().unwrap_or_default();
        assert!(summary.contains("PROFILING SUMMARY"));
        assert!(summary.contains("inner"));
        assert!(summary.contains("(2x, avg:"));
        assert!(summary.contains("TOTAL"));
    }

    #[test]
    fn outer_step_includes_inner_time() {
        let profiler = Profiler::new(true);
        profiler.step("outer", || {
            profiler.step("inner", || std::thread::sleep(Duration::from_millis(5)));
        });
        let outer = profiler.total("outer").unwrap_or_default();
        let inner = profiler.total("inner").unwrap_or_default();
        assert!(outer >= inner);
        assert!(inner >= Duration::from_millis(5));
    }

    #[test]
    fn panicking_step_is_closed() {
        let profiler = Profiler::new(true);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            profiler.step("outer", || {
                profiler.step("failing", || panic!("step failed"));
            });
        }));
        assert!(result.is_err());
        assert!(profiler.state.lock().active.is_empty());
        assert!(profiler.total("failing").is_some());
        assert!(profiler.total("outer").is_some());

        profiler.step("after", || profiler.log("running"));
        assert!(profiler.state.lock().active.is_empty());
        assert!(profiler.total("after").is_some());
    }
}

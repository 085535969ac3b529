//! Shared progress counter and the live progress line.
//!
//! Workers add flushed row counts to a [`ProgressCounter`]; a
//! [`ProgressReporter`] task samples it on a fixed tick and rewrites a single
//! status line with count, percentage, rate, and ETA.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Count of rows flushed by all workers.
///
/// Cloning shares the underlying counter.
#[derive(Debug, Clone, Default)]
pub struct ProgressCounter {
    rows: Arc<AtomicU64>,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add flushed rows.
    pub fn add(&self, rows: u64) {
        self.rows.fetch_add(rows, Ordering::Relaxed);
    }

    /// Current number of flushed rows.
    pub fn get(&self) -> u64 {
        self.rows.load(Ordering::Relaxed)
    }
}

/// One reading of the counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub current: u64,
    pub total: u64,
    pub elapsed: Duration,
}

impl ProgressSnapshot {
    /// Rows per second since the run started; zero before any time elapsed.
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.current as f64 / secs
        } else {
            0.0
        }
    }

    /// Completion percentage; zero when there is nothing to load.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 * 100.0 / self.total as f64
        }
    }

    /// Estimated time until `total` is reached, if it can be estimated.
    pub fn eta(&self) -> Option<Duration> {
        if self.current >= self.total {
            return None;
        }
        let rate = self.rate();
        if rate <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64((self.total - self.current) as f64 / rate).ok()
    }

    /// Render the status line (without the leading carriage return).
    pub fn render(&self, include_eta: bool) -> String {
        let eta = match self.eta() {
            Some(eta) if include_eta => format!(", ETA: {}", format_duration(eta)),
            _ => String::new(),
        };
        format!(
            "Progress: {} / {} companies seeded ({:.2}%, {:.2} records/sec{})",
            self.current,
            self.total,
            self.percent(),
            self.rate(),
            eta
        )
    }
}

/// Background task that keeps the progress line up to date.
pub struct ProgressReporter<W> {
    counter: ProgressCounter,
    total: u64,
    started: Instant,
    interval: Duration,
    out: W,
}

impl<W: Write + Send + 'static> ProgressReporter<W> {
    pub fn new(
        counter: ProgressCounter,
        total: u64,
        started: Instant,
        interval: Duration,
        out: W,
    ) -> Self {
        Self {
            counter,
            total,
            started,
            interval,
            out,
        }
    }

    /// Read the counter now.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current: self.counter.get(),
            total: self.total,
            elapsed: self.started.elapsed(),
        }
    }

    fn emit(&mut self, final_render: bool) {
        let line = self.snapshot().render(!final_render);
        let terminator = if final_render { "\n" } else { "" };
        let result = write!(self.out, "\r{line}{terminator}").and_then(|_| self.out.flush());
        if let Err(e) = result {
            debug!("Failed to write progress line: {}", e);
        }
    }

    /// Tick until `stop` is cancelled, then render once more without an ETA.
    ///
    /// Returns the writer so callers can inspect what was rendered.
    pub async fn run(mut self, stop: CancellationToken) -> W {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = stop.cancelled() => {
                    self.emit(true);
                    break;
                }
                _ = ticker.tick() => self.emit(false),
            }
        }

        self.out
    }

    /// Start the reporter as a background task.
    pub fn spawn(self, stop: CancellationToken) -> JoinHandle<W> {
        tokio::spawn(self.run(stop))
    }
}

/// Format a duration as `1h 2m 3s`, `2m 3s` or `3s`, rounded to the second.
pub fn format_duration(duration: Duration) -> String {
    let mut secs = duration.as_secs();
    if duration.subsec_millis() >= 500 {
        secs += 1;
    }

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_millis(1_499)), "1s");
        assert_eq!(format_duration(Duration::from_millis(1_500)), "2s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3_600)), "1h 0m 0s");
        assert_eq!(format_duration(Duration::from_secs(3_725)), "1h 2m 5s");
    }

    #[test]
    fn test_counter_is_shared() {
        let counter = ProgressCounter::new();
        let clone = counter.clone();

        counter.add(62);
        clone.add(64);

        assert_eq!(counter.get(), 126);
        assert_eq!(clone.get(), 126);
    }

    #[test]
    fn test_snapshot_rate_and_eta() {
        let snapshot = ProgressSnapshot {
            current: 100,
            total: 300,
            elapsed: Duration::from_secs(10),
        };

        assert_eq!(snapshot.rate(), 10.0);
        assert!((snapshot.percent() - 33.333).abs() < 0.01);
        assert_eq!(snapshot.eta(), Some(Duration::from_secs(20)));
        assert_eq!(
            snapshot.render(true),
            "Progress: 100 / 300 companies seeded (33.33%, 10.00 records/sec, ETA: 20s)"
        );
        assert_eq!(
            snapshot.render(false),
            "Progress: 100 / 300 companies seeded (33.33%, 10.00 records/sec)"
        );
    }

    #[test]
    fn test_snapshot_zero_elapsed() {
        let snapshot = ProgressSnapshot {
            current: 0,
            total: 100,
            elapsed: Duration::ZERO,
        };

        assert_eq!(snapshot.rate(), 0.0);
        assert_eq!(snapshot.eta(), None);
        assert_eq!(
            snapshot.render(true),
            "Progress: 0 / 100 companies seeded (0.00%, 0.00 records/sec)"
        );
    }

    #[test]
    fn test_snapshot_zero_total() {
        let snapshot = ProgressSnapshot {
            current: 0,
            total: 0,
            elapsed: Duration::from_secs(1),
        };

        assert_eq!(snapshot.percent(), 0.0);
        assert_eq!(snapshot.eta(), None);
        assert_eq!(
            snapshot.render(true),
            "Progress: 0 / 0 companies seeded (0.00%, 0.00 records/sec)"
        );
    }

    #[test]
    fn test_snapshot_complete_has_no_eta() {
        let snapshot = ProgressSnapshot {
            current: 250,
            total: 250,
            elapsed: Duration::from_secs(5),
        };

        assert_eq!(snapshot.eta(), None);
        assert_eq!(snapshot.percent(), 100.0);
    }

    #[tokio::test]
    async fn test_reporter_final_render_after_stop() {
        let counter = ProgressCounter::new();
        let stop = CancellationToken::new();
        let reporter = ProgressReporter::new(
            counter.clone(),
            250,
            Instant::now(),
            Duration::from_millis(10),
            Vec::new(),
        );
        let handle = reporter.spawn(stop.clone());

        counter.add(100);
        tokio::time::sleep(Duration::from_millis(35)).await;
        counter.add(150);
        stop.cancel();

        let out = String::from_utf8(handle.await.unwrap()).unwrap();
        let renders: Vec<&str> = out.split('\r').filter(|s| !s.is_empty()).collect();

        assert!(renders.len() >= 2, "expected periodic renders: {out:?}");
        let last = renders.last().unwrap();
        assert!(last.starts_with("Progress: 250 / 250 companies seeded (100.00%"));
        assert!(!last.contains("ETA"));
        assert!(last.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_reporter_readings_are_monotonic() {
        let counter = ProgressCounter::new();
        let stop = CancellationToken::new();
        let reporter = ProgressReporter::new(
            counter.clone(),
            1_000,
            Instant::now(),
            Duration::from_millis(5),
            Vec::new(),
        );
        let handle = reporter.spawn(stop.clone());

        for _ in 0..10 {
            counter.add(100);
            tokio::time::sleep(Duration::from_millis(3)).await;
        }
        stop.cancel();

        let out = String::from_utf8(handle.await.unwrap()).unwrap();
        let counts: Vec<u64> = out
            .split('\r')
            .filter_map(|line| line.strip_prefix("Progress: "))
            .map(|rest| rest.split(' ').next().unwrap().parse().unwrap())
            .collect();

        assert!(counts.windows(2).all(|w| w[0] <= w[1]), "{counts:?}");
        assert_eq!(*counts.last().unwrap(), 1_000);
    }

    #[tokio::test]
    async fn test_reporter_zero_total() {
        let stop = CancellationToken::new();
        let reporter = ProgressReporter::new(
            ProgressCounter::new(),
            0,
            Instant::now(),
            Duration::from_millis(10),
            Vec::new(),
        );
        let handle = reporter.spawn(stop.clone());
        stop.cancel();

        let out = String::from_utf8(handle.await.unwrap()).unwrap();
        assert!(out.contains("Progress: 0 / 0 companies seeded (0.00%"));
    }
}

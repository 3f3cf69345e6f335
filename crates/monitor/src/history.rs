use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

/// Rate windows reported on the dashboard.
pub const SHORT_WINDOW: Duration = Duration::from_secs(10);
pub const MEDIUM_WINDOW: Duration = Duration::from_secs(600);
pub const LONG_WINDOW: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Copy)]
struct Sample {
    at: Instant,
    value: u64,
}

/// Timestamped height samples for throughput estimation.
///
/// Holds at most [`LONG_WINDOW`] of data; older samples are pruned on insert.
/// Rates are the slope between the newest sample and the oldest sample inside
/// the requested window, so a single sample yields no rate at all.
#[derive(Debug, Default)]
pub struct SampleHistory {
    samples: VecDeque<Sample>,
}

impl SampleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: u64) {
        self.record_at(Instant::now(), value);
    }

    pub fn record_at(&mut self, at: Instant, value: u64) {
        self.samples.push_back(Sample { at, value });
        while let Some(front) = self.samples.front() {
            if at.duration_since(front.at) > LONG_WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Units per second between the two most recent samples.
    pub fn instantaneous_rate(&self) -> Option<f64> {
        let newest = self.samples.back()?;
        let previous = self.samples.get(self.samples.len().checked_sub(2)?)?;
        slope(previous, newest)
    }

    /// Units per second over the trailing `window`.
    pub fn rate_over(&self, window: Duration) -> Option<f64> {
        let newest = self.samples.back()?;
        let oldest = self
            .samples
            .iter()
            .find(|sample| newest.at.duration_since(sample.at) <= window)?;
        slope(oldest, newest)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

fn slope(older: &Sample, newer: &Sample) -> Option<f64> {
    let elapsed = newer.at.duration_since(older.at).as_secs_f64();
    if elapsed <= 0.0 {
        return None;
    }
    Some((newer.value as f64 - older.value as f64) / elapsed)
}

use std::time::Duration;

use crate::{
    estimate::{estimate_eta, progress_percent, remaining, slot_clock_eta},
    history::{LONG_WINDOW, MEDIUM_WINDOW, SHORT_WINDOW, SampleHistory},
    snapshot::Snapshot,
};

/// Throughput over the dashboard's rate windows, units per second.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateSet {
    pub instantaneous: Option<f64>,
    pub short: Option<f64>,
    pub medium: Option<f64>,
    pub long: Option<f64>,
}

impl RateSet {
    pub fn from_history(history: &SampleHistory) -> Self {
        Self {
            instantaneous: history.instantaneous_rate(),
            short: history.rate_over(SHORT_WINDOW),
            medium: history.rate_over(MEDIUM_WINDOW),
            long: history.rate_over(LONG_WINDOW),
        }
    }
}

/// A [`Snapshot`] joined with the derived lag, throughput and ETA figures.
/// This is the unit the renderer and the metrics gauges consume.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub snapshot: Snapshot,
    pub execution_lag: Option<u64>,
    pub execution_progress_percent: Option<f64>,
    pub execution_rates: RateSet,
    pub execution_eta: Option<Duration>,
    pub consensus_rates: RateSet,
    pub consensus_eta: Option<Duration>,
    pub consensus_slot_clock_eta: Option<Duration>,
}

impl SyncReport {
    pub fn build(
        snapshot: Snapshot,
        block_history: &SampleHistory,
        slot_history: &SampleHistory,
    ) -> Self {
        let execution_rates = RateSet::from_history(block_history);
        let consensus_rates = RateSet::from_history(slot_history);

        let execution_lag = snapshot
            .execution
            .progress()
            .map(|progress| remaining(progress.highest_block, progress.current_block));
        let execution_progress_percent = snapshot.execution.progress().map(|progress| {
            progress_percent(
                progress.starting_block,
                progress.current_block,
                progress.highest_block,
            )
        });
        let execution_eta = match (execution_lag, execution_rates.instantaneous) {
            (Some(lag), Some(speed)) => estimate_eta(lag, speed),
            _ => None,
        };

        let sync_distance = snapshot
            .consensus
            .sync_status
            .as_ref()
            .map(|status| status.sync_distance);
        let consensus_eta = match (sync_distance, consensus_rates.instantaneous) {
            (Some(distance), Some(speed)) => estimate_eta(distance, speed),
            _ => None,
        };
        let consensus_slot_clock_eta = sync_distance
            .filter(|distance| *distance > 0)
            .map(slot_clock_eta);

        Self {
            snapshot,
            execution_lag,
            execution_progress_percent,
            execution_rates,
            execution_eta,
            consensus_rates,
            consensus_eta,
            consensus_slot_clock_eta,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ethwatch_api_types::sync::SyncStatus;
    use ethwatch_execution::rpc_types::eth_syncing::{EthSyncing, SyncProgress};

    use crate::snapshot::{ConsensusSnapshot, ExecutionSnapshot};

    use super::*;

    fn syncing_snapshot(current: u64, highest: u64) -> Snapshot {
        Snapshot {
            execution: ExecutionSnapshot {
                syncing: Some(EthSyncing::Syncing(Box::new(SyncProgress {
                    starting_block: 0,
                    current_block: current,
                    highest_block: highest,
                    pulled_states: None,
                    known_states: None,
                }))),
                ..Default::default()
            },
            consensus: ConsensusSnapshot::default(),
        }
    }

    #[test]
    fn report_combines_lag_with_instantaneous_speed() {
        // Syncing at block 100 of 200, previous poll at block 50 five
        // seconds earlier: lag 100, speed 10 blk/s, ETA 10 seconds.
        let origin = Instant::now();
        let mut blocks = SampleHistory::new();
        blocks.record_at(origin, 50);
        blocks.record_at(origin + Duration::from_secs(5), 100);

        let report = SyncReport::build(syncing_snapshot(100, 200), &blocks, &SampleHistory::new());

        assert_eq!(report.execution_lag, Some(100));
        let speed = report
            .execution_rates
            .instantaneous
            .expect("two block samples");
        assert!((speed - 10.0).abs() < f64::EPSILON);
        assert_eq!(report.execution_eta, Some(Duration::from_secs(10)));
    }

    #[test]
    fn first_tick_has_no_speed_or_eta() {
        let mut blocks = SampleHistory::new();
        blocks.record(100);

        let report = SyncReport::build(syncing_snapshot(100, 200), &blocks, &SampleHistory::new());

        assert_eq!(report.execution_lag, Some(100));
        assert!(report.execution_rates.instantaneous.is_none());
        assert!(report.execution_eta.is_none());
    }

    #[test]
    fn slot_clock_eta_only_while_behind() {
        let behind = Snapshot {
            consensus: ConsensusSnapshot {
                sync_status: Some(SyncStatus {
                    head_slot: 100,
                    sync_distance: 120,
                    is_syncing: true,
                    is_optimistic: false,
                    el_offline: false,
                }),
                ..Default::default()
            },
            ..Default::default()
        };
        let report = SyncReport::build(behind, &SampleHistory::new(), &SampleHistory::new());
        assert_eq!(
            report.consensus_slot_clock_eta,
            Some(Duration::from_secs(1440))
        );

        let caught_up = Snapshot {
            consensus: ConsensusSnapshot {
                sync_status: Some(SyncStatus::default()),
                ..Default::default()
            },
            ..Default::default()
        };
        let report = SyncReport::build(caught_up, &SampleHistory::new(), &SampleHistory::new());
        assert!(report.consensus_slot_clock_eta.is_none());
    }
}

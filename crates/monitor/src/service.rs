use std::{future::Future, time::Duration};

use ethwatch_metrics::{
    CONSENSUS_FINALIZED_EPOCH, CONSENSUS_HEAD_SLOT, CONSENSUS_SYNC_DISTANCE,
    EXECUTION_BLOCK_HEIGHT, EXECUTION_PEER_COUNT, EXECUTION_SYNC_LAG, set_int_gauge_vec,
};
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::{history::SampleHistory, report::SyncReport, sampler::Sampler, snapshot::Snapshot};

/// Where finished [`SyncReport`]s go. The terminal dashboard implements this;
/// tests can plug in a collector.
pub trait ReportRenderer {
    fn render(&mut self, report: &SyncReport) -> anyhow::Result<()>;

    /// Called once after the polling loop ends, even if it ended on an error.
    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub poll_interval: Duration,
    pub once: bool,
    pub record_metrics: bool,
}

/// The polling loop: one tick polls both clients, feeds the rate histories,
/// builds a report and hands it to the renderer (and the metrics gauges).
pub struct MonitorService<R: ReportRenderer> {
    sampler: Sampler,
    renderer: R,
    settings: MonitorSettings,
    block_history: SampleHistory,
    slot_history: SampleHistory,
}

impl<R: ReportRenderer> MonitorService<R> {
    pub fn new(sampler: Sampler, renderer: R, settings: MonitorSettings) -> Self {
        Self {
            sampler,
            renderer,
            settings,
            block_history: SampleHistory::new(),
            slot_history: SampleHistory::new(),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        self.run_until(tokio::signal::ctrl_c()).await
    }

    /// Polls until `shutdown` resolves. The shutdown future is raced against
    /// the sampling work too, so a signal lands even mid-poll while both
    /// upstream clients are timing out.
    pub async fn run_until(mut self, shutdown: impl Future) -> anyhow::Result<()> {
        let run_result = self.poll_loop(shutdown).await;
        let finish_result = self.renderer.finish();
        run_result.and(finish_result)
    }

    async fn poll_loop(&mut self, shutdown: impl Future) -> anyhow::Result<()> {
        let mut ticker = interval(self.settings.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = &mut shutdown => {
                    info!("Received shutdown signal, stopping monitor");
                    return Ok(());
                }
            }

            tokio::select! {
                report = self.tick() => {
                    self.renderer.render(&report)?;
                    if self.settings.once {
                        return Ok(());
                    }
                }
                _ = &mut shutdown => {
                    info!("Received shutdown signal, stopping monitor");
                    return Ok(());
                }
            }
        }
    }

    async fn tick(&mut self) -> SyncReport {
        let snapshot = self.sampler.sample().await;
        self.ingest(snapshot)
    }

    fn ingest(&mut self, snapshot: Snapshot) -> SyncReport {
        if let Some(height) = snapshot.execution.observed_height() {
            self.block_history.record(height);
        }
        if let Some(slot) = snapshot.consensus.head_slot() {
            self.slot_history.record(slot);
        }

        let report = SyncReport::build(snapshot, &self.block_history, &self.slot_history);
        if self.settings.record_metrics {
            update_gauges(&report);
        }
        report
    }
}

/// Mirror the report into the Prometheus gauges. Failed polls leave the
/// previous gauge value in place rather than zeroing it.
fn update_gauges(report: &SyncReport) {
    if let Some(height) = report.snapshot.execution.observed_height() {
        set_int_gauge_vec(&EXECUTION_BLOCK_HEIGHT, height as i64, &[]);
    }
    if let Some(lag) = report.execution_lag {
        set_int_gauge_vec(&EXECUTION_SYNC_LAG, lag as i64, &[]);
    }
    if let Some(peers) = report.snapshot.execution.peer_count {
        set_int_gauge_vec(&EXECUTION_PEER_COUNT, peers as i64, &[]);
    }
    if let Some(slot) = report.snapshot.consensus.head_slot() {
        set_int_gauge_vec(&CONSENSUS_HEAD_SLOT, slot as i64, &[]);
    }
    if let Some(status) = &report.snapshot.consensus.sync_status {
        set_int_gauge_vec(&CONSENSUS_SYNC_DISTANCE, status.sync_distance as i64, &[]);
    }
    if let Some(finalized) = &report.snapshot.consensus.finalized {
        set_int_gauge_vec(&CONSENSUS_FINALIZED_EPOCH, finalized.epoch as i64, &[]);
    }
}

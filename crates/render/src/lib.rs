pub mod format;

use std::{
    io::{Stdout, Write as _, stdout},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use chrono::Local;
use crossterm::{
    cursor, execute, queue,
    terminal::{Clear, ClearType},
};
use ethwatch_monitor::{
    report::{RateSet, SyncReport},
    service::ReportRenderer,
};
use format::{
    format_count, format_duration, format_eta, format_gwei, format_percent, format_rate, or_dash,
    yes_no,
};

const RULE: &str =
    "================================================================================";
const SECTION_RULE: &str = "----------------------------------------";

/// Builds the dashboard as plain lines. [`Dashboard`] wraps this with the
/// terminal control.
pub fn render_lines(report: &SyncReport, poll_interval: Duration) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(RULE.to_string());
    lines.push(format!(
        " ethwatch - Ethereum sync monitor - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(RULE.to_string());
    lines.push(String::new());

    execution_section(&mut lines, report);
    lines.push(String::new());
    consensus_section(&mut lines, report);

    lines.push(String::new());
    lines.push(format!(
        "Press Ctrl+C to exit | refresh every {}",
        format_duration(poll_interval)
    ));
    lines
}

fn execution_section(lines: &mut Vec<String>, report: &SyncReport) {
    let execution = &report.snapshot.execution;

    lines.push("EXECUTION (Geth)".to_string());
    lines.push(SECTION_RULE.to_string());
    lines.push(format!("  Status:        {}", or_dash(execution.health())));

    if let Some(progress) = execution.progress() {
        lines.push(format!(
            "  Current block: {}",
            format_count(progress.current_block)
        ));
        lines.push(format!(
            "  Target block:  {}",
            format_count(progress.highest_block)
        ));
        lines.push(format!(
            "  Remaining:     {} blocks",
            or_dash(report.execution_lag.map(format_count))
        ));
        lines.push(format!(
            "  Progress:      {}",
            format_percent(report.execution_progress_percent)
        ));
        if let (Some(pulled), Some(known)) = (progress.pulled_states, progress.known_states) {
            lines.push(format!(
                "  State sync:    {} / {} states",
                format_count(pulled),
                format_count(known)
            ));
        }
    } else {
        lines.push(format!(
            "  Current block: {}",
            or_dash(execution.block_number.map(format_count))
        ));
    }

    lines.push(format!(
        "  Peers:         {}",
        or_dash(execution.peer_count)
    ));
    lines.push(format!("  Chain ID:      {}", or_dash(execution.chain_id)));
    lines.push(format!(
        "  Gas price:     {}",
        or_dash(execution.gas_price_wei.map(format_gwei))
    ));
    lines.push(format!(
        "  Head age:      {}",
        or_dash(
            execution
                .latest_block
                .as_ref()
                .map(|block| format_duration(head_age(block.timestamp, unix_now())))
        )
    ));
    lines.push(format!(
        "  Rates:         {}",
        rate_line(&report.execution_rates, "blk/s")
    ));
    lines.push(format!(
        "  ETA:           {}",
        format_eta(report.execution_eta)
    ));
}

fn consensus_section(lines: &mut Vec<String>, report: &SyncReport) {
    let consensus = &report.snapshot.consensus;

    lines.push("CONSENSUS (Lighthouse)".to_string());
    lines.push(SECTION_RULE.to_string());
    lines.push(format!("  Status:        {}", or_dash(consensus.health())));
    lines.push(format!(
        "  Head slot:     {}",
        or_dash(consensus.head_slot().map(format_count))
    ));

    if let Some(status) = &consensus.sync_status {
        lines.push(format!(
            "  Sync distance: {} slots",
            format_count(status.sync_distance)
        ));
        lines.push(format!("  Optimistic:    {}", yes_no(status.is_optimistic)));
        lines.push(format!("  EL online:     {}", yes_no(!status.el_offline)));
    } else {
        lines.push("  Sync distance: -".to_string());
    }

    lines.push(format!(
        "  Finalized:     {}",
        or_dash(consensus.finalized.as_ref().map(|checkpoint| format!(
            "epoch {} (slot {})",
            format_count(checkpoint.epoch),
            format_count(checkpoint.start_slot())
        )))
    ));
    lines.push(format!(
        "  Version:       {}",
        or_dash(consensus.version.as_deref())
    ));
    lines.push(format!(
        "  Rates:         {}",
        rate_line(&report.consensus_rates, "slot/s")
    ));

    let eta = match report.consensus_slot_clock_eta {
        Some(slot_clock) => format!(
            "{} (slot clock {})",
            format_eta(report.consensus_eta),
            format_duration(slot_clock)
        ),
        None => format_eta(report.consensus_eta),
    };
    lines.push(format!("  ETA:           {eta}"));
}

fn rate_line(rates: &RateSet, unit: &str) -> String {
    format!(
        "now {} | 10s {} | 10m {} | 1h {}",
        format_rate(rates.instantaneous, unit),
        bare_rate(rates.short),
        bare_rate(rates.medium),
        bare_rate(rates.long)
    )
}

fn bare_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate:.1}"),
        None => "-".to_string(),
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Age of the head block; a timestamp in the future counts as zero.
fn head_age(block_timestamp: u64, now: u64) -> Duration {
    Duration::from_secs(now.saturating_sub(block_timestamp))
}

/// Terminal driver: clears and redraws the dashboard in place, keeping the
/// cursor hidden while the monitor runs.
pub struct Dashboard {
    stdout: Stdout,
    clear_screen: bool,
    poll_interval: Duration,
}

impl Dashboard {
    pub fn new(clear_screen: bool, poll_interval: Duration) -> Self {
        Self {
            stdout: stdout(),
            clear_screen,
            poll_interval,
        }
    }

    pub fn enter(&mut self) -> anyhow::Result<()> {
        if self.clear_screen {
            execute!(self.stdout, cursor::Hide)?;
        }
        Ok(())
    }
}

impl ReportRenderer for Dashboard {
    fn render(&mut self, report: &SyncReport) -> anyhow::Result<()> {
        if self.clear_screen {
            queue!(self.stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        for line in render_lines(report, self.poll_interval) {
            writeln!(self.stdout, "{line}")?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        if self.clear_screen {
            execute!(self.stdout, cursor::Show)?;
        }
        Ok(())
    }
}

use std::time::Duration;

/// Slot duration on mainnet and every network this monitor targets.
pub const SECONDS_PER_SLOT: u64 = 12;

/// Number of blocks (or slots) still to be synced. Never negative: a target
/// briefly behind the local head is treated as fully caught up.
pub fn remaining(highest: u64, current: u64) -> u64 {
    highest.saturating_sub(current)
}

/// Percentage of the sync span `[starting, highest]` already covered.
///
/// An empty span reports 0.0, matching a node that has not discovered its
/// target yet.
pub fn progress_percent(starting: u64, current: u64, highest: u64) -> f64 {
    if highest <= starting {
        return 0.0;
    }
    let covered = current.saturating_sub(starting) as f64;
    let span = (highest - starting) as f64;
    (covered / span * 100.0).clamp(0.0, 100.0)
}

/// Projected time to cover `lag` units at `speed` units per second.
///
/// Unknown whenever the speed is not a positive finite number.
pub fn estimate_eta(lag: u64, speed: f64) -> Option<Duration> {
    if !speed.is_finite() || speed <= 0.0 {
        return None;
    }
    Some(Duration::from_secs_f64(lag as f64 / speed))
}

/// Wall-clock projection for a consensus sync distance, assuming the chain
/// keeps producing one slot every [`SECONDS_PER_SLOT`] seconds.
pub fn slot_clock_eta(sync_distance: u64) -> Duration {
    Duration::from_secs(sync_distance.saturating_mul(SECONDS_PER_SLOT))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(200, 100, 100)]
    #[case(100, 100, 0)]
    #[case(100, 200, 0)]
    #[case(0, 0, 0)]
    fn remaining_never_underflows(#[case] highest: u64, #[case] current: u64, #[case] lag: u64) {
        assert_eq!(remaining(highest, current), lag);
    }

    #[test]
    fn progress_covers_span() {
        assert_eq!(progress_percent(0, 50, 100), 50.0);
        assert_eq!(progress_percent(100, 100, 100), 0.0);
        assert_eq!(progress_percent(0, 150, 100), 100.0);

        let partial = progress_percent(0x49edaa, 0x4e5dd6, 0x1609928);
        assert!(partial > 0.0 && partial < 100.0);
    }

    #[test]
    fn eta_matches_lag_over_speed() {
        // 100 blocks behind at 10 blk/s leaves 10 seconds of work.
        let eta = estimate_eta(100, 10.0).expect("speed is positive");
        assert_eq!(eta, Duration::from_secs(10));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn eta_undefined_without_usable_speed(#[case] speed: f64) {
        assert!(estimate_eta(100, speed).is_none());
    }

    #[test]
    fn eta_shrinks_as_speed_grows() {
        let lag = 10_000;
        let mut previous = estimate_eta(lag, 1.0).expect("speed is positive");
        for speed in [2.0, 5.0, 50.0, 1000.0] {
            let eta = estimate_eta(lag, speed).expect("speed is positive");
            assert!(eta <= previous);
            previous = eta;
        }
    }

    #[test]
    fn slot_clock_uses_twelve_second_slots() {
        assert_eq!(slot_clock_eta(120), Duration::from_secs(1440));
        assert_eq!(slot_clock_eta(0), Duration::ZERO);
    }
}

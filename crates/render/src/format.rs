use std::{fmt::Display, time::Duration};

use alloy_primitives::U256;

const WEI_PER_GWEI: f64 = 1e9;

/// Renders with the two largest units: `45s`, `5m 10s`, `3h 25m`, `2d 7h`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    if total < 60 {
        format!("{total}s")
    } else if total < 3600 {
        format!("{}m {}s", total / 60, total % 60)
    } else if total < 86400 {
        format!("{}h {}m", total / 3600, (total % 3600) / 60)
    } else {
        format!("{}d {}h", total / 86400, (total % 86400) / 3600)
    }
}

/// Thousands-separated integer: `23104808` → `23,104,808`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

pub fn format_rate(rate: Option<f64>, unit: &str) -> String {
    match rate {
        Some(rate) => format!("{rate:.1} {unit}"),
        None => "-".to_string(),
    }
}

pub fn format_eta(eta: Option<Duration>) -> String {
    match eta {
        Some(eta) => format_duration(eta),
        None => "-".to_string(),
    }
}

pub fn format_gwei(wei: U256) -> String {
    let wei = u128::try_from(wei).unwrap_or(u128::MAX);
    format!("{:.2} gwei", wei as f64 / WEI_PER_GWEI)
}

pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(percent) => format!("{percent:.2}%"),
        None => "-".to_string(),
    }
}

/// `-` for values the last poll failed to produce.
pub fn or_dash<T: Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0s")]
    #[case(45, "45s")]
    #[case(310, "5m 10s")]
    #[case(12_300, "3h 25m")]
    #[case(198_000, "2d 7h")]
    fn durations_pick_sensible_units(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(format_duration(Duration::from_secs(seconds)), expected);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(23_104_808, "23,104,808")]
    fn counts_group_thousands(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_count(value), expected);
    }

    #[test]
    fn missing_values_render_a_dash() {
        assert_eq!(format_rate(None, "blk/s"), "-");
        assert_eq!(format_eta(None), "-");
        assert_eq!(format_percent(None), "-");
        assert_eq!(or_dash::<u64>(None), "-");
    }

    #[test]
    fn gwei_conversion() {
        assert_eq!(format_gwei(U256::from(12_430_000_000u64)), "12.43 gwei");
    }
}

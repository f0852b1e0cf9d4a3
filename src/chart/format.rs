//! Label formatters for tallied values.

use serde::{Deserialize, Serialize};

/// Which formatter a renderer applies to category values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueFormat {
    Count,
    Amount,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Count => format_count(value),
            ValueFormat::Amount => format_amount(value),
        }
    }
}

/// Plain integer count.
pub fn format_count(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Tiered amount display: sub-unit amounts in sats, whole amounts in BTC.
pub fn format_amount(value: f64) -> String {
    if value < 0.000_001 {
        format!("{} sats", (value * 1e8).round() as i64)
    } else if value < 0.001 {
        format!("{:.1}k sats", value * 1e5)
    } else if value < 1.0 {
        format!("{:.1}M sats", value * 1e2)
    } else if value < 10.0 {
        format!("{:.2} BTC", value)
    } else if value < 1000.0 {
        format!("{:.1} BTC", value)
    } else {
        format!("{:.1}k BTC", value / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1234.0), "1234");
        assert_eq!(format_count(0.4), "0");
    }

    #[test]
    fn test_amount_tiers() {
        assert_eq!(format_amount(0.0000005), "50 sats");
        assert_eq!(format_amount(0.0005), "50.0k sats");
        assert_eq!(format_amount(0.5), "50.0M sats");
        assert_eq!(format_amount(2.5), "2.50 BTC");
        assert_eq!(format_amount(250.0), "250.0 BTC");
        assert_eq!(format_amount(2500.0), "2.5k BTC");
    }
}

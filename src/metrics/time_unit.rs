use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

/// Unit every latency is converted into before statistics are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeUnit {
    #[serde(rename = "ns")]
    Nanos,
    #[serde(rename = "mms")]
    Micros,
    #[serde(rename = "ms")]
    Millis,
    #[serde(rename = "s")]
    Seconds,
}

impl TimeUnit {
    /// Nanoseconds per one unit.
    #[must_use]
    pub const fn divisor(self) -> u64 {
        match self {
            Self::Nanos => 1,
            Self::Micros => 1_000,
            Self::Millis => 1_000_000,
            Self::Seconds => 1_000_000_000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Micros => "mms",
            Self::Millis => "ms",
            Self::Seconds => "s",
        }
    }

    /// Parses a unit label, falling back to milliseconds with a warning
    /// when the label is unknown.
    #[must_use]
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_else(|err: String| {
            tracing::warn!("{}; falling back to 'ms'", err);
            Self::Millis
        })
    }

    /// Converts an elapsed duration into whole units, truncating.
    #[must_use]
    pub fn convert(self, elapsed: Duration) -> u64 {
        let units = elapsed
            .as_nanos()
            .checked_div(u128::from(self.divisor()))
            .unwrap_or(0);
        u64::try_from(units).unwrap_or(u64::MAX)
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ns" => Ok(Self::Nanos),
            "mms" | "us" => Ok(Self::Micros),
            "ms" => Ok(Self::Millis),
            "s" => Ok(Self::Seconds),
            other => Err(format!("Unknown time unit '{}'", other)),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

use std::time::Duration;

use tokio::time::Instant;

/// Per-request record sent from a worker to the collector.
#[derive(Debug, Clone)]
pub struct Summary {
    pub start: Instant,
    pub end: Instant,
    pub status_code: Option<u16>,
    pub success: bool,
    pub has_error: bool,
    pub failed_assertion: Option<String>,
    pub failed_cause: Option<String>,
}

/// How a single request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
    Error,
}

impl Summary {
    /// Every assertion passed.
    #[must_use]
    pub const fn passed(start: Instant, end: Instant, status_code: u16) -> Self {
        Self {
            start,
            end,
            status_code: Some(status_code),
            success: true,
            has_error: false,
            failed_assertion: None,
            failed_cause: None,
        }
    }

    /// A response arrived but was rejected, either by an assertion or
    /// because its body could not be read.
    #[must_use]
    pub const fn failed(
        start: Instant,
        end: Instant,
        status_code: u16,
        failed_assertion: Option<String>,
        failed_cause: String,
    ) -> Self {
        Self {
            start,
            end,
            status_code: Some(status_code),
            success: false,
            has_error: false,
            failed_assertion,
            failed_cause: Some(failed_cause),
        }
    }

    /// The request never produced a response.
    #[must_use]
    pub const fn transport_error(start: Instant, end: Instant, cause: String) -> Self {
        Self {
            start,
            end,
            status_code: None,
            success: false,
            has_error: true,
            failed_assertion: None,
            failed_cause: Some(cause),
        }
    }

    /// `"<assertion>: <cause>"` for a failed assertion, the bare cause for a
    /// body-read or transport failure, `None` on success.
    #[must_use]
    pub fn failure_reason(&self) -> Option<String> {
        let cause = self.failed_cause.as_deref()?;
        Some(self.failed_assertion.as_deref().map_or_else(
            || cause.to_owned(),
            |name| format!("{}: {}", name, cause),
        ))
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        if self.has_error {
            Outcome::Error
        } else if self.success {
            Outcome::Success
        } else {
            Outcome::Failed
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Latency slots exhausted: capacity {capacity}, got another result.")]
    CapacityExceeded { capacity: usize },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

use crate::error::AssertionError;
use crate::http::HttpResponse;

/// Passes when the response status is one of the expected codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCodeAssertion {
    pub expected_codes: Vec<u16>,
}

impl StatusCodeAssertion {
    #[must_use]
    pub const fn new(expected_codes: Vec<u16>) -> Self {
        Self { expected_codes }
    }

    /// Parses a space-separated list such as `"200 302"`.
    ///
    /// # Errors
    ///
    /// Returns an error when a token is not a valid status code.
    pub fn parse(codes: &str) -> Result<Self, AssertionError> {
        let expected_codes = codes
            .split_whitespace()
            .map(|code| {
                code.parse::<u16>()
                    .map_err(|err| AssertionError::InvalidStatusCode {
                        value: code.to_owned(),
                        source: err,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(expected_codes))
    }

    /// # Errors
    ///
    /// Returns an error when no code is expected.
    pub fn validate(&self) -> Result<(), AssertionError> {
        if self.expected_codes.is_empty() {
            return Err(AssertionError::StatusCodesEmpty);
        }
        Ok(())
    }

    pub(super) fn check(&self, response: &HttpResponse) -> Result<(), String> {
        let actual = response.status_code();
        if self.expected_codes.is_empty() || self.expected_codes.contains(&actual) {
            return Ok(());
        }
        Err(format!("Invalid Status Code: {}", actual))
    }
}

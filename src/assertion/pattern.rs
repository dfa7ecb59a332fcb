use regex::bytes::Regex;

use crate::error::AssertionError;
use crate::http::HttpResponse;

/// Passes when the pattern matches anywhere in the raw body.
#[derive(Debug, Clone)]
pub struct RegexAssertion {
    regex: Regex,
}

impl RegexAssertion {
    /// # Errors
    ///
    /// Returns an error when the pattern is empty or does not compile.
    pub fn new(pattern: &str) -> Result<Self, AssertionError> {
        if pattern.is_empty() {
            return Err(AssertionError::ExpressionEmpty);
        }
        let regex = Regex::new(pattern).map_err(|err| AssertionError::InvalidRegex {
            pattern: pattern.to_owned(),
            source: err,
        })?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub(super) fn check(&self, response: &HttpResponse) -> Result<(), String> {
        if self.regex.is_match(&response.body) {
            return Ok(());
        }
        Err(format!(
            "Assertion failed: response body does not match the regex expression: {}",
            self.pattern()
        ))
    }
}

//! Response assertions and the chain workers evaluate them through.
mod json_path;
mod pattern;
mod status;

#[cfg(test)]
mod tests;

pub use json_path::{JsonPathAssertion, Operator};
pub use pattern::RegexAssertion;
pub use status::StatusCodeAssertion;

use crate::error::AssertionError;
use crate::http::HttpResponse;

/// One configured check against a captured response.
#[derive(Debug, Clone)]
pub enum Assertion {
    StatusCode(StatusCodeAssertion),
    JsonPath(JsonPathAssertion),
    Regex(RegexAssertion),
}

impl Assertion {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StatusCode(_) => "StatusCodeAssertion",
            Self::JsonPath(_) => "JsonPathAssertion",
            Self::Regex(_) => "RegexAssertion",
        }
    }

    /// # Errors
    ///
    /// Returns an error when the assertion cannot be evaluated as configured.
    pub fn validate(&self) -> Result<(), AssertionError> {
        match self {
            Self::StatusCode(assertion) => assertion.validate(),
            Self::JsonPath(_) | Self::Regex(_) => Ok(()),
        }
    }

    /// `Err` carries the reason the response was rejected.
    ///
    /// # Errors
    ///
    /// Returns the failure reason when the response does not satisfy the
    /// assertion.
    pub fn check(&self, response: &HttpResponse) -> Result<(), String> {
        match self {
            Self::StatusCode(assertion) => assertion.check(response),
            Self::JsonPath(assertion) => assertion.check(response),
            Self::Regex(assertion) => assertion.check(response),
        }
    }
}

/// First assertion in the chain that rejected a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    pub name: &'static str,
    pub cause: String,
}

/// Ordered, validated assertions shared read-only by every worker.
#[derive(Debug, Clone, Default)]
pub struct AssertionChain {
    assertions: Vec<Assertion>,
}

impl AssertionChain {
    /// Validates every assertion up front.
    ///
    /// # Errors
    ///
    /// Returns the first validation error.
    pub fn new(assertions: Vec<Assertion>) -> Result<Self, AssertionError> {
        for assertion in &assertions {
            assertion.validate()?;
        }
        Ok(Self { assertions })
    }

    /// Builds the chain from the `assert-*` options in the order status
    /// codes, JSON expression, regex. Absent options are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error when any present option is invalid.
    pub fn from_options(
        status_codes: Option<&str>,
        json_expression: Option<&str>,
        regex_expression: Option<&str>,
    ) -> Result<Self, AssertionError> {
        let mut assertions = Vec::with_capacity(3);
        if let Some(codes) = status_codes {
            assertions.push(Assertion::StatusCode(StatusCodeAssertion::parse(codes)?));
        }
        if let Some(expression) = json_expression {
            assertions.push(Assertion::JsonPath(JsonPathAssertion::parse(expression)?));
        }
        if let Some(pattern) = regex_expression {
            assertions.push(Assertion::Regex(RegexAssertion::new(pattern)?));
        }
        Self::new(assertions)
    }

    /// Assertion names in evaluation order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.assertions.iter().map(Assertion::name).collect()
    }

    /// Runs assertions in order; the first failure stops evaluation. An
    /// empty chain accepts every response.
    ///
    /// # Errors
    ///
    /// Returns the name and reason of the first failing assertion.
    pub fn evaluate(&self, response: &HttpResponse) -> Result<(), AssertionFailure> {
        for assertion in &self.assertions {
            assertion
                .check(response)
                .map_err(|cause| AssertionFailure {
                    name: assertion.name(),
                    cause,
                })?;
        }
        Ok(())
    }
}

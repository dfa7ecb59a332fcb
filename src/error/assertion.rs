use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssertionError {
    #[error("At least 1 item is required for expected status codes.")]
    StatusCodesEmpty,
    #[error("Invalid status code '{value}': {source}")]
    InvalidStatusCode {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Expression is required.")]
    ExpressionEmpty,
    #[error("Invalid expression '{expression}'. Expected '<path> <operator> <value>'.")]
    InvalidExpression { expression: String },
    #[error("No handler was found for the operator '{operator}'. Use >, >=, <, <= or ==.")]
    UnknownOperator { operator: String },
    #[error("Invalid JSONPath query '{query}': {source}")]
    InvalidJsonPath {
        query: String,
        #[source]
        source: serde_json_path::ParseError,
    },
    #[error("Invalid regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
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

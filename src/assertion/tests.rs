use super::json_path::bracket_member_names;
use super::*;
use crate::error::{AppError, AppResult};
use http::{HeaderMap, StatusCode};

const BOOK_STORE: &str = r#"{
    "store": {
        "book": [
            {
                "category": "reference",
                "author": "Nigel Rees",
                "title": "Sayings of the Century",
                "price": 8.95
            },
            {
                "category": "fiction",
                "author": "Evelyn Waugh",
                "title": "Sword of Honour",
                "price": 12.99
            },
            {
                "category": "fiction",
                "author": "Herman Melville",
                "title": "Moby Dick",
                "isbn": "0-553-21311-3",
                "price": 8.99
            },
            {
                "category": "fiction",
                "author": "J. R. R. Tolkien",
                "title": "The Lord of the Rings",
                "isbn": "0-395-19395-8",
                "price": 22.99
            }
        ],
        "bicycle": {
            "color": "red",
            "price": 19.95,
            "available": true
        }
    },
    "expensive": 10
}"#;

fn response(status: u16, body: &str) -> AppResult<HttpResponse> {
    let status = StatusCode::from_u16(status)
        .map_err(|err| AppError::assertion(format!("bad status: {}", err)))?;
    Ok(HttpResponse::new(
        status,
        HeaderMap::new(),
        body.as_bytes().to_vec(),
    ))
}

fn json_check(expression: &str) -> AppResult<Result<(), String>> {
    let assertion = Assertion::JsonPath(JsonPathAssertion::parse(expression)?);
    Ok(assertion.check(&response(200, BOOK_STORE)?))
}

#[test]
fn status_code_accepts_expected_codes() -> AppResult<()> {
    let assertion = Assertion::StatusCode(StatusCodeAssertion::new(vec![200, 302]));
    assertion.validate()?;
    for code in [200, 302] {
        if let Err(reason) = assertion.check(&response(code, "")?) {
            return Err(AppError::assertion(format!(
                "Expected {} to pass: {}",
                code, reason
            )));
        }
    }
    Ok(())
}

#[test]
fn status_code_rejects_other_codes() -> AppResult<()> {
    let assertion = Assertion::StatusCode(StatusCodeAssertion::new(vec![200]));
    match assertion.check(&response(400, "")?) {
        Err(reason) if reason.contains("400") => Ok(()),
        other => Err(AppError::assertion(format!(
            "Expected failure naming 400, got {:?}",
            other
        ))),
    }
}

#[test]
fn empty_status_set_passes_but_fails_validation() -> AppResult<()> {
    let assertion = StatusCodeAssertion::new(Vec::new());
    if assertion.check(&response(503, "")?).is_err() {
        return Err(AppError::assertion("Expected empty set to pass"));
    }
    if !matches!(assertion.validate(), Err(AssertionError::StatusCodesEmpty)) {
        return Err(AppError::assertion("Expected empty set to fail validation"));
    }
    Ok(())
}

#[test]
fn status_code_list_rejects_non_numbers() -> AppResult<()> {
    if StatusCodeAssertion::parse("200 abc").is_ok() {
        return Err(AppError::assertion("Expected 'abc' to be rejected"));
    }
    let parsed = StatusCodeAssertion::parse(" 200  302 ")?;
    if parsed.expected_codes != [200_u16, 302] {
        return Err(AppError::assertion(format!(
            "Unexpected codes: {:?}",
            parsed.expected_codes
        )));
    }
    Ok(())
}

#[test]
fn json_path_matches_number() -> AppResult<()> {
    json_check("$.expensive == 10")?.map_err(AppError::assertion)
}

#[test]
fn json_path_matches_string_from_last_element() -> AppResult<()> {
    json_check("$.store.book[-1].isbn == 0-395-19395-8")?.map_err(AppError::assertion)
}

#[test]
fn json_path_accepts_hyphenated_member_names() -> AppResult<()> {
    let body = r#"{"content-type":"json","meta":{"x-rate-limit":40}}"#;
    for expression in ["$.content-type == json", "$.meta.x-rate-limit >= 40"] {
        let assertion = Assertion::JsonPath(JsonPathAssertion::parse(expression)?);
        assertion
            .check(&response(200, body)?)
            .map_err(|cause| AppError::assertion(format!("{}: {}", expression, cause)))?;
    }
    Ok(())
}

#[test]
fn member_names_are_bracketed_only_when_needed() -> AppResult<()> {
    let cases = [
        ("$.store.book[-1].isbn", "$.store.book[-1].isbn"),
        ("$.content-type", "$['content-type']"),
        ("$..x-id.name", "$..['x-id'].name"),
        ("$.a-b[0]['c.d'].e", "$['a-b'][0]['c.d'].e"),
        ("$.9lives", "$['9lives']"),
        ("$.*", "$.*"),
    ];
    for (query, expected) in cases {
        let rewritten = bracket_member_names(query);
        if rewritten != expected {
            return Err(AppError::assertion(format!(
                "{} rewritten as {}, expected {}",
                query, rewritten, expected
            )));
        }
    }
    Ok(())
}

#[test]
fn json_path_numeric_operators() -> AppResult<()> {
    for expression in [
        "$.expensive > 9",
        "$.expensive >= 10",
        "$.expensive < 10.5",
        "$.expensive <= 10",
        "$.store.bicycle.price > 19.9",
        "$.store.bicycle.available == true",
    ] {
        if let Err(reason) = json_check(expression)? {
            return Err(AppError::assertion(format!(
                "Expected '{}' to pass: {}",
                expression, reason
            )));
        }
    }
    for expression in ["$.expensive > 10", "$.expensive < 3", "$.expensive == 11"] {
        if json_check(expression)?.is_ok() {
            return Err(AppError::assertion(format!(
                "Expected '{}' to fail",
                expression
            )));
        }
    }
    Ok(())
}

#[test]
fn json_path_reports_actual_and_expected() -> AppResult<()> {
    match json_check("$.store.book[0].author == Tolkien")? {
        Err(reason) if reason.contains("Nigel Rees") && reason.contains("Tolkien") => Ok(()),
        other => Err(AppError::assertion(format!(
            "Unexpected outcome: {:?}",
            other
        ))),
    }
}

#[test]
fn json_path_numeric_operator_on_string_is_mismatch() -> AppResult<()> {
    match json_check("$.store.bicycle.color > 3")? {
        Err(reason) if reason.contains("mismatched type") => Ok(()),
        other => Err(AppError::assertion(format!(
            "Expected type mismatch, got {:?}",
            other
        ))),
    }
}

#[test]
fn json_path_fails_on_missing_path_or_invalid_body() -> AppResult<()> {
    if json_check("$.nothing.here == 1")?.is_ok() {
        return Err(AppError::assertion("Expected missing path to fail"));
    }
    let assertion = Assertion::JsonPath(JsonPathAssertion::parse("$.a == 1")?);
    if assertion.check(&response(200, "not json")?).is_ok() {
        return Err(AppError::assertion("Expected invalid JSON body to fail"));
    }
    Ok(())
}

#[test]
fn json_path_literal_keeps_remaining_text() -> AppResult<()> {
    let assertion = JsonPathAssertion::parse("$.store.book[1].title == Sword of Honour")?;
    if assertion.literal() != "Sword of Honour" || assertion.operator() != Operator::Eq {
        return Err(AppError::assertion(format!(
            "Unexpected parse: {:?}",
            assertion
        )));
    }
    let wrapped = Assertion::JsonPath(assertion);
    wrapped
        .check(&response(200, BOOK_STORE)?)
        .map_err(AppError::assertion)
}

#[test]
fn json_path_rejects_malformed_expressions() -> AppResult<()> {
    if !matches!(
        JsonPathAssertion::parse("   "),
        Err(AssertionError::ExpressionEmpty)
    ) {
        return Err(AppError::assertion("Expected empty expression error"));
    }
    if !matches!(
        JsonPathAssertion::parse("$.expensive =="),
        Err(AssertionError::InvalidExpression { .. })
    ) {
        return Err(AppError::assertion("Expected two-token expression error"));
    }
    if !matches!(
        JsonPathAssertion::parse("$.expensive != 10"),
        Err(AssertionError::UnknownOperator { .. })
    ) {
        return Err(AppError::assertion("Expected unknown operator error"));
    }
    if !matches!(
        JsonPathAssertion::parse("expensive == 10"),
        Err(AssertionError::InvalidJsonPath { .. })
    ) {
        return Err(AppError::assertion("Expected invalid JSONPath error"));
    }
    Ok(())
}

#[test]
fn regex_matches_anywhere_in_body() -> AppResult<()> {
    let assertion = Assertion::Regex(RegexAssertion::new(r"Moby\s+Dick")?);
    assertion
        .check(&response(200, BOOK_STORE)?)
        .map_err(AppError::assertion)
}

#[test]
fn regex_failure_names_pattern() -> AppResult<()> {
    let assertion = Assertion::Regex(RegexAssertion::new("^missing$")?);
    match assertion.check(&response(200, BOOK_STORE)?) {
        Err(reason) if reason.contains("^missing$") => Ok(()),
        other => Err(AppError::assertion(format!(
            "Expected failure naming the pattern, got {:?}",
            other
        ))),
    }
}

#[test]
fn regex_rejects_empty_and_invalid_patterns() -> AppResult<()> {
    if !matches!(RegexAssertion::new(""), Err(AssertionError::ExpressionEmpty)) {
        return Err(AppError::assertion("Expected empty pattern error"));
    }
    if !matches!(
        RegexAssertion::new("(unclosed"),
        Err(AssertionError::InvalidRegex { .. })
    ) {
        return Err(AppError::assertion("Expected invalid regex error"));
    }
    Ok(())
}

#[test]
fn chain_short_circuits_on_first_failure() -> AppResult<()> {
    let chain = AssertionChain::from_options(Some("201"), Some("$.expensive == 99"), None)?;
    match chain.evaluate(&response(200, BOOK_STORE)?) {
        Err(AssertionFailure { name, cause }) => {
            if name != "StatusCodeAssertion" || !cause.contains("200") {
                return Err(AppError::assertion(format!(
                    "Unexpected failure: {} {}",
                    name, cause
                )));
            }
        }
        Ok(()) => return Err(AppError::assertion("Expected chain to fail")),
    }
    Ok(())
}

#[test]
fn chain_reports_later_failure_when_earlier_pass() -> AppResult<()> {
    let chain = AssertionChain::from_options(
        Some("200"),
        Some("$.expensive == 10"),
        Some("Hobbit"),
    )?;
    if chain.names() != ["StatusCodeAssertion", "JsonPathAssertion", "RegexAssertion"] {
        return Err(AppError::assertion(format!(
            "Unexpected order: {:?}",
            chain.names()
        )));
    }
    match chain.evaluate(&response(200, BOOK_STORE)?) {
        Err(failure) if failure.name == "RegexAssertion" => Ok(()),
        other => Err(AppError::assertion(format!(
            "Expected regex failure, got {:?}",
            other
        ))),
    }
}

#[test]
fn empty_chain_accepts_everything() -> AppResult<()> {
    let chain = AssertionChain::from_options(None, None, None)?;
    if chain.evaluate(&response(500, "")?).is_err() {
        return Err(AppError::assertion("Expected empty chain to pass"));
    }
    Ok(())
}

#[test]
fn chain_rejects_blank_status_codes() -> AppResult<()> {
    match AssertionChain::from_options(Some("  "), None, None) {
        Err(AssertionError::StatusCodesEmpty) => Ok(()),
        other => Err(AppError::assertion(format!(
            "Expected StatusCodesEmpty, got {:?}",
            other.map(|chain| chain.names())
        ))),
    }
}

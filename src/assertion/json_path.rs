use std::cmp::Ordering;
use std::fmt;

use serde_json::{Number, Value};
use serde_json_path::JsonPath;

use crate::error::AssertionError;
use crate::http::HttpResponse;

/// Comparison applied between the extracted value and the literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
}

impl Operator {
    fn parse(token: &str) -> Option<Self> {
        match token {
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            "==" => Some(Self::Eq),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "==",
        }
    }

    const fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Gt => ordering.is_gt(),
            Self::Ge => ordering.is_ge(),
            Self::Lt => ordering.is_lt(),
            Self::Le => ordering.is_le(),
            Self::Eq => ordering.is_eq(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `<path> <operator> <literal>` evaluated against a JSON response body.
/// The query is parsed once at construction.
#[derive(Debug, Clone)]
pub struct JsonPathAssertion {
    query: String,
    path: JsonPath,
    operator: Operator,
    literal: String,
}

impl JsonPathAssertion {
    /// Splits the expression into path, operator and literal. Everything
    /// after the operator is the literal.
    ///
    /// # Errors
    ///
    /// Returns an error when the expression is empty, has fewer than three
    /// parts, uses an unknown operator, or the path is not valid JSONPath.
    /// Dotted member names that RFC 9535 shorthand cannot express, such as
    /// `$.content-type`, are accepted and queried in bracket form.
    pub fn parse(expression: &str) -> Result<Self, AssertionError> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(AssertionError::ExpressionEmpty);
        }
        let invalid = || AssertionError::InvalidExpression {
            expression: expression.to_owned(),
        };

        let (query, rest) = trimmed.split_once(char::is_whitespace).ok_or_else(invalid)?;
        let (operator_token, literal) = rest
            .trim_start()
            .split_once(char::is_whitespace)
            .ok_or_else(invalid)?;
        let literal = literal.trim();
        if literal.is_empty() {
            return Err(invalid());
        }

        let operator =
            Operator::parse(operator_token).ok_or_else(|| AssertionError::UnknownOperator {
                operator: operator_token.to_owned(),
            })?;
        let path = JsonPath::parse(&bracket_member_names(query)).map_err(|err| {
            AssertionError::InvalidJsonPath {
                query: query.to_owned(),
                source: err,
            }
        })?;

        Ok(Self {
            query: query.to_owned(),
            path,
            operator,
            literal: literal.to_owned(),
        })
    }

    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub(super) fn check(&self, response: &HttpResponse) -> Result<(), String> {
        let document: Value = serde_json::from_slice(&response.body)
            .map_err(|err| format!("Response body is not valid JSON: {}", err))?;
        let actual = self
            .path
            .query(&document)
            .first()
            .ok_or_else(|| format!("No value found for '{}'", self.query))?;

        if self.compare(actual)? {
            Ok(())
        } else {
            Err(format!(
                "Assertion failed: Actual: {}, Expected: {} {}",
                display_value(actual),
                self.operator,
                self.literal
            ))
        }
    }

    fn compare(&self, actual: &Value) -> Result<bool, String> {
        match actual {
            Value::Number(number) => {
                let ordering = compare_number(number, &self.literal)?;
                Ok(ordering.is_some_and(|ordering| self.operator.holds(ordering)))
            }
            Value::Bool(flag) if self.operator == Operator::Eq => {
                let expected = parse_bool_literal(&self.literal).ok_or_else(|| {
                    format!("Assertion failed: '{}' is not a boolean", self.literal)
                })?;
                Ok(*flag == expected)
            }
            Value::String(text) if self.operator == Operator::Eq => Ok(*text == self.literal),
            Value::Null
            | Value::Bool(_)
            | Value::String(_)
            | Value::Array(_)
            | Value::Object(_) => Err(format!(
                "Assertion failed: mismatched type: actual {} ({}), expected '{} {}'",
                type_name(actual),
                display_value(actual),
                self.operator,
                self.literal
            )),
        }
    }
}

/// Rewrites every top-level dotted member whose name is not a valid
/// shorthand into a quoted bracket selector: `$.a-b..c-d.e` becomes
/// `$['a-b']..['c-d'].e`. Text inside brackets is left untouched.
pub(super) fn bracket_member_names(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut chars = query.chars().peekable();
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;

    while let Some(ch) = chars.next() {
        if let Some(open) = quote {
            out.push(ch);
            if ch == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if ch == open {
                quote = None;
            }
            continue;
        }

        match ch {
            '\'' | '"' if depth > 0 => {
                quote = Some(ch);
                out.push(ch);
            }
            '[' => {
                depth = depth.saturating_add(1);
                out.push(ch);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                out.push(ch);
            }
            '.' if depth == 0 => {
                let descendant = chars.next_if_eq(&'.').is_some();
                let mut name = String::new();
                while let Some(next) = chars.next_if(|next| *next != '.' && *next != '[') {
                    name.push(next);
                }

                if descendant {
                    out.push_str("..");
                }
                if name.is_empty() || name == "*" || is_shorthand_name(&name) {
                    if !descendant {
                        out.push('.');
                    }
                    out.push_str(&name);
                } else {
                    out.push_str("['");
                    for name_ch in name.chars() {
                        if name_ch == '\'' || name_ch == '\\' {
                            out.push('\\');
                        }
                        out.push(name_ch);
                    }
                    out.push_str("']");
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

fn is_shorthand_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || !first.is_ascii())
        && chars.all(|rest| rest.is_ascii_alphanumeric() || rest == '_' || !rest.is_ascii())
}

fn compare_number(actual: &Number, literal: &str) -> Result<Option<Ordering>, String> {
    if let (Some(left), Ok(right)) = (actual.as_i64(), literal.parse::<i64>()) {
        return Ok(Some(left.cmp(&right)));
    }
    let right = literal
        .parse::<f64>()
        .map_err(|err| format!("Assertion failed: '{}' is not a number: {}", literal, err))?;
    Ok(actual.as_f64().and_then(|left| left.partial_cmp(&right)))
}

fn parse_bool_literal(literal: &str) -> Option<bool> {
    match literal {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            value.to_string()
        }
    }
}

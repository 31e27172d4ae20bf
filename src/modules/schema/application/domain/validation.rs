//! Generic field-by-field validation over a declarative field list.
//!
//! Each field is checked on its own and stops at its first failure; errors
//! from different fields are all collected. The output is a normalized
//! object holding exactly the declared fields, with defaults applied and
//! values coerced to their declared JSON shape.

use email_address::{EmailAddress, Options};
use serde_json::{Map, Number, Value};
use url::Url;

use super::errors::{FieldError, Format};
use super::field::{FieldKind, FieldSpec, Presence};
use super::policies::ValidationPolicy;

pub const MAX_URL_LEN: usize = 2083;

pub fn validate_fields(
    fields: &[FieldSpec],
    raw: &Map<String, Value>,
    policy: &ValidationPolicy,
) -> Result<Map<String, Value>, Vec<FieldError>> {
    let mut normalized = Map::new();
    let mut errors = Vec::new();

    for spec in fields {
        match check_field(spec, raw.get(spec.name)) {
            Ok(value) => {
                normalized.insert(spec.name.to_string(), value);
            }
            Err(err) => errors.push(err),
        }
    }

    if policy.strict {
        errors.extend(
            raw.keys()
                .filter(|key| !fields.iter().any(|spec| spec.name == key.as_str()))
                .map(|key| FieldError::UnexpectedField { field: key.clone() }),
        );
    }

    if errors.is_empty() {
        Ok(normalized)
    } else {
        Err(errors)
    }
}

fn check_field(spec: &FieldSpec, value: Option<&Value>) -> Result<Value, FieldError> {
    match (value, spec.presence) {
        (None, Presence::Required) => Err(FieldError::MissingField {
            field: spec.name.to_string(),
        }),
        (None, Presence::Optional) | (Some(Value::Null), Presence::Optional) => Ok(Value::Null),
        (None, Presence::Defaulted(default)) => Ok(default.to_value()),
        (Some(Value::Null), Presence::Defaulted(default)) if spec.null_as_default => {
            Ok(default.to_value())
        }
        (Some(value), _) => coerce(spec, value),
    }
}

fn coerce(spec: &FieldSpec, value: &Value) -> Result<Value, FieldError> {
    let field = spec.name;
    match spec.kind {
        FieldKind::Text => text(field, &spec.kind, value).map(Value::from),
        FieldKind::Email => {
            let s = text(field, &spec.kind, value)?;
            check_email(field, s).map(Value::from)
        }
        FieldKind::Url => {
            let s = text(field, &spec.kind, value)?;
            check_http_url(field, s)?;
            Ok(Value::from(s))
        }
        FieldKind::Integer { min, max } => match integer(field, &spec.kind, value)? {
            Whole::Fits(n) => {
                check_range(field, n, min, max)?;
                Ok(Value::from(n))
            }
            Whole::Overflow(actual) => Err(range_violation(field, min, max, actual)),
        },
        FieldKind::Float => float(field, &spec.kind, value),
        FieldKind::Boolean => boolean(field, &spec.kind, value).map(Value::Bool),
        FieldKind::TextList => text_list(field, value),
        FieldKind::TextMap => text_map(field, value),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(field: &str, expected: &str, value: &Value) -> FieldError {
    FieldError::TypeMismatch {
        field: field.to_string(),
        expected: expected.to_string(),
        actual: kind_of(value).to_string(),
    }
}

fn text<'v>(field: &str, kind: &FieldKind, value: &'v Value) -> Result<&'v str, FieldError> {
    value
        .as_str()
        .ok_or_else(|| mismatch(field, kind.expected(), value))
}

/// A whole number read from input. `Overflow` holds values outside `i64`.
enum Whole {
    Fits(i64),
    Overflow(Number),
}

fn integer(field: &str, kind: &FieldKind, value: &Value) -> Result<Whole, FieldError> {
    let parsed = match value {
        Value::Number(n) => whole_number(n),
        Value::String(s) => whole_string(s.trim()),
        _ => None,
    };

    parsed.ok_or_else(|| mismatch(field, kind.expected(), value))
}

fn whole_number(n: &Number) -> Option<Whole> {
    if let Some(i) = n.as_i64() {
        return Some(Whole::Fits(i));
    }
    if n.is_u64() {
        return Some(Whole::Overflow(n.clone()));
    }

    let f = n.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)?;
    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(Whole::Fits(f as i64))
    } else {
        Some(Whole::Overflow(n.clone()))
    }
}

fn whole_string(s: &str) -> Option<Whole> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Whole::Fits(i));
    }

    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse::<u64>()
        .ok()
        .map(Number::from)
        .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64))
        .map(Whole::Overflow)
}

fn float(field: &str, kind: &FieldKind, value: &Value) -> Result<Value, FieldError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| mismatch(field, kind.expected(), value))
}

fn boolean(field: &str, kind: &FieldKind, value: &Value) -> Result<bool, FieldError> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };

    parsed.ok_or_else(|| mismatch(field, kind.expected(), value))
}

fn text_list(field: &str, value: &Value) -> Result<Value, FieldError> {
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(field, FieldKind::TextList.expected(), value))?;

    for (index, item) in items.iter().enumerate() {
        if !item.is_string() {
            return Err(mismatch(&format!("{field}[{index}]"), "a string", item));
        }
    }

    Ok(Value::Array(items.clone()))
}

fn text_map(field: &str, value: &Value) -> Result<Value, FieldError> {
    let entries = value
        .as_object()
        .ok_or_else(|| mismatch(field, FieldKind::TextMap.expected(), value))?;

    for (key, item) in entries {
        if !item.is_string() {
            return Err(mismatch(&format!("{field}.{key}"), "a string", item));
        }
    }

    Ok(Value::Object(entries.clone()))
}

/// Bare `local@domain.tld` only. Returns the address as stored.
fn check_email(field: &str, s: &str) -> Result<String, FieldError> {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal()
        .with_required_tld();

    EmailAddress::parse_with_options(s, options)
        .map(|addr| addr.email())
        .map_err(|e| FieldError::FormatViolation {
            field: field.to_string(),
            format: Format::Email,
            reason: e.to_string(),
        })
}

fn check_http_url(field: &str, s: &str) -> Result<(), FieldError> {
    let violation = |reason: String| FieldError::FormatViolation {
        field: field.to_string(),
        format: Format::Url,
        reason,
    };

    if s.len() > MAX_URL_LEN {
        return Err(violation(format!(
            "URL is longer than {MAX_URL_LEN} characters"
        )));
    }

    let url = Url::parse(s).map_err(|e| violation(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(violation(format!(
            "scheme `{}` is not http or https",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(violation("URL has no host".to_string()));
    }

    Ok(())
}

fn check_range(field: &str, n: i64, min: Option<i64>, max: Option<i64>) -> Result<(), FieldError> {
    let below = min.is_some_and(|lo| n < lo);
    let above = max.is_some_and(|hi| n > hi);

    if below || above {
        return Err(range_violation(field, min, max, Number::from(n)));
    }
    Ok(())
}

/// Missing bounds are reported as the `i64` limits.
fn range_violation(field: &str, min: Option<i64>, max: Option<i64>, actual: Number) -> FieldError {
    FieldError::RangeViolation {
        field: field.to_string(),
        min: min.unwrap_or(i64::MIN),
        max: max.unwrap_or(i64::MAX),
        actual,
    }
}

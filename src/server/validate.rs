//! Request validation
//!
//! A request body carries exactly one of two input encodings. The encoding is
//! resolved once at the boundary, and each variant is checked by a pure
//! function that either yields a feature vector aligned to the schema or a
//! client-facing validation error. Model state is never touched here.

use std::fmt;

use serde_json::Value;

/// How many missing feature names a validation error spells out.
const MISSING_PREVIEW_LIMIT: usize = 5;

/// A client input error with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two accepted input encodings, resolved from the request body.
#[derive(Debug)]
pub enum RequestEncoding<'a> {
    /// `features`: positional list of values in schema order.
    Positional(&'a Value),
    /// `payload`: name-to-value mapping covering every schema name.
    Named(&'a Value),
}

/// Pick the input encoding from the body, `features` taking precedence.
pub fn resolve_encoding(body: &Value) -> Option<RequestEncoding<'_>> {
    if let Some(features) = body.get("features") {
        return Some(RequestEncoding::Positional(features));
    }
    if let Some(payload) = body.get("payload") {
        return Some(RequestEncoding::Named(payload));
    }
    None
}

/// Validate a positional `features` list against a schema of `n_features`.
pub fn validate_positional(
    value: &Value,
    n_features: usize,
) -> Result<Vec<f64>, ValidationError> {
    let Some(list) = value.as_array() else {
        return Err(ValidationError::new(
            "'features' must be a list of numbers.",
        ));
    };
    if list.len() != n_features {
        return Err(ValidationError::new(format!(
            "'features' must contain {} values in feature order.",
            n_features
        )));
    }
    list.iter()
        .map(coerce_number)
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| ValidationError::new("'features' contains non-numeric values."))
}

/// Validate a named `payload` mapping, re-projected into schema order.
///
/// Only key presence and value parseability matter; the caller's key order is
/// irrelevant and extra keys are ignored.
pub fn validate_named(
    value: &Value,
    feature_names: &[String],
) -> Result<Vec<f64>, ValidationError> {
    let Some(mapping) = value.as_object() else {
        return Err(ValidationError::new(
            "'payload' must be an object of name:value pairs.",
        ));
    };

    let missing: Vec<&str> = feature_names
        .iter()
        .filter(|name| !mapping.contains_key(name.as_str()))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        let shown = &missing[..missing.len().min(MISSING_PREVIEW_LIMIT)];
        let suffix = if missing.len() > MISSING_PREVIEW_LIMIT {
            "..."
        } else {
            ""
        };
        return Err(ValidationError::new(format!(
            "missing features: {:?}{}",
            shown, suffix
        )));
    }

    feature_names
        .iter()
        .map(|name| coerce_number(&mapping[name.as_str()]))
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| ValidationError::new("non-numeric values in 'payload'."))
}

/// Coerce a JSON value to a finite f64: numbers and numeric strings qualify.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|x| x.is_finite()),
        _ => None,
    }
}

//! The trust boundary between server output and anything the GUI renders.
//! Response bodies arrive as `serde_json::Value`, get shape-checked into raw
//! structs, and leave as fully sanitized typed results or not at all.

use serde::Deserialize;
use serde_json::Value;

use super::{
    errors::PredictError,
    models::{
        BinaryGroup,
        BinaryPrediction,
        BinaryTopK,
        FlatPrediction,
        PredictionItem,
    },
};

/// Escapes the five HTML-significant characters to their named entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Labels may arrive as strings, numbers, or garbage; anything that is not a
/// scalar becomes the empty string.
fn coerce_label(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerces to f64 (numeric strings included), then clamps into [0, 1].
/// Non-numeric and non-finite values become 0.
fn coerce_probability(value: Option<&Value>) -> f64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn sanitize_item(raw: &Value) -> PredictionItem {
    PredictionItem {
        label: escape_html(&coerce_label(raw.get("label"))),
        probability: coerce_probability(raw.get("probability")),
    }
}

#[derive(Deserialize)]
struct RawFlat {
    top_k_predictions: Vec<Value>,
}

/// Shape-checks and sanitizes a base-endpoint body. Fails with
/// `InvalidResponseShape` before any per-item work when the predictions array
/// is missing or not an array; no partial output leaks out.
pub fn parse_flat(body: Value) -> Result<FlatPrediction, PredictError> {
    let raw: RawFlat =
        serde_json::from_value(body).map_err(|_| PredictError::InvalidResponseShape)?;

    Ok(FlatPrediction {
        top_k_predictions: raw.top_k_predictions.iter().map(sanitize_item).collect(),
    })
}

#[derive(Deserialize)]
struct RawBinary {
    #[serde(default)]
    prediction: Value,
    top_k: RawTopK,
}

#[derive(Deserialize)]
struct RawTopK {
    older: RawGroup,
    equal_or_younger: RawGroup,
}

#[derive(Deserialize)]
struct RawGroup {
    #[serde(default)]
    total_probability: Value,
    items: Vec<Value>,
}

fn sanitize_group(raw: &RawGroup) -> BinaryGroup {
    BinaryGroup {
        total_probability: coerce_probability(Some(&raw.total_probability)),
        items: raw.items.iter().map(sanitize_item).collect(),
    }
}

/// Shape-checks and sanitizes a binary-endpoint body. Both group item arrays
/// must be present; the scalar fields are coerced leniently like item fields.
pub fn parse_binary(body: Value) -> Result<BinaryPrediction, PredictError> {
    let raw: RawBinary =
        serde_json::from_value(body).map_err(|_| PredictError::InvalidResponseShape)?;

    Ok(BinaryPrediction {
        prediction: escape_html(&coerce_label(Some(&raw.prediction))),
        top_k: BinaryTopK {
            older: sanitize_group(&raw.top_k.older),
            equal_or_younger: sanitize_group(&raw.top_k.equal_or_younger),
        },
    })
}

//! Model parameter schemas and the typed values read back from the form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Select-control value standing in for a logical null option.
pub const NONE_SENTINEL: &str = "none";

/// One entry of a model's parameter schema as served by
/// `GET /model/{id}/parameters`. The backend tags entries with a `type`
/// field: `"number"` for free numeric parameters, `"select"` for a fixed
/// option set. Options may contain JSON `null`, which the form renders as
/// the [`NONE_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum ParameterSpec {
    #[serde(rename = "number")]
    Numeric {
        #[serde(default)]
        default: Option<f64>,
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
        #[serde(default)]
        step: Option<f64>,
        #[serde(default)]
        description: String,
    },
    #[serde(rename = "select")]
    Enumerated {
        options: Vec<Option<String>>,
        #[serde(default)]
        default: Option<String>,
        #[serde(default)]
        description: String,
    },
}

impl ParameterSpec {
    pub fn description(&self) -> &str {
        match self {
            Self::Numeric { description, .. } => description,
            Self::Enumerated { description, .. } => description,
        }
    }

    /// Initial value a freshly rendered control carries.
    pub fn default_value(&self) -> ParameterValue {
        match self {
            Self::Numeric { default, .. } => ParameterValue::Number(default.unwrap_or(0.0)),
            Self::Enumerated { default, .. } => match default {
                Some(option) => ParameterValue::Text(option.clone()),
                None => ParameterValue::Null,
            },
        }
    }
}

/// Schema of a selected model: parameter name to spec. `BTreeMap` keeps the
/// rendered control order stable across re-renders.
pub type ParameterSchema = BTreeMap<String, ParameterSpec>;

/// Typed parameter bag sent with a forecast request.
pub type ParameterValues = BTreeMap<String, ParameterValue>;

/// One parameter value as read back from its control. Serializes untagged,
/// so `Null` becomes JSON `null` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Null,
    Number(f64),
    Text(String),
}

impl ParameterValue {
    /// Reads a numeric field back; unparseable input defaults to 0.
    pub fn from_numeric_input(raw: &str) -> Self {
        Self::Number(raw.trim().parse::<f64>().unwrap_or(0.0))
    }

    /// Reads a select control back, mapping the sentinel to the logical null.
    pub fn from_select(raw: &str) -> Self {
        if raw == NONE_SENTINEL {
            Self::Null
        } else {
            Self::Text(raw.to_string())
        }
    }

    /// Value attribute for a select control, sentinel included.
    pub fn select_value(&self) -> String {
        match self {
            Self::Null => NONE_SENTINEL.to_string(),
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }

    /// Value attribute for a numeric input.
    pub fn numeric_value(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
            Self::Null => String::new(),
        }
    }
}

/// Seeds the parameter bag from schema defaults when a model is selected.
pub fn default_values(schema: &ParameterSchema) -> ParameterValues {
    schema
        .iter()
        .map(|(name, spec)| (name.clone(), spec.default_value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arima_like_schema() -> ParameterSchema {
        serde_json::from_value(serde_json::json!({
            "p": {"type": "number", "default": 2, "min": 0, "max": 5, "description": "autoregressive order"},
            "train_ratio": {"type": "number", "default": 0.8, "min": 0.5, "max": 0.95, "step": 0.05, "description": "training split"},
            "trend": {"type": "select", "options": ["n", "c", "t", "ct"], "default": "n", "description": "trend term"},
        }))
        .unwrap()
    }

    #[test]
    fn schema_deserializes_tagged_variants() {
        let schema = arima_like_schema();

        assert!(matches!(schema["p"], ParameterSpec::Numeric { default: Some(d), .. } if d == 2.0));
        assert!(matches!(schema["trend"], ParameterSpec::Enumerated { .. }));
        assert_eq!(schema["trend"].description(), "trend term");
    }

    #[test]
    fn schema_tolerates_null_options_and_missing_default() {
        let schema: ParameterSchema = serde_json::from_value(serde_json::json!({
            "seasonality": {"type": "select", "options": [null, "additive", "multiplicative"]},
        }))
        .unwrap();

        assert_eq!(schema["seasonality"].default_value(), ParameterValue::Null);
        match &schema["seasonality"] {
            ParameterSpec::Enumerated { options, .. } => assert_eq!(options[0], None),
            other => panic!("unexpected spec: {other:?}"),
        }
    }

    #[test]
    fn default_values_follow_schema_defaults() {
        let values = default_values(&arima_like_schema());

        assert_eq!(values["p"], ParameterValue::Number(2.0));
        assert_eq!(values["train_ratio"], ParameterValue::Number(0.8));
        assert_eq!(values["trend"], ParameterValue::Text("n".to_string()));
    }

    #[test]
    fn numeric_input_defaults_to_zero_on_parse_failure() {
        assert_eq!(ParameterValue::from_numeric_input("3.5"), ParameterValue::Number(3.5));
        assert_eq!(ParameterValue::from_numeric_input(" 7 "), ParameterValue::Number(7.0));
        assert_eq!(ParameterValue::from_numeric_input("abc"), ParameterValue::Number(0.0));
        assert_eq!(ParameterValue::from_numeric_input(""), ParameterValue::Number(0.0));
    }

    #[test]
    fn select_sentinel_round_trips_to_null() {
        assert_eq!(ParameterValue::from_select("none"), ParameterValue::Null);
        assert_eq!(ParameterValue::from_select("ct"), ParameterValue::Text("ct".to_string()));
        assert_eq!(ParameterValue::Null.select_value(), "none");
    }

    #[test]
    fn null_serializes_as_json_null() {
        let json = serde_json::to_value(ParameterValue::Null).unwrap();
        assert!(json.is_null());

        let round: ParameterValue = serde_json::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(round, ParameterValue::Null);
    }
}

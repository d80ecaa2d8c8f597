//! JSON entry point for UI callers.
//!
//! Each input object needs a string `label` (or `element`) and a numeric `score`.
//! Every other field rides along untouched, so the output objects are the input
//! objects plus `rank`, `size`, `opacity` and `tilt`. A derived field overwrites
//! an input field of the same name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cloud::builder::try_build_layout;
use crate::cloud::item::Scored;
use crate::cloud::style::CloudStyle;
use crate::errors::CloudError;

/// One input object, kept whole so its fields serialize back out unchanged.
#[derive(Debug, Clone, Serialize)]
struct JsonItem {
    #[serde(skip)]
    label: String,
    #[serde(skip)]
    score: f64,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// The keys the layout reads; everything else stays in `JsonItem::fields`.
#[derive(Debug, Deserialize)]
struct ItemKeys {
    #[serde(default)]
    label: Option<Value>,
    #[serde(default)]
    element: Option<Value>,
    score: f64,
}

impl JsonItem {
    fn from_fields(index: usize, fields: Map<String, Value>) -> Result<Self, CloudError> {
        let keys: ItemKeys = serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|e| CloudError::InvalidInput(format!("item {index}: {e}")))?;

        // `label` wins when it is a string; otherwise fall back to `element`.
        let label = [&keys.label, &keys.element]
            .into_iter()
            .find_map(|v| v.as_ref().and_then(Value::as_str))
            .ok_or_else(|| {
                CloudError::InvalidInput(format!("item {index}: no string `label` or `element`"))
            })?
            .to_string();

        Ok(Self {
            label,
            score: keys.score,
            fields,
        })
    }
}

impl Scored for JsonItem {
    fn label(&self) -> &str {
        &self.label
    }

    fn score(&self) -> f64 {
        self.score
    }
}

/// Lays out a JSON array of scored objects and returns the enriched array.
pub fn build_layout_json(input: Value, style: &CloudStyle) -> Result<Value, CloudError> {
    let objects: Vec<Map<String, Value>> = serde_json::from_value(input)?;

    let items = objects
        .into_iter()
        .enumerate()
        .map(|(index, fields)| JsonItem::from_fields(index, fields))
        .collect::<Result<Vec<_>, _>>()?;

    let layout = try_build_layout(&items, style)?;
    Ok(serde_json::to_value(layout)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_fields_survive() {
        let input = json!([
            { "label": "Fire", "score": 2, "color": "#f40", "meta": { "group": 1 } },
            { "label": "Water", "score": 8 }
        ]);
        let output = build_layout_json(input, &CloudStyle::default()).unwrap();
        assert_eq!(
            output,
            json!([
                { "label": "Water", "score": 8, "rank": 1, "size": 54.0, "opacity": 1.0, "tilt": -3.0 },
                {
                    "label": "Fire", "score": 2, "color": "#f40", "meta": { "group": 1 },
                    "rank": 2, "size": 16.0, "opacity": 0.5, "tilt": -1.0
                }
            ])
        );
    }

    #[test]
    fn test_element_key_is_kept_as_is() {
        let input = json!([{ "element": "Metal", "score": 1.5 }]);
        let output = build_layout_json(input, &CloudStyle::default()).unwrap();
        let first = &output[0];
        assert_eq!(first["element"], "Metal");
        assert!(first.get("label").is_none());
        assert_eq!(first["rank"], 1);
    }

    #[test]
    fn test_derived_fields_overwrite_input() {
        let input = json!([{ "label": "Wood", "score": 1, "rank": 99 }]);
        let output = build_layout_json(input, &CloudStyle::default()).unwrap();
        assert_eq!(output[0]["rank"], 1);
    }

    #[test]
    fn test_empty_array() {
        let output = build_layout_json(json!([]), &CloudStyle::default()).unwrap();
        assert_eq!(output, json!([]));
    }

    #[test]
    fn test_non_array_rejected() {
        let err = build_layout_json(json!({ "label": "x", "score": 1 }), &CloudStyle::default())
            .unwrap_err();
        assert!(matches!(err, CloudError::InvalidInput(_)));
    }

    #[test]
    fn test_non_object_item_rejected() {
        let err = build_layout_json(json!([{ "label": "x", "score": 1 }, 7]), &CloudStyle::default())
            .unwrap_err();
        assert!(err.to_string().contains("invalid type"), "got {err}");
    }

    #[test]
    fn test_missing_score_rejected() {
        let err = build_layout_json(json!([{ "label": "x" }]), &CloudStyle::default()).unwrap_err();
        assert_eq!(
            err,
            CloudError::InvalidInput("item 0: missing field `score`".to_string())
        );
    }

    #[test]
    fn test_string_score_rejected() {
        let err = build_layout_json(json!([{ "label": "x", "score": "9" }]), &CloudStyle::default())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("item 0: invalid type: string"), "got {msg}");
    }

    #[test]
    fn test_missing_label_rejected() {
        let err = build_layout_json(json!([{ "score": 3 }]), &CloudStyle::default()).unwrap_err();
        assert!(err.to_string().contains("item 0: no string `label`"), "got {err}");
    }

    #[test]
    fn test_non_string_label_falls_back_to_element() {
        let input = json!([{ "label": 42, "element": "Metal", "score": 2 }]);
        let output = build_layout_json(input, &CloudStyle::default()).unwrap();
        assert_eq!(output[0]["element"], "Metal");
        assert_eq!(output[0]["label"], 42);
        assert_eq!(output[0]["rank"], 1);
    }
}

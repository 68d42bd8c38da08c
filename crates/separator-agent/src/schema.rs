//! Response schema and structured-output validation.

use serde_json::{Value, json};

use separator_core::{AnalysisResult, Category};

use crate::error::{AnalysisError, Result};

/// The four fields every result record must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["task", "category", "reason", "prescription"];

/// JSON schema for the response: an array of classification records.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "task": { "type": "STRING" },
                "category": {
                    "type": "STRING",
                    "enum": Category::literals(),
                },
                "reason": { "type": "STRING" },
                "prescription": { "type": "STRING" },
            },
            "required": REQUIRED_FIELDS,
        }
    })
}

/// Parse and validate the raw response text.
///
/// The whole batch is rejected on the first malformed record; nothing is
/// repaired.
pub fn parse_results(raw: &str) -> Result<Vec<AnalysisResult>> {
    let value: Value = serde_json::from_str(raw.trim()).map_err(|e| AnalysisError::Parse {
        detail: format!("invalid JSON: {e}"),
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(AnalysisError::Parse {
                detail: format!("expected a JSON array, got {}", kind_of(&other)),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<AnalysisResult>(item).map_err(|e| AnalysisError::Parse {
                detail: format!("item {i}: {e}"),
            })
        })
        .collect()
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_literals_and_required_fields() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(
            schema["items"]["properties"]["category"]["enum"],
            json!(["AI_OPTIMAL", "HYBRID", "HUMAN_ESSENTIAL"])
        );
        assert_eq!(schema["items"]["required"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn valid_batch_parses_in_order() {
        let raw = r#"[
            {"task":"a","category":"HUMAN_ESSENTIAL","reason":"r","prescription":"p"},
            {"task":"b","category":"AI_OPTIMAL","reason":"r","prescription":"p"}
        ]"#;
        let results = parse_results(raw).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].task, "a");
        assert_eq!(results[1].category, Category::AiOptimal);
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_results("[]").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_results("Sure! Here is the analysis").unwrap_err();
        assert!(matches!(err, AnalysisError::Parse { ref detail } if detail.starts_with("invalid JSON")));
    }

    #[test]
    fn object_is_not_an_array() {
        let err = parse_results(r#"{"task":"a"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse { ref detail } if detail.contains("an object")));
    }

    #[test]
    fn missing_field_rejects_batch() {
        let raw = r#"[
            {"task":"a","category":"HYBRID","reason":"r","prescription":"p"},
            {"task":"b","category":"HYBRID","reason":"r"}
        ]"#;
        let err = parse_results(raw).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse { ref detail } if detail.starts_with("item 1")));
    }

    #[test]
    fn unknown_category_rejects_batch() {
        let raw = r#"[{"task":"a","category":"MAYBE","reason":"r","prescription":"p"}]"#;
        assert!(matches!(
            parse_results(raw),
            Err(AnalysisError::Parse { .. })
        ));
    }
}

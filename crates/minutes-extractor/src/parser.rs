//! Parse LLM output into action item candidates

use crate::dates::normalize;
use crate::error::ExtractorError;
use chrono::NaiveDate;
use minutes_domain::{ActionItemCandidate, DueDate, Owner};
use serde_json::Value;
use tracing::warn;

/// Parse an LLM JSON response into action item candidates
///
/// Accepts either `{"actionItems": [...]}` or a bare array, optionally
/// wrapped in a markdown code block. Due dates go through the same
/// normalizer as heuristic extraction, resolved against `today`. Items
/// that fail to parse or validate are skipped.
pub fn parse_llm_response(
    response: &str,
    today: NaiveDate,
) -> Result<Vec<ActionItemCandidate>, ExtractorError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let items_array = match &json {
        Value::Array(items) => items,
        Value::Object(obj) => obj
            .get("actionItems")
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                ExtractorError::InvalidFormat("Missing 'actionItems' array".to_string())
            })?,
        _ => {
            return Err(ExtractorError::InvalidFormat(
                "Expected JSON object or array".to_string(),
            ))
        }
    };

    let mut items = Vec::new();
    for (idx, item_json) in items_array.iter().enumerate() {
        match parse_item_json(item_json, today) {
            Ok(item) => {
                if let Err(e) = item.validate() {
                    warn!("Action item {} failed validation: {}", idx, e);
                    continue;
                }
                items.push(item);
            }
            Err(e) => {
                warn!("Failed to parse action item {}: {}", idx, e);
            }
        }
    }

    Ok(items)
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::InvalidFormat("Empty code block".to_string()));
        }

        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        Ok(lines[1..end].join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse a single action item from JSON
fn parse_item_json(json: &Value, today: NaiveDate) -> Result<ActionItemCandidate, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Action item is not a JSON object".to_string())?;

    let task = obj
        .get("task")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing or invalid 'task'".to_string())?
        .trim()
        .to_string();

    let owner = match obj.get("owner") {
        None | Some(Value::Null) => Owner::Unassigned,
        Some(Value::String(name)) => Owner::from(name.trim().to_string()),
        Some(_) => return Err("Invalid 'owner'".to_string()),
    };

    let due_date = match obj.get("due_date").or_else(|| obj.get("dueDate")) {
        None | Some(Value::Null) => DueDate::NotFound,
        Some(Value::String(raw)) => normalize(raw, today).into_due_date(),
        Some(_) => return Err("Invalid 'due_date'".to_string()),
    };

    Ok(ActionItemCandidate::new(task, owner, due_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_parse_wrapped_object() {
        let response = r#"{
            "actionItems": [
                { "task": "prepare the slides", "owner": "Sarah", "due_date": "2026-02-20" }
            ]
        }"#;

        let items = parse_llm_response(response, today()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "prepare the slides");
        assert_eq!(items[0].owner, Owner::Named("Sarah".to_string()));
        assert_eq!(
            items[0].due_date,
            DueDate::On(NaiveDate::from_ymd_opt(2026, 2, 20).unwrap())
        );
    }

    #[test]
    fn test_parse_bare_array() {
        let response = r#"[{ "task": "book the venue", "owner": "Unassigned", "due_date": "Not Found" }]"#;

        let items = parse_llm_response(response, today()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].owner, Owner::Unassigned);
        assert_eq!(items[0].due_date, DueDate::NotFound);
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let response = "```json\n{\"actionItems\": [{\"task\": \"send the invoice\", \"owner\": \"Raj\", \"due_date\": \"tomorrow\"}]}\n```";

        let items = parse_llm_response(response, today()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].due_date,
            DueDate::On(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap())
        );
    }

    #[test]
    fn test_missing_optional_fields() {
        let response = r#"{"actionItems": [{ "task": "archive the channel", "owner": null }]}"#;

        let items = parse_llm_response(response, today()).unwrap();
        assert_eq!(items[0].owner, Owner::Unassigned);
        assert_eq!(items[0].due_date, DueDate::NotFound);
    }

    #[test]
    fn test_invalid_items_are_skipped() {
        let response = r#"{"actionItems": [
            { "owner": "Sarah" },
            { "task": "   " },
            "not an object",
            { "task": "fix the build", "owner": 42 },
            { "task": "update the roadmap", "dueDate": "friday" }
        ]}"#;

        let items = parse_llm_response(response, today()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "update the roadmap");
        assert_eq!(
            items[0].due_date,
            DueDate::On(NaiveDate::from_ymd_opt(2026, 10, 23).unwrap())
        );
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_llm_response("This is not JSON", today());
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_object_without_action_items() {
        let result = parse_llm_response(r#"{"items": []}"#, today());
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_empty_array() {
        let items = parse_llm_response("[]", today()).unwrap();
        assert!(items.is_empty());
    }
}

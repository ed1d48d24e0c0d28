use std::collections::BTreeMap;

use chrono::DateTime;
use serde_json::{Map, Value};

use crate::errors::FieldError;
use crate::models::quiz_result::NewQuizResult;

const MAX_TOP_MATCHES: usize = 3;

/// Validates a quiz-result submission, collecting every field failure.
/// Unknown fields are ignored.
pub fn validate_submission(body: &Value) -> Result<NewQuizResult, Vec<FieldError>> {
    let Some(obj) = body.as_object() else {
        return Err(vec![FieldError::new(
            "body",
            format!("Expected object, received {}", type_name(body)),
        )]);
    };

    let mut errors = Vec::new();

    let session_id = match required(obj, "session_id", &mut errors) {
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(FieldError::new("session_id", "Must not be empty"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(expected("session_id", "string", other));
            None
        }
        None => None,
    };

    let answers = match required(obj, "answers", &mut errors) {
        Some(v @ Value::Array(_)) => Some(v.clone()),
        Some(other) => {
            errors.push(expected("answers", "array", other));
            None
        }
        None => None,
    };

    let top_matches = match required(obj, "top_matches", &mut errors) {
        Some(Value::Array(items)) => {
            let before = errors.len();
            if items.len() > MAX_TOP_MATCHES {
                errors.push(FieldError::new(
                    "top_matches",
                    format!("Must contain at most {MAX_TOP_MATCHES} entries"),
                ));
            }
            let keys: Vec<String> = items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| match item {
                    Value::String(s) => Some(s.clone()),
                    other => {
                        errors.push(expected(&format!("top_matches[{i}]"), "string", other));
                        None
                    }
                })
                .collect();
            (errors.len() == before).then_some(keys)
        }
        Some(other) => {
            errors.push(expected("top_matches", "array", other));
            None
        }
        None => None,
    };

    let scores = match required(obj, "scores", &mut errors) {
        Some(Value::Object(map)) => {
            let before = errors.len();
            let mut scores = BTreeMap::new();
            for (key, value) in map {
                match value.as_f64() {
                    Some(n) => {
                        scores.insert(key.clone(), n);
                    }
                    None => errors.push(expected(&format!("scores.{key}"), "number", value)),
                }
            }
            (errors.len() == before).then_some(scores)
        }
        Some(other) => {
            errors.push(expected("scores", "object", other));
            None
        }
        None => None,
    };

    let created_at = match required(obj, "created_at", &mut errors) {
        Some(Value::String(s)) => match DateTime::parse_from_rfc3339(s) {
            Ok(_) => Some(s.clone()),
            Err(_) => {
                errors.push(FieldError::new(
                    "created_at",
                    "Invalid datetime, expected RFC 3339",
                ));
                None
            }
        },
        Some(other) => {
            errors.push(expected("created_at", "string", other));
            None
        }
        None => None,
    };

    match (session_id, answers, top_matches, scores, created_at) {
        (Some(session_id), Some(answers), Some(top_matches), Some(scores), Some(created_at))
            if errors.is_empty() =>
        {
            Ok(NewQuizResult {
                session_id,
                answers,
                top_matches,
                scores,
                created_at,
            })
        }
        _ => Err(errors),
    }
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Value> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(v) => Some(v),
    }
}

fn expected(field: &str, wanted: &str, got: &Value) -> FieldError {
    FieldError::new(
        field,
        format!("Expected {wanted}, received {}", type_name(got)),
    )
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

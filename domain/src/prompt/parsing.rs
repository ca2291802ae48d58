//! Completion output parsing.
//!
//! Models are asked for JSON but do not always comply. These functions
//! extract structured values from free-form responses. They are pure domain
//! logic: no I/O, just text inspection.
//!
//! | Function | Preferred format | Fallbacks |
//! |----------|------------------|-----------|
//! | [`parse_questions`] | `{"questions": [..]}` | bare JSON array, numbered/bulleted lines |
//! | [`parse_feedback`] | `{"feedback": .., "suggestedAnswer": ..}` | whole text as feedback |

use crate::interview::feedback::AnswerFeedback;
use serde_json::Value;

/// Extract the question list from a model response.
///
/// Blank entries are dropped; an empty result means nothing usable was found.
pub fn parse_questions(response: &str) -> Vec<String> {
    let questions = json_candidates(response)
        .into_iter()
        .find_map(|value| questions_from_json(&value))
        .unwrap_or_else(|| questions_from_lines(response));

    questions
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect()
}

/// Extract feedback and a suggested answer from a model response.
///
/// Returns `None` only when the response is blank.
pub fn parse_feedback(response: &str) -> Option<AnswerFeedback> {
    if let Some(feedback) = json_candidates(response)
        .into_iter()
        .find_map(|value| feedback_from_json(&value))
    {
        return Some(feedback);
    }

    let text = response.trim();
    if text.is_empty() {
        None
    } else {
        Some(AnswerFeedback::new(text, ""))
    }
}

/// JSON values worth inspecting, most specific first: fenced blocks, the
/// whole response, then the outermost `{..}` / `[..]` spans.
fn json_candidates(response: &str) -> Vec<Value> {
    let mut candidates = Vec::new();

    let mut in_block = false;
    let mut current_block = String::new();
    for line in response.lines() {
        let trimmed = line.trim();
        if !in_block && trimmed.starts_with("```") {
            in_block = true;
            current_block.clear();
        } else if in_block && trimmed == "```" {
            in_block = false;
            if let Ok(value) = serde_json::from_str::<Value>(&current_block) {
                candidates.push(value);
            }
        } else if in_block {
            current_block.push_str(line);
            current_block.push('\n');
        }
    }

    if let Ok(value) = serde_json::from_str::<Value>(response.trim()) {
        candidates.push(value);
    }

    for (open, close) in [('{', '}'), ('[', ']')] {
        if let Some(start) = response.find(open)
            && let Some(end) = response.rfind(close)
            && end > start
            && let Ok(value) = serde_json::from_str::<Value>(&response[start..=end])
        {
            candidates.push(value);
        }
    }

    candidates
}

fn strings(array: &[Value]) -> Vec<String> {
    array
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

fn questions_from_json(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Object(map) => map
            .get("questions")
            .and_then(Value::as_array)
            .map(|a| strings(a)),
        Value::Array(array) => Some(strings(array)),
        _ => None,
    }
}

fn feedback_from_json(value: &Value) -> Option<AnswerFeedback> {
    let feedback = value.get("feedback")?.as_str()?;
    let suggested = value
        .get("suggestedAnswer")
        .or_else(|| value.get("suggested_answer"))
        .and_then(Value::as_str)
        .unwrap_or("");
    Some(AnswerFeedback::new(feedback.trim(), suggested.trim()))
}

/// Lines that look like list items: `1. ..`, `2) ..`, `- ..`, `* ..`
fn questions_from_lines(response: &str) -> Vec<String> {
    response
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
                return Some(rest.to_string());
            }
            let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            let rest = &line[digits..];
            rest.strip_prefix('.')
                .or_else(|| rest.strip_prefix(')'))
                .map(|q| q.trim().to_string())
        })
        .collect()
}

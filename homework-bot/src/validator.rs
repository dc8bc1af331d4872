//! Shape checks on the raw API response.

use serde_json::Value;

use crate::error::PollError;

/// Returns the `homeworks` array, in order and unmodified.
///
/// Fails with [`PollError::MissingKey`] when the key is absent, [`PollError::NotList`] when it is
/// not an array and [`PollError::EmptyList`] when the array has no elements.
pub fn extract(response: &Value) -> Result<&Vec<Value>, PollError> {
    let homeworks = response
        .get("homeworks")
        .ok_or_else(|| PollError::MissingKey("homeworks".to_string()))?;
    let list = homeworks.as_array().ok_or(PollError::NotList)?;
    if list.is_empty() {
        return Err(PollError::EmptyList);
    }
    Ok(list)
}

/// The server time the response was produced at; next poll's cursor.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

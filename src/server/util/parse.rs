//! Helpers for the JSON array columns (`app_roles`, `recurrence_frequency_days`).

use sea_orm::DbErr;

/// Parses a JSON integer array column such as `recurrence_frequency_days`.
///
/// # Arguments
/// - `column` - Column name, used in the error
/// - `value` - Stored JSON text
///
/// # Returns
/// - `Ok(Vec<i32>)` - Parsed values in stored order
/// - `Err(DbErr::Json)` - Stored text is not an integer array
pub fn parse_int_array(column: &str, value: &str) -> Result<Vec<i32>, DbErr> {
    serde_json::from_str::<Vec<i32>>(value)
        .map_err(|e| DbErr::Json(format!("column '{}': {}", column, e)))
}

/// Parses a JSON string array column such as `app_roles`.
pub fn parse_string_array(column: &str, value: &str) -> Result<Vec<String>, DbErr> {
    serde_json::from_str::<Vec<String>>(value)
        .map_err(|e| DbErr::Json(format!("column '{}': {}", column, e)))
}

/// Serializes values for a JSON array column.
pub fn to_json_array<T: serde::Serialize>(column: &str, values: &[T]) -> Result<String, DbErr> {
    serde_json::to_string(values).map_err(|e| DbErr::Json(format!("column '{}': {}", column, e)))
}

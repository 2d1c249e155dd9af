use crate::model::api::FieldErrorDto;

/// A rejected payload field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> FieldErrorDto {
        FieldErrorDto {
            field: self.field,
            message: self.message,
        }
    }
}

/// Rejects blank required text fields.
///
/// Appends an error for `field` when `value` is empty after trimming.
pub fn require_text(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

const JSON_DATA_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Turns a JSON data rejection message into the field it complains about.
///
/// The message carries an optional `path: ` prefix naming the offending value,
/// e.g. `recurrence_frequency_days[0]: invalid type ...`. A missing field at the
/// top level has no path, so the field name is taken from the serde message.
/// Anything else is reported against `body`.
pub fn field_error_from_json(text: &str) -> FieldError {
    let detail = text.strip_prefix(JSON_DATA_PREFIX).unwrap_or(text);
    let detail = strip_position(detail);

    let (path, message) = match detail.split_once(": ") {
        Some((path, message)) if !path.is_empty() && !path.contains(' ') => (Some(path), message),
        _ => (None, detail),
    };

    if let Some(field) = missing_field(message) {
        return match path {
            Some(path) => FieldError::new(&format!("{path}.{field}"), "is required"),
            None => FieldError::new(field, "is required"),
        };
    }

    FieldError::new(path.unwrap_or("body"), message)
}

/// Field name out of a serde missing-field message.
fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split_once('`'))
        .map(|(field, _)| field)
}

/// Drops serde's trailing ` at line L column C`.
fn strip_position(message: &str) -> &str {
    match message.rsplit_once(" at line ") {
        Some((head, tail))
            if tail.split_once(" column ").is_some_and(|(line, column)| {
                is_number(line) && is_number(column)
            }) =>
        {
            head
        }
        _ => message,
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected: the serde path names the field, the position suffix is dropped
    #[test]
    fn type_mismatch_names_the_path() {
        let error = field_error_from_json(
            "Failed to deserialize the JSON body into the target type: location_id: invalid type: string \"abc\", expected i32 at line 1 column 20",
        );

        assert_eq!(error.field, "location_id");
        assert_eq!(error.message, "invalid type: string \"abc\", expected i32");
    }

    /// Expected: nested paths are kept whole
    #[test]
    fn nested_path_is_kept() {
        let error = field_error_from_json(
            "Failed to deserialize the JSON body into the target type: recurrence_frequency_days[1]: invalid type: string \"mon\", expected i32 at line 1 column 80",
        );

        assert_eq!(error.field, "recurrence_frequency_days[1]");
        assert_eq!(error.message, "invalid type: string \"mon\", expected i32");
    }

    /// Expected: a missing top-level field is named from the serde message
    #[test]
    fn missing_top_level_field() {
        let error = field_error_from_json(
            "Failed to deserialize the JSON body into the target type: missing field `title` at line 1 column 2",
        );

        assert_eq!(error, FieldError::new("title", "is required"));
    }

    /// Expected: a missing nested field is joined onto its parent path
    #[test]
    fn missing_nested_field() {
        let error = field_error_from_json(
            "Failed to deserialize the JSON body into the target type: location: missing field `name` at line 1 column 40",
        );

        assert_eq!(error, FieldError::new("location.name", "is required"));
    }

    /// Expected: messages without a path fall back to `body`
    #[test]
    fn unrecognized_message_is_reported_on_body() {
        let error = field_error_from_json(
            "Failed to deserialize the JSON body into the target type: invalid type: integer `3`, expected a map at line 1 column 1",
        );

        assert_eq!(error.field, "body");
        assert_eq!(error.message, "invalid type: integer `3`, expected a map");
    }
}

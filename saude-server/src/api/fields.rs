use crate::api::error::ValidationErrors;

use chrono::NaiveDate;
use serde_json::Value;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const NULL_MESSAGE: &str = "This field may not be null.";
pub const BLANK_MESSAGE: &str = "This field may not be blank.";
pub const NOT_A_STRING_MESSAGE: &str = "Not a valid string.";
pub const DATE_FORMAT_MESSAGE: &str =
    "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";
pub const NOT_A_DICT_MESSAGE: &str = "Invalid data. Expected a dictionary.";

/// Decode a string field, collecting failures under `field`.
///
/// `value` is the field as it appeared in the body; the caller handles
/// the absent case. Returns None when the value is unusable.
pub fn decode_string(
    value: &Value,
    field: &str,
    allow_blank: bool,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        Value::Null => {
            errors.add(field, NULL_MESSAGE);
            None
        }
        Value::String(s) => {
            if s.is_empty() && !allow_blank {
                errors.add(field, BLANK_MESSAGE);
                None
            } else {
                Some(s.clone())
            }
        }
        _ => {
            errors.add(field, NOT_A_STRING_MESSAGE);
            None
        }
    }
}

/// Decode a `YYYY-MM-DD` date field, collecting failures under `field`.
pub fn decode_date(value: &Value, field: &str, errors: &mut ValidationErrors) -> Option<NaiveDate> {
    match value {
        Value::Null => {
            errors.add(field, NULL_MESSAGE);
            None
        }
        Value::String(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.add(field, DATE_FORMAT_MESSAGE);
                None
            }
        },
        _ => {
            errors.add(field, DATE_FORMAT_MESSAGE);
            None
        }
    }
}

//! Form structs checked by `validator` before anything is written.
//!
//! A failed validation aggregates every violated field rule into one
//! human-readable message which callers surface to the user verbatim.

use validator::ValidationErrors;

pub mod budget;
pub mod customer;
pub mod product;
pub mod settings;

/// Delimiter used when joining field errors into one message.
pub const ERROR_DELIMITER: &str = ", ";

/// Flattens every field error into a single user-facing message.
///
/// Messages are sorted so the aggregate is stable regardless of field
/// iteration order.
#[must_use]
pub fn collect_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    messages.join(ERROR_DELIMITER)
}

//! Turns `validator` failures into the single message carried by a 400
//! envelope.
//!
//! Constraints themselves are declared on the target type with
//! `#[derive(Validate)]`; this module only evaluates and renders them.
//! Fields are reported in sorted path order so the same failure always
//! renders the same message.

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Run the constraints declared on `value`.
pub fn check<T: Validate>(value: &T) -> Result<(), CoreError> {
    value.validate().map_err(CoreError::from)
}

/// Render every failed constraint as `path: reason`, joined by `"; "`.
///
/// The reason is the constraint's custom message when one is declared,
/// otherwise `failed <code> check`.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut lines = Vec::new();
    collect(errors, "", &mut lines);
    lines.sort();
    lines.join("; ")
}

fn collect(errors: &ValidationErrors, prefix: &str, lines: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    lines.push(format!("{path}: {}", reason(failure)));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, lines),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), lines);
                }
            }
        }
    }
}

fn reason(failure: &ValidationError) -> String {
    match &failure.message {
        Some(message) => message.to_string(),
        None => format!("failed {} check", failure.code),
    }
}

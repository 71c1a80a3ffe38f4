//! Request body validation helpers for `validator` derives

use crate::errors::{FieldErrors, KyxError};
use validator::{ValidationError, ValidationErrors};

/// Rejects strings with no non-whitespace character
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Wire (camelCase) name of a struct field
fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

impl From<ValidationErrors> for KyxError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: FieldErrors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                let name = wire_name(field);
                let message = errors.first().map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", name),
                })?;
                Some((name, message))
            })
            .collect();

        KyxError::ValidationError(fields)
    }
}

//! Boundary validation for incoming auth requests.
//!
//! Input types carry `validator` rules; [`validate_input`] runs them before
//! the request reaches [`AuthService`](crate::services::AuthService).

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::error::AuthError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name as the client spelled it (camelCase)
    pub field: String,
    pub message: String,
}

pub fn validate_input<T: Validate>(input: &T) -> Result<(), AuthError> {
    input
        .validate()
        .map_err(|errors| AuthError::ValidationFailed(violations(&errors)))
}

fn violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = camel_case(&field.to_string());
            field_errors.iter().map(move |e| FieldViolation {
                field: field.clone(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();

    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    out
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

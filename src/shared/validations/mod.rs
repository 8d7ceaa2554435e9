use validator::{Validate, ValidationErrors};

use crate::shared::{DomainError, DomainResult};

/// Run `validator` rules on a DTO and map failures to `DomainError::Validation`.
pub fn validate_dto<T: Validate>(dto: &T) -> DomainResult<()> {
    dto.validate()
        .map_err(|errors| DomainError::Validation(validation_message(&errors)))
}

/// Flatten field-level validation errors into a single `field: message` list.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut field_errors: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, msg)
            })
        })
        .collect();
    field_errors.sort();

    if field_errors.is_empty() {
        "Validation failed".to_string()
    } else {
        field_errors.join("; ")
    }
}

/// Check a password / confirmation pair as entered on a form.
///
/// Returns `Ok(true)` when a new password was supplied and confirmed,
/// `Ok(false)` when both fields are empty and a password is optional.
pub fn check_password_pair(password: &str, confirmation: &str, required: bool) -> DomainResult<bool> {
    match (password.is_empty(), confirmation.is_empty()) {
        (true, true) if required => Err(DomainError::Validation(
            "password and confirmation are required".into(),
        )),
        (true, true) => Ok(false),
        (true, false) | (false, true) => Err(DomainError::Validation(
            "fill in both password and confirmation".into(),
        )),
        (false, false) if password != confirmation => {
            Err(DomainError::Validation("passwords do not match".into()))
        }
        (false, false) => Ok(true),
    }
}

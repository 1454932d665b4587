use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// A single failed rule on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Body of a 422 response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Request bodies whose field rules can be checked before they are used
pub trait CheckFields {
    /// Runs every rule, returning all failures ordered by field name
    fn check(&self) -> Result<(), Vec<FieldError>>;
}

/// Flattens `validator` errors into a list ordered by field name
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut result: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors_for_field)| {
            errors_for_field.iter().map(move |error| FieldError {
                field: field.to_string(),
                code: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation failed for field '{field}'")),
            })
        })
        .collect();

    sort_field_errors(&mut result);
    result
}

/// Orders errors by field name, then by rule code
pub fn sort_field_errors(errors: &mut [FieldError]) {
    errors.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
}

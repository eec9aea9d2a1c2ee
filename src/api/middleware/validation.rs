use axum::extract::rejection::JsonRejection;
use axum::Json;
use validator::Validate;

use crate::api::errors::ApiError;

/// Validate a payload, listing every failing field in the error message
pub fn validate_payload<T>(payload: &T) -> Result<(), ApiError>
where
    T: Validate,
{
    payload.validate().map_err(|validation_errors| {
        let mut fields: Vec<String> = validation_errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|cow| cow.to_string())
                        .unwrap_or_else(|| "invalid value".to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        fields.sort();

        ApiError::unprocessable(format!("Validation failed: {}", fields.join("; ")))
    })
}

/// Unwrap a JSON body, turning extractor rejections into enveloped 400s
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        ApiError::bad_request(format!("Failed binding JSON: {}", rejection.body_text()))
    })
}

/// Validate every element of a bulk payload
pub fn validate_all<T: Validate>(payloads: &[T]) -> Result<(), ApiError> {
    if payloads.is_empty() {
        return Err(ApiError::bad_request("Request body must not be an empty list"));
    }
    payloads.iter().try_for_each(validate_payload)
}

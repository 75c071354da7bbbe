//! Conversion of non-2xx responses into typed service errors.

use bytes::Bytes;
use cognito_idp_model::error::{
    CognitoError, JsonErrorResponse, normalize_error_code, resolve_error,
};

/// Header carrying the error code; takes precedence over the body's `__type`.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Header carrying the service request id.
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Extract the error fields of a failed response.
///
/// A body that is not valid JSON is tolerated: the code may still come from
/// the `x-amzn-ErrorType` header.
#[must_use]
pub fn read_error_response(response: &http::Response<Bytes>) -> JsonErrorResponse {
    let status = response.status();
    let mut parsed = JsonErrorResponse::from_body(status, response.body()).unwrap_or_else(|err| {
        tracing::warn!(%status, error = %err, "unparseable error response body");
        JsonErrorResponse {
            status_code: status,
            ..JsonErrorResponse::default()
        }
    });

    if let Some(code) = header_str(response.headers(), ERROR_TYPE_HEADER)
        .map(normalize_error_code)
        .filter(|code| !code.is_empty())
    {
        parsed.error_code = Some(code.to_owned());
    }
    parsed.request_id = header_str(response.headers(), REQUEST_ID_HEADER).map(str::to_owned);
    parsed
}

/// Turn a failed response into a [`CognitoError`], falling back to the
/// unhandled kind when the code is not registered.
#[must_use]
pub fn parse_error_response(response: &http::Response<Bytes>) -> CognitoError {
    let parsed = read_error_response(response);
    match resolve_error(&parsed) {
        Some(err) => err,
        None => {
            tracing::warn!(
                code = parsed.error_code.as_deref().unwrap_or("<none>"),
                status = %parsed.status_code,
                "no unmarshaller registered for error code",
            );
            CognitoError::unhandled(&parsed)
        }
    }
}

fn header_str<'a>(headers: &'a http::HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

//! Response interpretation.

use bytes::Bytes;
use cognito_idp_json::JsonUnmarshall;
use cognito_idp_model::OperationInput;

use crate::error::ProtocolError;
use crate::error_response::parse_error_response;

/// Interpret the response to an operation.
///
/// 2xx responses are unmarshalled into the operation's output (an empty body
/// counts as `{}`); anything else becomes [`ProtocolError::Service`].
pub fn parse_response<I: OperationInput>(
    response: &http::Response<Bytes>,
) -> Result<I::Output, ProtocolError> {
    let operation = I::OPERATION;
    let status = response.status();
    if !status.is_success() {
        let err = parse_error_response(response);
        tracing::debug!(%operation, %status, code = %err.code, "service error");
        return Err(ProtocolError::Service(err));
    }

    tracing::debug!(
        %operation,
        %status,
        body_len = response.body().len(),
        "parsing response",
    );
    parse_output(response.body())
}

/// Unmarshall a success body, treating an empty (or blank) body as `{}`.
pub fn parse_output<O: JsonUnmarshall>(body: &[u8]) -> Result<O, ProtocolError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    Ok(cognito_idp_json::from_slice(body)?)
}

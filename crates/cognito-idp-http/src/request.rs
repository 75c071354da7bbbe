//! Request framing.

use bytes::Bytes;
use cognito_idp_model::OperationInput;

use crate::config::CognitoIdpConfig;
use crate::error::ProtocolError;

/// Content type of awsJson1_1 request and response bodies.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header naming the operation being invoked.
pub const TARGET_HEADER: &str = "x-amz-target";

/// Build the HTTP request for an operation input.
///
/// The request is a `POST` to the configured endpoint with the marshalled
/// input as body. Signing and sending are left to the caller.
pub fn serialize_request<I: OperationInput>(
    config: &CognitoIdpConfig,
    input: &I,
) -> Result<http::Request<Bytes>, ProtocolError> {
    let endpoint = config.endpoint();
    let uri: http::Uri = endpoint
        .parse()
        .map_err(|_| ProtocolError::InvalidEndpoint(endpoint.clone()))?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(ProtocolError::InvalidEndpoint(endpoint));
    }

    let operation = I::OPERATION;
    let body = cognito_idp_json::to_vec(input)?;
    tracing::debug!(
        %operation,
        endpoint = %uri,
        body_len = body.len(),
        "serialized request",
    );

    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header(TARGET_HEADER, operation.target())
        .body(Bytes::from(body))?;
    Ok(request)
}

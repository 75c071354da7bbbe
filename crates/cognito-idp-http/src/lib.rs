//! awsJson1_1 framing for the Cognito Identity Provider API.
//!
//! [`serialize_request`] turns an operation input into an unsigned
//! `http::Request`; [`parse_response`] turns the `http::Response` back into
//! the operation output or a typed [`CognitoError`](cognito_idp_model::CognitoError).
//! Transport, signing and retries are out of scope.

pub mod config;
pub mod error;
pub mod error_response;
pub mod request;
pub mod response;

pub use config::CognitoIdpConfig;
pub use error::ProtocolError;
pub use error_response::parse_error_response;
pub use request::{CONTENT_TYPE, serialize_request};
pub use response::{parse_output, parse_response};

//! Cognito Identity Provider error types and error-code registry.
//!
//! Service errors arrive as a JSON body with a `__type` member (optionally
//! namespaced, e.g. `com.amazonaws.cognito#UserNotFoundException`) and a
//! `message`. The code is matched against a fixed registry of
//! [`ErrorUnmarshaller`]s; codes outside the registry resolve to
//! [`CognitoErrorKind::Unhandled`] via [`CognitoError::unhandled`].

use std::fmt;

use cognito_idp_json::{JsonError, from_slice, json_structure};

macro_rules! cognito_errors {
    ($($(#[$meta:meta])* $kind:ident),* $(,)?) => {
        /// Well-known Cognito Identity Provider error codes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum CognitoErrorKind {
            $($(#[$meta])* $kind,)*
            /// A code with no registered unmarshaller.
            Unhandled,
        }

        impl CognitoErrorKind {
            /// Returns the wire error code, e.g. `UserNotFoundException`.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$kind => stringify!($kind),)*
                    Self::Unhandled => "Unhandled",
                }
            }
        }

        static ERROR_UNMARSHALLERS: &[ErrorUnmarshaller] = &[
            $(ErrorUnmarshaller { kind: CognitoErrorKind::$kind },)*
        ];
    };
}

cognito_errors! {
    /// Too many failed attempts for the given action.
    TooManyFailedAttemptsException,
    /// The username is already taken.
    UsernameExistsException,
    /// The requested resource does not exist.
    ResourceNotFoundException,
    /// Internal service error.
    InternalErrorException,
    /// The confirmation code has expired.
    ExpiredCodeException,
    /// A Lambda trigger returned an invalid response.
    InvalidLambdaResponseException,
    /// The confirmation code is wrong.
    CodeMismatchException,
    /// The email or phone number is already an alias of another user.
    AliasExistsException,
    ConcurrentModificationException,
    /// A Lambda trigger rejected the request.
    UserLambdaValidationException,
    /// Wrong credentials or a disabled user.
    NotAuthorizedException,
    /// The request was throttled.
    TooManyRequestsException,
    UnexpectedLambdaException,
    /// The password does not satisfy the pool policy.
    InvalidPasswordException,
    MFAMethodNotFoundException,
    /// A request parameter failed service-side validation.
    InvalidParameterException,
    LimitExceededException,
    UserNotFoundException,
    UserNotConfirmedException,
    PasswordResetRequiredException,
    CodeDeliveryFailureException,
    InvalidSmsRoleAccessPolicyException,
    InvalidSmsRoleTrustRelationshipException,
    InvalidEmailRoleAccessPolicyException,
    InvalidUserPoolConfigurationException,
    UnsupportedUserStateException,
    PreconditionNotMetException,
    UserPoolTaggingException,
    UserImportInProgressException,
    /// Blocked by an AWS WAF rule.
    ForbiddenException,
    SoftwareTokenMFANotFoundException,
    UnsupportedOperationException,
    UnsupportedTokenTypeException,
}

impl fmt::Display for CognitoErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the exchange caused an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// The request was at fault (4xx and anything else below 500).
    Client,
    /// The service was at fault (5xx).
    Service,
}

impl ErrorType {
    /// Classify an HTTP status code.
    #[must_use]
    pub fn from_status(status: http::StatusCode) -> Self {
        if status.is_server_error() {
            Self::Service
        } else {
            Self::Client
        }
    }
}

/// Error fields extracted from a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonErrorResponse {
    /// Normalised error code, if one could be found.
    pub error_code: Option<String>,
    pub message: Option<String>,
    pub status_code: http::StatusCode,
    /// Value of the `x-amzn-RequestId` header.
    pub request_id: Option<String>,
}

json_structure! {
    struct ErrorBody {
        "__type" => error_type: String,
        "code" => code: String,
        "message" => message: String,
        "Message" => message_upper: String,
    }
}

impl JsonErrorResponse {
    /// Parse an error body.
    ///
    /// The code comes from `__type` (falling back to `code`), the message
    /// from `message` or `Message`. An empty body yields a response with
    /// neither.
    pub fn from_body(status_code: http::StatusCode, body: &[u8]) -> Result<Self, JsonError> {
        let parsed = if body.iter().all(u8::is_ascii_whitespace) {
            ErrorBody::default()
        } else {
            from_slice::<ErrorBody>(body)?
        };
        Ok(Self {
            error_code: parsed
                .error_type
                .or(parsed.code)
                .map(|raw| normalize_error_code(&raw).to_owned())
                .filter(|code| !code.is_empty()),
            message: parsed.message.or(parsed.message_upper),
            status_code,
            request_id: None,
        })
    }
}

/// Strip the namespace (`...#`) and any `:`-suffix from a raw error code.
///
/// ```
/// use cognito_idp_model::error::normalize_error_code;
///
/// assert_eq!(
///     normalize_error_code("com.amazonaws.cognito#UserNotFoundException:http://internal"),
///     "UserNotFoundException"
/// );
/// ```
#[must_use]
pub fn normalize_error_code(raw: &str) -> &str {
    let code = raw.split_once(':').map_or(raw, |(head, _)| head);
    let code = code.rsplit_once('#').map_or(code, |(_, tail)| tail);
    code.trim()
}

/// Turns an error response carrying one specific code into a [`CognitoError`].
#[derive(Debug, Clone, Copy)]
pub struct ErrorUnmarshaller {
    kind: CognitoErrorKind,
}

impl ErrorUnmarshaller {
    /// The error code this unmarshaller handles.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.as_str()
    }

    #[must_use]
    pub fn kind(&self) -> CognitoErrorKind {
        self.kind
    }

    /// Whether the response's code is exactly this unmarshaller's code.
    #[must_use]
    pub fn matches(&self, response: &JsonErrorResponse) -> bool {
        response.error_code.as_deref() == Some(self.code())
    }

    /// Build the typed error, stamped with this unmarshaller's code.
    #[must_use]
    pub fn unmarshall(&self, response: &JsonErrorResponse) -> CognitoError {
        CognitoError {
            kind: self.kind,
            code: self.code().to_owned(),
            message: response.message.clone(),
            status_code: response.status_code,
            request_id: response.request_id.clone(),
            error_type: ErrorType::from_status(response.status_code),
        }
    }
}

/// All registered error unmarshallers.
#[must_use]
pub fn error_unmarshallers() -> &'static [ErrorUnmarshaller] {
    ERROR_UNMARSHALLERS
}

/// Find the unmarshaller for the response's code and build the typed error.
///
/// Returns `None` when the code is missing or not registered; callers fall
/// back to [`CognitoError::unhandled`].
#[must_use]
pub fn resolve_error(response: &JsonErrorResponse) -> Option<CognitoError> {
    ERROR_UNMARSHALLERS
        .iter()
        .find(|unmarshaller| unmarshaller.matches(response))
        .map(|unmarshaller| unmarshaller.unmarshall(response))
}

/// An error returned by the Cognito Identity Provider service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CognitoError {
    /// The resolved error kind.
    pub kind: CognitoErrorKind,
    /// The error code as matched (or as received, for unhandled errors).
    pub code: String,
    /// A human-readable error message.
    pub message: Option<String>,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The service request id, if the response carried one.
    pub request_id: Option<String>,
    pub error_type: ErrorType,
}

impl fmt::Display for CognitoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CognitoError({})", self.code)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request id: {request_id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for CognitoError {}

impl CognitoError {
    /// Generic error for a response whose code has no registered
    /// unmarshaller. Keeps the received code, or `Unknown` if there was none.
    #[must_use]
    pub fn unhandled(response: &JsonErrorResponse) -> Self {
        Self {
            kind: CognitoErrorKind::Unhandled,
            code: response
                .error_code
                .clone()
                .unwrap_or_else(|| "Unknown".to_owned()),
            message: response.message.clone(),
            status_code: response.status_code,
            request_id: response.request_id.clone(),
            error_type: ErrorType::from_status(response.status_code),
        }
    }

    /// Resolve a response through the registry, falling back to
    /// [`CognitoError::unhandled`].
    #[must_use]
    pub fn from_response(response: &JsonErrorResponse) -> Self {
        resolve_error(response).unwrap_or_else(|| Self::unhandled(response))
    }

    /// Whether the error signals throttling or a transient service fault.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            CognitoErrorKind::TooManyRequestsException | CognitoErrorKind::InternalErrorException
        ) || self.error_type == ErrorType::Service
    }
}

//! Error resolution from service responses.

#[cfg(test)]
mod tests {
    use cognito_idp_http::{ProtocolError, parse_error_response, parse_response};
    use cognito_idp_model::error::{JsonErrorResponse, error_unmarshallers, resolve_error};
    use cognito_idp_model::input::{AdminGetUserInput, ConfirmSignUpInput};
    use cognito_idp_model::{CognitoErrorKind, ErrorType};

    use crate::{init_tracing, service_response};

    #[test]
    fn test_should_match_too_many_requests_only_for_its_code() {
        let throttled = JsonErrorResponse {
            error_code: Some("TooManyRequestsException".to_owned()),
            message: Some("Rate exceeded".to_owned()),
            status_code: http::StatusCode::BAD_REQUEST,
            request_id: None,
        };
        let matching: Vec<_> = error_unmarshallers()
            .iter()
            .filter(|u| u.matches(&throttled))
            .collect();
        assert_eq!(matching.len(), 1);

        let err = matching[0].unmarshall(&throttled);
        assert_eq!(err.kind, CognitoErrorKind::TooManyRequestsException);
        assert_eq!(err.code, "TooManyRequestsException");

        let other = JsonErrorResponse {
            error_code: Some("LimitExceededException".to_owned()),
            ..throttled.clone()
        };
        assert!(!matching[0].matches(&other));
        assert_eq!(
            resolve_error(&other).map(|e| e.kind),
            Some(CognitoErrorKind::LimitExceededException)
        );
    }

    #[test]
    fn test_should_resolve_core_client_errors() {
        let codes = [
            "TooManyFailedAttemptsException",
            "UsernameExistsException",
            "ResourceNotFoundException",
            "InternalErrorException",
            "ExpiredCodeException",
            "InvalidLambdaResponseException",
            "CodeMismatchException",
            "AliasExistsException",
            "ConcurrentModificationException",
            "UserLambdaValidationException",
            "NotAuthorizedException",
            "TooManyRequestsException",
            "UnexpectedLambdaException",
            "InvalidPasswordException",
            "MFAMethodNotFoundException",
            "InvalidParameterException",
            "LimitExceededException",
        ];
        for code in codes {
            let response = JsonErrorResponse {
                error_code: Some(code.to_owned()),
                ..JsonErrorResponse::default()
            };
            let err = resolve_error(&response);
            assert_eq!(err.map(|e| e.code), Some(code.to_owned()), "code {code}");
        }
    }

    #[test]
    fn test_should_surface_typed_error_from_response() -> anyhow::Result<()> {
        init_tracing();
        let response = service_response(
            400,
            &[("x-amzn-RequestId", "4c1a")],
            r#"{"__type":"com.amazonaws.cognito.identity.idp.model#ExpiredCodeException",
                "message":"Invalid code provided, please request a code again."}"#,
        )?;
        let service = match parse_response::<ConfirmSignUpInput>(&response) {
            Err(ProtocolError::Service(service)) => service,
            other => anyhow::bail!("expected a service error, got {other:?}"),
        };
        assert_eq!(service.kind, CognitoErrorKind::ExpiredCodeException);
        assert_eq!(service.request_id.as_deref(), Some("4c1a"));
        assert_eq!(service.error_type, ErrorType::Client);
        assert!(!service.is_retryable());
        Ok(())
    }

    #[test]
    fn test_should_classify_throttling_as_retryable() -> anyhow::Result<()> {
        let response = service_response(
            400,
            &[("x-amzn-ErrorType", "TooManyRequestsException:")],
            r#"{"message":"Rate exceeded"}"#,
        )?;
        let err = parse_error_response(&response);
        assert_eq!(err.kind, CognitoErrorKind::TooManyRequestsException);
        assert!(err.is_retryable());
        Ok(())
    }

    #[test]
    fn test_should_fall_back_to_unhandled_error() -> anyhow::Result<()> {
        init_tracing();
        let response = service_response(
            502,
            &[],
            r#"{"__type":"GatewayMeltdownException","Message":"try later"}"#,
        )?;
        let err = parse_response::<AdminGetUserInput>(&response).unwrap_err();
        let service = err
            .as_service_error()
            .ok_or_else(|| anyhow::anyhow!("expected a service error"))?;
        assert_eq!(service.kind, CognitoErrorKind::Unhandled);
        assert_eq!(service.code, "GatewayMeltdownException");
        assert_eq!(service.message.as_deref(), Some("try later"));
        assert_eq!(service.error_type, ErrorType::Service);
        Ok(())
    }
}

//! Authentication flow exchanges.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use cognito_idp_http::{parse_response, serialize_request};
    use cognito_idp_model::enums::{AuthFlowType, ChallengeNameType, DeliveryMediumType};
    use cognito_idp_model::input::{InitiateAuthInput, RespondToAuthChallengeInput, SignUpInput};
    use cognito_idp_model::types::{AttributeType, UserContextDataType};

    use crate::{body_json, service_response, test_config};

    #[test]
    fn test_should_run_password_auth_with_new_password_challenge() -> anyhow::Result<()> {
        let config = test_config();

        let initiate = InitiateAuthInput {
            auth_flow: Some(AuthFlowType::UserPasswordAuth),
            client_id: Some("client-1".to_owned()),
            auth_parameters: Some(HashMap::from([
                ("USERNAME".to_owned(), "alice".to_owned()),
                ("PASSWORD".to_owned(), "Temp#1234".to_owned()),
            ])),
            user_context_data: Some(UserContextDataType {
                ip_address: Some("192.0.2.1".to_owned()),
                encoded_data: None,
            }),
            ..InitiateAuthInput::default()
        };
        let request = serialize_request(&config, &initiate)?;
        assert_eq!(
            request.headers()["x-amz-target"],
            "AWSCognitoIdentityProviderService.InitiateAuth"
        );
        let body = body_json(&request)?;
        assert_eq!(body["AuthFlow"], "USER_PASSWORD_AUTH");
        assert_eq!(body["AuthParameters"]["USERNAME"], "alice");
        assert_eq!(body["UserContextData"]["IpAddress"], "192.0.2.1");
        assert!(body.get("ClientMetadata").is_none());

        let response = service_response(
            200,
            &[("x-amzn-RequestId", "req-1")],
            r#"{"ChallengeName":"NEW_PASSWORD_REQUIRED","Session":"sess-1",
                "ChallengeParameters":{"USER_ID_FOR_SRP":"alice","requiredAttributes":"[]"}}"#,
        )?;
        let challenge = parse_response::<InitiateAuthInput>(&response)?;
        assert_eq!(
            challenge.challenge_name,
            Some(ChallengeNameType::NewPasswordRequired)
        );
        assert!(challenge.authentication_result.is_none());
        tracing::info!(session = ?challenge.session, "received challenge");

        let respond = RespondToAuthChallengeInput {
            client_id: Some("client-1".to_owned()),
            challenge_name: challenge.challenge_name,
            session: challenge.session,
            challenge_responses: Some(HashMap::from([
                ("USERNAME".to_owned(), "alice".to_owned()),
                ("NEW_PASSWORD".to_owned(), "Perm#5678".to_owned()),
            ])),
            ..RespondToAuthChallengeInput::default()
        };
        let body = body_json(&serialize_request(&config, &respond)?)?;
        assert_eq!(body["Session"], "sess-1");
        assert_eq!(body["ChallengeName"], "NEW_PASSWORD_REQUIRED");

        let response = service_response(
            200,
            &[],
            r#"{"AuthenticationResult":{"AccessToken":"at","ExpiresIn":3600,
                "TokenType":"Bearer","RefreshToken":"rt","IdToken":"it"},
                "ChallengeParameters":{}}"#,
        )?;
        let tokens = parse_response::<RespondToAuthChallengeInput>(&response)?
            .authentication_result
            .unwrap_or_default();
        assert_eq!(tokens.access_token.as_deref(), Some("at"));
        assert_eq!(tokens.expires_in, Some(3600));
        assert_eq!(tokens.new_device_metadata, None);
        Ok(())
    }

    #[test]
    fn test_should_sign_up_and_report_code_delivery() -> anyhow::Result<()> {
        let config = test_config();
        let input = SignUpInput {
            client_id: Some("client-1".to_owned()),
            username: Some("bob".to_owned()),
            password: Some("Secr3t!pass".to_owned()),
            user_attributes: Some(vec![AttributeType {
                name: Some("email".to_owned()),
                value: Some("bob@example.com".to_owned()),
            }]),
            ..SignUpInput::default()
        };
        let body = body_json(&serialize_request(&config, &input)?)?;
        assert_eq!(
            body,
            serde_json::json!({
                "ClientId": "client-1",
                "Username": "bob",
                "Password": "Secr3t!pass",
                "UserAttributes": [{"Name": "email", "Value": "bob@example.com"}]
            })
        );

        let response = service_response(
            200,
            &[],
            r#"{"UserConfirmed":false,"UserSub":"5f1c",
                "CodeDeliveryDetails":{"Destination":"b***@e***","DeliveryMedium":"EMAIL","AttributeName":"email"},
                "Session":"ignored-by-this-model"}"#,
        )?;
        let output = parse_response::<SignUpInput>(&response)?;
        assert_eq!(output.user_confirmed, Some(false));
        assert_eq!(output.user_sub.as_deref(), Some("5f1c"));
        assert_eq!(
            output
                .code_delivery_details
                .and_then(|d| d.delivery_medium),
            Some(DeliveryMediumType::Email)
        );
        Ok(())
    }
}

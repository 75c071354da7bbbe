//! User pool and app client administration exchanges.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use cognito_idp_http::{parse_response, serialize_request};
    use cognito_idp_model::enums::{
        ExplicitAuthFlowsType, MessageActionType, StatusType, TimeUnitsType, UserPoolMfaType,
        UserStatusType,
    };
    use cognito_idp_model::input::{
        AdminCreateUserInput, CreateUserPoolClientInput, DescribeUserPoolInput, ListUsersInput,
        SetUserPoolMfaConfigInput,
    };
    use cognito_idp_model::types::{
        AttributeType, PasswordPolicyType, SmsConfigurationType, SmsMfaConfigType,
        SoftwareTokenMfaConfigType, TokenValidityUnitsType,
    };
    use cognito_idp_model::{CognitoIdpOperation, OperationInput};

    use crate::{body_json, service_response, test_config};

    #[test]
    fn test_should_create_user_and_read_back_profile() -> anyhow::Result<()> {
        let config = test_config();
        let input = AdminCreateUserInput {
            user_pool_id: Some("us-east-1_pool".to_owned()),
            username: Some("carol".to_owned()),
            temporary_password: Some("Tmp-pass1".to_owned()),
            message_action: Some(MessageActionType::Suppress),
            user_attributes: Some(vec![AttributeType {
                name: Some("email_verified".to_owned()),
                value: Some("true".to_owned()),
            }]),
            client_metadata: Some(HashMap::new()),
            ..AdminCreateUserInput::default()
        };
        let request = serialize_request(&config, &input)?;
        assert_eq!(request.uri().to_string(), "http://localhost:4566/");
        let body = body_json(&request)?;
        assert_eq!(body["MessageAction"], "SUPPRESS");
        assert_eq!(body["ClientMetadata"], serde_json::json!({}));
        assert!(body.get("ValidationData").is_none());

        let response = service_response(
            200,
            &[],
            r#"{"User":{"Username":"carol","Enabled":true,"UserStatus":"FORCE_CHANGE_PASSWORD",
                "UserCreateDate":1709251200.5,"UserLastModifiedDate":1709251200.5,
                "Attributes":[{"Name":"sub","Value":"9a7e"},{"Name":"email_verified","Value":"true"}]}}"#,
        )?;
        let user = parse_response::<AdminCreateUserInput>(&response)?
            .user
            .unwrap_or_default();
        assert_eq!(user.user_status, Some(UserStatusType::ForceChangePassword));
        assert_eq!(
            user.user_create_date.map(|d| d.timestamp_millis()),
            Some(1_709_251_200_500)
        );
        assert_eq!(user.attributes.map(|a| a.len()), Some(2));
        Ok(())
    }

    #[test]
    fn test_should_describe_pool_with_unknown_members() -> anyhow::Result<()> {
        let response = service_response(
            200,
            &[],
            r#"{"UserPool":{
                "Id":"us-east-1_pool","Name":"customers","Status":"Enabled",
                "MfaConfiguration":"OFF",
                "Policies":{"PasswordPolicy":{"MinimumLength":12,"RequireSymbols":true}},
                "LambdaConfig":{"PreSignUp":"arn:aws:lambda:us-east-1:1:function:f"},
                "UserPoolAddOns":{"AdvancedSecurityMode":"OFF"},
                "SchemaAttributes":[{"Name":"email","AttributeDataType":"String","Mutable":true,
                    "StringAttributeConstraints":{"MinLength":"0","MaxLength":"2048"}}]
            }}"#,
        )?;
        let pool = parse_response::<DescribeUserPoolInput>(&response)?
            .user_pool
            .unwrap_or_default();
        assert_eq!(pool.status, Some(StatusType::Enabled));
        assert_eq!(pool.mfa_configuration, Some(UserPoolMfaType::Off));
        assert_eq!(
            pool.policies.and_then(|p| p.password_policy),
            Some(PasswordPolicyType {
                minimum_length: Some(12),
                require_symbols: Some(true),
                ..PasswordPolicyType::default()
            })
        );
        let schema = pool.schema_attributes.unwrap_or_default();
        assert_eq!(
            schema[0]
                .string_attribute_constraints
                .as_ref()
                .and_then(|c| c.max_length.as_deref()),
            Some("2048")
        );
        Ok(())
    }

    #[test]
    fn test_should_page_through_users() -> anyhow::Result<()> {
        let config = test_config();
        let mut input = ListUsersInput {
            user_pool_id: Some("us-east-1_pool".to_owned()),
            limit: Some(2),
            filter: Some(r#"email ^= "a""#.to_owned()),
            ..ListUsersInput::default()
        };
        let body = body_json(&serialize_request(&config, &input)?)?;
        assert_eq!(body["Filter"], r#"email ^= "a""#);

        let pages = [
            r#"{"Users":[{"Username":"a1"},{"Username":"a2"}],"PaginationToken":"p2"}"#,
            r#"{"Users":[{"Username":"a3"}]}"#,
        ];
        let mut seen = Vec::new();
        for page in pages {
            let output = parse_response::<ListUsersInput>(&service_response(200, &[], page)?)?;
            seen.extend(output.users.unwrap_or_default().into_iter().filter_map(|u| u.username));
            input.pagination_token = output.pagination_token;
            if input.pagination_token.is_some() {
                let body = body_json(&serialize_request(&config, &input)?)?;
                assert_eq!(body["PaginationToken"], "p2");
            }
        }
        assert_eq!(seen, vec!["a1", "a2", "a3"]);
        assert_eq!(input.pagination_token, None);
        Ok(())
    }

    #[test]
    fn test_should_set_pool_mfa_config() -> anyhow::Result<()> {
        let config = test_config();
        let input = SetUserPoolMfaConfigInput {
            user_pool_id: Some("us-east-1_pool".to_owned()),
            sms_mfa_configuration: Some(SmsMfaConfigType {
                sms_authentication_message: Some("Your code is {####}".to_owned()),
                sms_configuration: Some(SmsConfigurationType {
                    sns_caller_arn: Some("arn:aws:iam::1:role/x".to_owned()),
                    ..SmsConfigurationType::default()
                }),
            }),
            software_token_mfa_configuration: Some(SoftwareTokenMfaConfigType {
                enabled: Some(true),
            }),
            mfa_configuration: Some(UserPoolMfaType::Optional),
        };
        let request = serialize_request(&config, &input)?;
        assert_eq!(
            std::str::from_utf8(request.body())?,
            concat!(
                r#"{"UserPoolId":"us-east-1_pool","#,
                r#""SmsMfaConfiguration":{"SmsAuthenticationMessage":"Your code is {####}","#,
                r#""SmsConfiguration":{"SnsCallerArn":"arn:aws:iam::1:role/x"}},"#,
                r#""SoftwareTokenMfaConfiguration":{"Enabled":true},"#,
                r#""MfaConfiguration":"OPTIONAL"}"#
            )
        );

        let echoed = std::str::from_utf8(request.body())?.replace(r#""UserPoolId":"us-east-1_pool","#, "");
        let output = parse_response::<SetUserPoolMfaConfigInput>(&service_response(200, &[], &echoed)?)?;
        assert_eq!(output.sms_mfa_configuration, input.sms_mfa_configuration);
        assert_eq!(output.mfa_configuration, Some(UserPoolMfaType::Optional));
        Ok(())
    }

    #[test]
    fn test_should_create_client_with_token_units() -> anyhow::Result<()> {
        let config = test_config();
        let input = CreateUserPoolClientInput {
            user_pool_id: Some("us-east-1_pool".to_owned()),
            client_name: Some("web".to_owned()),
            generate_secret: Some(false),
            access_token_validity: Some(60),
            token_validity_units: Some(TokenValidityUnitsType {
                access_token: Some(TimeUnitsType::Minutes),
                ..TokenValidityUnitsType::default()
            }),
            explicit_auth_flows: Some(vec![
                ExplicitAuthFlowsType::AllowUserSrpAuth,
                ExplicitAuthFlowsType::AllowRefreshTokenAuth,
            ]),
            ..CreateUserPoolClientInput::default()
        };
        let request = serialize_request(&config, &input)?;
        assert_eq!(
            <CreateUserPoolClientInput as OperationInput>::OPERATION,
            CognitoIdpOperation::CreateUserPoolClient
        );
        let body = body_json(&request)?;
        assert_eq!(body["TokenValidityUnits"]["AccessToken"], "minutes");
        assert_eq!(
            body["ExplicitAuthFlows"],
            serde_json::json!(["ALLOW_USER_SRP_AUTH", "ALLOW_REFRESH_TOKEN_AUTH"])
        );

        let response = service_response(
            200,
            &[],
            r#"{"UserPoolClient":{"ClientId":"c-9","ClientName":"web","UserPoolId":"us-east-1_pool",
                "AccessTokenValidity":60,"TokenValidityUnits":{"AccessToken":"minutes"},
                "ExplicitAuthFlows":["ALLOW_USER_SRP_AUTH","ALLOW_REFRESH_TOKEN_AUTH","ALLOW_FUTURE_AUTH"]}}"#,
        )?;
        let client = parse_response::<CreateUserPoolClientInput>(&response)?
            .user_pool_client
            .unwrap_or_default();
        assert_eq!(client.client_id.as_deref(), Some("c-9"));
        assert_eq!(
            client.explicit_auth_flows.unwrap_or_default().last(),
            Some(&ExplicitAuthFlowsType::Unknown("ALLOW_FUTURE_AUTH".to_owned()))
        );
        Ok(())
    }
}

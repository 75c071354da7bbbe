//! Wire-format properties of marshalling and unmarshalling.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::TimeZone;
    use cognito_idp_json::{Blob, JsonError, from_slice, to_vec};
    use cognito_idp_model::enums::{
        DeliveryMediumType, ExplicitAuthFlowsType, OAuthFlowType, PreventUserExistenceErrorTypes,
        RecoveryOptionNameType, TimeUnitsType, UserStatusType,
    };
    use cognito_idp_model::types::{
        AccountRecoverySettingType, AnalyticsConfigurationType, AttributeType, MFAOptionType,
        RecoveryOptionType, SmsConfigurationType, SmsMfaConfigType, TokenValidityUnitsType,
        UserPoolClientType, UserPoolType, UserType,
    };

    use crate::init_tracing;

    #[test]
    fn test_should_marshal_empty_records_to_empty_object() -> anyhow::Result<()> {
        assert_eq!(to_vec(&UserType::default())?, b"{}");
        assert_eq!(to_vec(&SmsMfaConfigType::default())?, b"{}");
        assert_eq!(to_vec(&AccountRecoverySettingType::default())?, b"{}");
        Ok(())
    }

    #[test]
    fn test_should_write_sms_mfa_config_scenario() -> anyhow::Result<()> {
        let config = SmsMfaConfigType {
            sms_authentication_message: Some("Your code is {####}".to_owned()),
            sms_configuration: Some(SmsConfigurationType {
                sns_caller_arn: Some("arn:aws:iam::1:role/x".to_owned()),
                external_id: None,
                sns_region: None,
            }),
        };
        let json = String::from_utf8(to_vec(&config)?)?;
        assert_eq!(
            json,
            r#"{"SmsAuthenticationMessage":"Your code is {####}","SmsConfiguration":{"SnsCallerArn":"arn:aws:iam::1:role/x"}}"#
        );
        Ok(())
    }

    #[test]
    fn test_should_ignore_unknown_fields() -> anyhow::Result<()> {
        init_tracing();
        let option: RecoveryOptionType =
            from_slice(br#"{"UnknownField": 1, "Priority": 2, "Name": "x"}"#)?;
        assert_eq!(option.priority, Some(2));
        assert_eq!(
            option.name,
            Some(RecoveryOptionNameType::Unknown("x".to_owned()))
        );
        assert_eq!(option.name.map(|n| n.to_string()), Some("x".to_owned()));
        Ok(())
    }

    #[test]
    fn test_should_roundtrip_each_field_alone() -> anyhow::Result<()> {
        let created = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let singles = [
            UserType {
                username: Some("alice".to_owned()),
                ..UserType::default()
            },
            UserType {
                attributes: Some(vec![AttributeType {
                    name: Some("email".to_owned()),
                    value: Some(String::new()),
                }]),
                ..UserType::default()
            },
            UserType {
                user_create_date: Some(created),
                ..UserType::default()
            },
            UserType {
                enabled: Some(false),
                ..UserType::default()
            },
            UserType {
                user_status: Some(UserStatusType::ForceChangePassword),
                ..UserType::default()
            },
            UserType {
                mfa_options: Some(vec![MFAOptionType {
                    delivery_medium: Some(DeliveryMediumType::Sms),
                    attribute_name: Some("phone_number".to_owned()),
                }]),
                ..UserType::default()
            },
        ];
        for user in singles {
            let back: UserType = from_slice(&to_vec(&user)?)?;
            assert_eq!(back, user);
        }
        Ok(())
    }

    #[test]
    fn test_should_roundtrip_client_fields_alone() -> anyhow::Result<()> {
        let modified = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let singles = [
            UserPoolClientType {
                client_id: Some("3n4b5urk1ft4fl3mg5e62d9ado".to_owned()),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                last_modified_date: Some(modified),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                refresh_token_validity: Some(30),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                token_validity_units: Some(TokenValidityUnitsType {
                    access_token: Some(TimeUnitsType::Minutes),
                    id_token: Some(TimeUnitsType::Hours),
                    refresh_token: Some(TimeUnitsType::Days),
                }),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                read_attributes: Some(vec!["email".to_owned(), "custom:tier".to_owned()]),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                explicit_auth_flows: Some(vec![
                    ExplicitAuthFlowsType::AllowUserSrpAuth,
                    ExplicitAuthFlowsType::AllowRefreshTokenAuth,
                    ExplicitAuthFlowsType::Unknown("ALLOW_FUTURE_AUTH".to_owned()),
                ]),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                callback_urls: Some(vec!["https://app.example.com/callback".to_owned()]),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                allowed_oauth_flows: Some(vec![OAuthFlowType::Code, OAuthFlowType::Implicit]),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                allowed_oauth_flows_user_pool_client: Some(true),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                analytics_configuration: Some(AnalyticsConfigurationType {
                    application_id: Some("pinpoint-app".to_owned()),
                    user_data_shared: Some(false),
                    ..AnalyticsConfigurationType::default()
                }),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                prevent_user_existence_errors: Some(PreventUserExistenceErrorTypes::Enabled),
                ..UserPoolClientType::default()
            },
            UserPoolClientType {
                enable_token_revocation: Some(false),
                ..UserPoolClientType::default()
            },
        ];
        for client in singles {
            let bytes = to_vec(&client)?;
            let back: UserPoolClientType = from_slice(&bytes)?;
            assert_eq!(back, client, "{}", String::from_utf8_lossy(&bytes));
        }
        Ok(())
    }

    #[test]
    fn test_should_roundtrip_sub_millisecond_timestamp() -> anyhow::Result<()> {
        let created = chrono::DateTime::from_timestamp(1_709_251_200, 123_456_789).unwrap();
        let user = UserType {
            user_create_date: Some(created),
            ..UserType::default()
        };
        let bytes = to_vec(&user)?;
        assert_eq!(bytes, br#"{"UserCreateDate":1709251200.123456789}"#);
        let back: UserType = from_slice(&bytes)?;
        assert_eq!(back, user);
        Ok(())
    }

    #[test]
    fn test_should_roundtrip_fully_populated_record() -> anyhow::Result<()> {
        let pool = UserPoolType {
            id: Some("us-east-1_pool".to_owned()),
            name: Some("customers".to_owned()),
            creation_date: Some(chrono::Utc.timestamp_millis_opt(1_709_251_200_123).unwrap()),
            estimated_number_of_users: Some(0),
            user_pool_tags: Some(HashMap::from([
                ("team".to_owned(), "identity".to_owned()),
                ("cost-center".to_owned(), "42".to_owned()),
            ])),
            account_recovery_setting: Some(AccountRecoverySettingType {
                recovery_mechanisms: Some(vec![RecoveryOptionType {
                    priority: Some(1),
                    name: Some(RecoveryOptionNameType::AdminOnly),
                }]),
            }),
            ..UserPoolType::default()
        };
        let back: UserPoolType = from_slice(&to_vec(&pool)?)?;
        assert_eq!(back, pool);
        Ok(())
    }

    #[test]
    fn test_should_preserve_sequence_order() -> anyhow::Result<()> {
        let names: Vec<String> = (0..20).map(|i| format!("attr-{i}")).collect();
        let user = UserType {
            attributes: Some(
                names
                    .iter()
                    .map(|n| AttributeType {
                        name: Some(n.clone()),
                        value: None,
                    })
                    .collect(),
            ),
            ..UserType::default()
        };
        let back: UserType = from_slice(&to_vec(&user)?)?;
        let read: Vec<String> = back
            .attributes
            .unwrap_or_default()
            .into_iter()
            .filter_map(|a| a.name)
            .collect();
        assert_eq!(read, names);
        Ok(())
    }

    #[test]
    fn test_should_skip_null_sequence_elements() -> anyhow::Result<()> {
        let setting: AccountRecoverySettingType = from_slice(
            br#"{"RecoveryMechanisms":[null,{"Priority":1,"Name":"verified_email"},null]}"#,
        )?;
        let mechanisms = setting.recovery_mechanisms.unwrap_or_default();
        assert_eq!(mechanisms.len(), 1);
        assert_eq!(mechanisms[0].priority, Some(1));
        Ok(())
    }

    #[test]
    fn test_should_treat_null_field_as_unset() -> anyhow::Result<()> {
        let user: UserType = from_slice(br#"{"Username":null,"Enabled":true}"#)?;
        assert_eq!(user.username, None);
        assert_eq!(user.enabled, Some(true));
        Ok(())
    }

    #[test]
    fn test_should_match_field_names_case_sensitively() -> anyhow::Result<()> {
        let user: UserType = from_slice(br#"{"username":"lower","USERNAME":"upper"}"#)?;
        assert_eq!(user, UserType::default());
        Ok(())
    }

    #[test]
    fn test_should_propagate_malformed_input() {
        let err = from_slice::<UserType>(br#"{"Username": "alice""#).unwrap_err();
        assert!(matches!(err, JsonError::Syntax(_)));

        let err = from_slice::<UserType>(br#"{"Enabled": "yes"}"#).unwrap_err();
        assert!(matches!(err, JsonError::UnexpectedType { .. }));

        let err = from_slice::<UserType>(br#"["not", "an", "object"]"#).unwrap_err();
        assert!(matches!(err, JsonError::UnexpectedType { .. }));
    }

    #[test]
    fn test_should_encode_blobs_as_base64() -> anyhow::Result<()> {
        let blob = Blob::from(b"secret-hash".to_vec());
        assert_eq!(to_vec(&blob)?, br#""c2VjcmV0LWhhc2g=""#);
        Ok(())
    }
}

//! Shared structures referenced by operation inputs and outputs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use cognito_idp_json::json_structure;

use crate::enums::{
    AccountTakeoverEventActionType, AttributeDataType, DeletionProtectionType,
    DeliveryMediumType, ExplicitAuthFlowsType, OAuthFlowType, PreventUserExistenceErrorTypes,
    RecoveryOptionNameType, StatusType, TimeUnitsType, UserPoolMfaType, UserStatusType,
    UsernameAttributeType, VerifiedAttributeType,
};

// ---------------------------------------------------------------------------
// Users and attributes
// ---------------------------------------------------------------------------

json_structure! {
    /// A user attribute name/value pair.
    pub struct AttributeType {
        "Name" => name: String,
        "Value" => value: String,
    }
}

json_structure! {
    /// Legacy per-user SMS MFA option.
    pub struct MFAOptionType {
        "DeliveryMedium" => delivery_medium: DeliveryMediumType,
        "AttributeName" => attribute_name: String,
    }
}

json_structure! {
    /// A user profile.
    pub struct UserType {
        "Username" => username: String,
        "Attributes" => attributes: Vec<AttributeType>,
        "UserCreateDate" => user_create_date: DateTime<Utc>,
        "UserLastModifiedDate" => user_last_modified_date: DateTime<Utc>,
        "Enabled" => enabled: bool,
        "UserStatus" => user_status: UserStatusType,
        "MFAOptions" => mfa_options: Vec<MFAOptionType>,
    }
}

json_structure! {
    /// Where a confirmation or verification code was sent.
    pub struct CodeDeliveryDetailsType {
        /// Masked destination, e.g. `a***@e***.com`.
        "Destination" => destination: String,
        "DeliveryMedium" => delivery_medium: DeliveryMediumType,
        "AttributeName" => attribute_name: String,
    }
}

// ---------------------------------------------------------------------------
// Account recovery
// ---------------------------------------------------------------------------

json_structure! {
    /// One recovery mechanism and its priority.
    pub struct RecoveryOptionType {
        /// Lower values are tried first.
        "Priority" => priority: i32,
        "Name" => name: RecoveryOptionNameType,
    }
}

json_structure! {
    pub struct AccountRecoverySettingType {
        "RecoveryMechanisms" => recovery_mechanisms: Vec<RecoveryOptionType>,
    }
}

// ---------------------------------------------------------------------------
// MFA
// ---------------------------------------------------------------------------

json_structure! {
    /// SMS sender configuration.
    pub struct SmsConfigurationType {
        /// IAM role the service assumes to publish through SNS.
        "SnsCallerArn" => sns_caller_arn: String,
        "ExternalId" => external_id: String,
        "SnsRegion" => sns_region: String,
    }
}

json_structure! {
    pub struct SmsMfaConfigType {
        /// Must contain the `{####}` code placeholder.
        "SmsAuthenticationMessage" => sms_authentication_message: String,
        "SmsConfiguration" => sms_configuration: SmsConfigurationType,
    }
}

json_structure! {
    pub struct SoftwareTokenMfaConfigType {
        "Enabled" => enabled: bool,
    }
}

json_structure! {
    /// Per-user SMS MFA preference.
    pub struct SMSMfaSettingsType {
        "Enabled" => enabled: bool,
        "PreferredMfa" => preferred_mfa: bool,
    }
}

json_structure! {
    /// Per-user TOTP MFA preference.
    pub struct SoftwareTokenMfaSettingsType {
        "Enabled" => enabled: bool,
        "PreferredMfa" => preferred_mfa: bool,
    }
}

// ---------------------------------------------------------------------------
// Request context
// ---------------------------------------------------------------------------

json_structure! {
    /// A request header forwarded for risk evaluation. Member names are
    /// camelCase on the wire.
    pub struct HttpHeader {
        "headerName" => header_name: String,
        "headerValue" => header_value: String,
    }
}

json_structure! {
    /// Device and request context for advanced security.
    pub struct ContextDataType {
        "IpAddress" => ip_address: String,
        "ServerName" => server_name: String,
        "ServerPath" => server_path: String,
        "HttpHeaders" => http_headers: Vec<HttpHeader>,
        "EncodedData" => encoded_data: String,
    }
}

json_structure! {
    pub struct UserContextDataType {
        "IpAddress" => ip_address: String,
        "EncodedData" => encoded_data: String,
    }
}

json_structure! {
    pub struct AnalyticsMetadataType {
        "AnalyticsEndpointId" => analytics_endpoint_id: String,
    }
}

json_structure! {
    /// Pinpoint analytics settings of an app client.
    pub struct AnalyticsConfigurationType {
        "ApplicationId" => application_id: String,
        "ApplicationArn" => application_arn: String,
        "RoleArn" => role_arn: String,
        "ExternalId" => external_id: String,
        "UserDataShared" => user_data_shared: bool,
    }
}

// ---------------------------------------------------------------------------
// Risk configuration
// ---------------------------------------------------------------------------

json_structure! {
    pub struct AccountTakeoverActionType {
        "Notify" => notify: bool,
        "EventAction" => event_action: AccountTakeoverEventActionType,
    }
}

json_structure! {
    pub struct AccountTakeoverActionsType {
        "LowAction" => low_action: AccountTakeoverActionType,
        "MediumAction" => medium_action: AccountTakeoverActionType,
        "HighAction" => high_action: AccountTakeoverActionType,
    }
}

// ---------------------------------------------------------------------------
// User pools
// ---------------------------------------------------------------------------

json_structure! {
    pub struct PasswordPolicyType {
        "MinimumLength" => minimum_length: i32,
        "RequireUppercase" => require_uppercase: bool,
        "RequireLowercase" => require_lowercase: bool,
        "RequireNumbers" => require_numbers: bool,
        "RequireSymbols" => require_symbols: bool,
        "TemporaryPasswordValidityDays" => temporary_password_validity_days: i32,
    }
}

json_structure! {
    pub struct UserPoolPolicyType {
        "PasswordPolicy" => password_policy: PasswordPolicyType,
    }
}

json_structure! {
    /// Bounds for a `Number` attribute. Values are decimal strings.
    pub struct NumberAttributeConstraintsType {
        "MinValue" => min_value: String,
        "MaxValue" => max_value: String,
    }
}

json_structure! {
    pub struct StringAttributeConstraintsType {
        "MinLength" => min_length: String,
        "MaxLength" => max_length: String,
    }
}

json_structure! {
    /// A standard or custom attribute in the pool schema.
    pub struct SchemaAttributeType {
        "Name" => name: String,
        "AttributeDataType" => attribute_data_type: AttributeDataType,
        "DeveloperOnlyAttribute" => developer_only_attribute: bool,
        "Mutable" => mutable: bool,
        "Required" => required: bool,
        "NumberAttributeConstraints" => number_attribute_constraints: NumberAttributeConstraintsType,
        "StringAttributeConstraints" => string_attribute_constraints: StringAttributeConstraintsType,
    }
}

json_structure! {
    /// Full description of a user pool.
    pub struct UserPoolType {
        "Id" => id: String,
        "Name" => name: String,
        "Policies" => policies: UserPoolPolicyType,
        "DeletionProtection" => deletion_protection: DeletionProtectionType,
        "Status" => status: StatusType,
        "LastModifiedDate" => last_modified_date: DateTime<Utc>,
        "CreationDate" => creation_date: DateTime<Utc>,
        "SchemaAttributes" => schema_attributes: Vec<SchemaAttributeType>,
        "AutoVerifiedAttributes" => auto_verified_attributes: Vec<VerifiedAttributeType>,
        "UsernameAttributes" => username_attributes: Vec<UsernameAttributeType>,
        "SmsVerificationMessage" => sms_verification_message: String,
        "EmailVerificationMessage" => email_verification_message: String,
        "EmailVerificationSubject" => email_verification_subject: String,
        "SmsAuthenticationMessage" => sms_authentication_message: String,
        "MfaConfiguration" => mfa_configuration: UserPoolMfaType,
        "EstimatedNumberOfUsers" => estimated_number_of_users: i32,
        "SmsConfiguration" => sms_configuration: SmsConfigurationType,
        "UserPoolTags" => user_pool_tags: HashMap<String, String>,
        "SmsConfigurationFailure" => sms_configuration_failure: String,
        "EmailConfigurationFailure" => email_configuration_failure: String,
        "Domain" => domain: String,
        "CustomDomain" => custom_domain: String,
        "Arn" => arn: String,
        "AccountRecoverySetting" => account_recovery_setting: AccountRecoverySettingType,
    }
}

json_structure! {
    /// Summary entry returned by `ListUserPools`.
    pub struct UserPoolDescriptionType {
        "Id" => id: String,
        "Name" => name: String,
        "Status" => status: StatusType,
        "LastModifiedDate" => last_modified_date: DateTime<Utc>,
        "CreationDate" => creation_date: DateTime<Utc>,
    }
}

// ---------------------------------------------------------------------------
// App clients
// ---------------------------------------------------------------------------

json_structure! {
    pub struct TokenValidityUnitsType {
        "AccessToken" => access_token: TimeUnitsType,
        "IdToken" => id_token: TimeUnitsType,
        "RefreshToken" => refresh_token: TimeUnitsType,
    }
}

json_structure! {
    /// Full description of an app client.
    pub struct UserPoolClientType {
        "UserPoolId" => user_pool_id: String,
        "ClientName" => client_name: String,
        "ClientId" => client_id: String,
        "ClientSecret" => client_secret: String,
        "LastModifiedDate" => last_modified_date: DateTime<Utc>,
        "CreationDate" => creation_date: DateTime<Utc>,
        /// In the unit given by `TokenValidityUnits`, days by default.
        "RefreshTokenValidity" => refresh_token_validity: i32,
        "AccessTokenValidity" => access_token_validity: i32,
        "IdTokenValidity" => id_token_validity: i32,
        "TokenValidityUnits" => token_validity_units: TokenValidityUnitsType,
        "ReadAttributes" => read_attributes: Vec<String>,
        "WriteAttributes" => write_attributes: Vec<String>,
        "ExplicitAuthFlows" => explicit_auth_flows: Vec<ExplicitAuthFlowsType>,
        "SupportedIdentityProviders" => supported_identity_providers: Vec<String>,
        "CallbackURLs" => callback_urls: Vec<String>,
        "LogoutURLs" => logout_urls: Vec<String>,
        "DefaultRedirectURI" => default_redirect_uri: String,
        "AllowedOAuthFlows" => allowed_oauth_flows: Vec<OAuthFlowType>,
        "AllowedOAuthScopes" => allowed_oauth_scopes: Vec<String>,
        "AllowedOAuthFlowsUserPoolClient" => allowed_oauth_flows_user_pool_client: bool,
        "AnalyticsConfiguration" => analytics_configuration: AnalyticsConfigurationType,
        "PreventUserExistenceErrors" => prevent_user_existence_errors: PreventUserExistenceErrorTypes,
        "EnableTokenRevocation" => enable_token_revocation: bool,
    }
}

json_structure! {
    pub struct UserPoolClientDescription {
        "ClientId" => client_id: String,
        "UserPoolId" => user_pool_id: String,
        "ClientName" => client_name: String,
    }
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

json_structure! {
    pub struct NewDeviceMetadataType {
        "DeviceKey" => device_key: String,
        "DeviceGroupKey" => device_group_key: String,
    }
}

json_structure! {
    /// Tokens issued by a successful authentication.
    pub struct AuthenticationResultType {
        "AccessToken" => access_token: String,
        /// Access token lifetime in seconds.
        "ExpiresIn" => expires_in: i32,
        "TokenType" => token_type: String,
        "RefreshToken" => refresh_token: String,
        "IdToken" => id_token: String,
        "NewDeviceMetadata" => new_device_metadata: NewDeviceMetadataType,
    }
}

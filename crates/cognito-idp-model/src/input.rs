//! Request bodies for Cognito Identity Provider operations.
//!
//! Every member is optional; unset members are left out of the request body.

use std::collections::HashMap;

use cognito_idp_json::json_structure;

use crate::enums::{
    AuthFlowType, ChallengeNameType, DeletionProtectionType, DeliveryMediumType,
    ExplicitAuthFlowsType, MessageActionType, OAuthFlowType, PreventUserExistenceErrorTypes,
    UserPoolMfaType, UsernameAttributeType, VerifiedAttributeType,
};
use crate::types::{
    AccountRecoverySettingType, AnalyticsConfigurationType, AnalyticsMetadataType, AttributeType,
    ContextDataType, MFAOptionType, SMSMfaSettingsType, SchemaAttributeType,
    SmsConfigurationType, SmsMfaConfigType, SoftwareTokenMfaConfigType,
    SoftwareTokenMfaSettingsType, TokenValidityUnitsType, UserContextDataType,
    UserPoolPolicyType,
};

// ---------------------------------------------------------------------------
// User administration
// ---------------------------------------------------------------------------

json_structure! {
    /// Input for the `AdminCreateUser` operation.
    pub struct AdminCreateUserInput {
        "UserPoolId" => user_pool_id: String,
        "Username" => username: String,
        "UserAttributes" => user_attributes: Vec<AttributeType>,
        /// Passed to the pre sign-up trigger; not stored.
        "ValidationData" => validation_data: Vec<AttributeType>,
        "TemporaryPassword" => temporary_password: String,
        "ForceAliasCreation" => force_alias_creation: bool,
        "MessageAction" => message_action: MessageActionType,
        "DesiredDeliveryMediums" => desired_delivery_mediums: Vec<DeliveryMediumType>,
        "ClientMetadata" => client_metadata: HashMap<String, String>,
    }
}

json_structure! {
    /// Input for the `AdminGetUser` operation.
    pub struct AdminGetUserInput {
        "UserPoolId" => user_pool_id: String,
        "Username" => username: String,
    }
}

json_structure! {
    /// Input for the `AdminDeleteUser` operation.
    pub struct AdminDeleteUserInput {
        "UserPoolId" => user_pool_id: String,
        "Username" => username: String,
    }
}

json_structure! {
    /// Input for the `AdminDisableUser` operation.
    pub struct AdminDisableUserInput {
        "UserPoolId" => user_pool_id: String,
        "Username" => username: String,
    }
}

json_structure! {
    /// Input for the `AdminEnableUser` operation.
    pub struct AdminEnableUserInput {
        "UserPoolId" => user_pool_id: String,
        "Username" => username: String,
    }
}

json_structure! {
    /// Input for the `AdminSetUserSettings` operation.
    pub struct AdminSetUserSettingsInput {
        "UserPoolId" => user_pool_id: String,
        "Username" => username: String,
        "MFAOptions" => mfa_options: Vec<MFAOptionType>,
    }
}

json_structure! {
    /// Input for the `AdminUpdateUserAttributes` operation.
    pub struct AdminUpdateUserAttributesInput {
        "UserPoolId" => user_pool_id: String,
        "Username" => username: String,
        "UserAttributes" => user_attributes: Vec<AttributeType>,
        "ClientMetadata" => client_metadata: HashMap<String, String>,
    }
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

json_structure! {
    /// Input for the `AdminInitiateAuth` operation.
    pub struct AdminInitiateAuthInput {
        "UserPoolId" => user_pool_id: String,
        "ClientId" => client_id: String,
        "AuthFlow" => auth_flow: AuthFlowType,
        /// Flow-specific parameters such as `USERNAME` and `PASSWORD`.
        "AuthParameters" => auth_parameters: HashMap<String, String>,
        "ClientMetadata" => client_metadata: HashMap<String, String>,
        "AnalyticsMetadata" => analytics_metadata: AnalyticsMetadataType,
        "ContextData" => context_data: ContextDataType,
    }
}

json_structure! {
    /// Input for the `InitiateAuth` operation.
    pub struct InitiateAuthInput {
        "AuthFlow" => auth_flow: AuthFlowType,
        "AuthParameters" => auth_parameters: HashMap<String, String>,
        "ClientMetadata" => client_metadata: HashMap<String, String>,
        "ClientId" => client_id: String,
        "AnalyticsMetadata" => analytics_metadata: AnalyticsMetadataType,
        "UserContextData" => user_context_data: UserContextDataType,
    }
}

json_structure! {
    /// Input for the `RespondToAuthChallenge` operation.
    pub struct RespondToAuthChallengeInput {
        "ClientId" => client_id: String,
        "ChallengeName" => challenge_name: ChallengeNameType,
        /// Opaque value returned by the previous call in the flow.
        "Session" => session: String,
        "ChallengeResponses" => challenge_responses: HashMap<String, String>,
        "AnalyticsMetadata" => analytics_metadata: AnalyticsMetadataType,
        "UserContextData" => user_context_data: UserContextDataType,
        "ClientMetadata" => client_metadata: HashMap<String, String>,
    }
}

// ---------------------------------------------------------------------------
// Self-service
// ---------------------------------------------------------------------------

json_structure! {
    /// Input for the `SignUp` operation.
    pub struct SignUpInput {
        "ClientId" => client_id: String,
        "SecretHash" => secret_hash: String,
        "Username" => username: String,
        "Password" => password: String,
        "UserAttributes" => user_attributes: Vec<AttributeType>,
        "ValidationData" => validation_data: Vec<AttributeType>,
        "AnalyticsMetadata" => analytics_metadata: AnalyticsMetadataType,
        "UserContextData" => user_context_data: UserContextDataType,
        "ClientMetadata" => client_metadata: HashMap<String, String>,
    }
}

json_structure! {
    /// Input for the `ConfirmSignUp` operation.
    pub struct ConfirmSignUpInput {
        "ClientId" => client_id: String,
        "SecretHash" => secret_hash: String,
        "Username" => username: String,
        "ConfirmationCode" => confirmation_code: String,
        "ForceAliasCreation" => force_alias_creation: bool,
        "AnalyticsMetadata" => analytics_metadata: AnalyticsMetadataType,
        "UserContextData" => user_context_data: UserContextDataType,
        "ClientMetadata" => client_metadata: HashMap<String, String>,
    }
}

json_structure! {
    /// Input for the `ForgotPassword` operation.
    pub struct ForgotPasswordInput {
        "ClientId" => client_id: String,
        "SecretHash" => secret_hash: String,
        "UserContextData" => user_context_data: UserContextDataType,
        "Username" => username: String,
        "AnalyticsMetadata" => analytics_metadata: AnalyticsMetadataType,
        "ClientMetadata" => client_metadata: HashMap<String, String>,
    }
}

json_structure! {
    /// Input for the `ConfirmForgotPassword` operation.
    pub struct ConfirmForgotPasswordInput {
        "ClientId" => client_id: String,
        "SecretHash" => secret_hash: String,
        "Username" => username: String,
        "ConfirmationCode" => confirmation_code: String,
        "Password" => password: String,
        "AnalyticsMetadata" => analytics_metadata: AnalyticsMetadataType,
        "UserContextData" => user_context_data: UserContextDataType,
        "ClientMetadata" => client_metadata: HashMap<String, String>,
    }
}

json_structure! {
    /// Input for the `ChangePassword` operation.
    pub struct ChangePasswordInput {
        "PreviousPassword" => previous_password: String,
        "ProposedPassword" => proposed_password: String,
        "AccessToken" => access_token: String,
    }
}

json_structure! {
    /// Input for the `GetUser` operation.
    pub struct GetUserInput {
        "AccessToken" => access_token: String,
    }
}

json_structure! {
    /// Input for the `GlobalSignOut` operation.
    pub struct GlobalSignOutInput {
        "AccessToken" => access_token: String,
    }
}

json_structure! {
    /// Input for the `SetUserMFAPreference` operation.
    pub struct SetUserMFAPreferenceInput {
        "SMSMfaSettings" => sms_mfa_settings: SMSMfaSettingsType,
        "SoftwareTokenMfaSettings" => software_token_mfa_settings: SoftwareTokenMfaSettingsType,
        "AccessToken" => access_token: String,
    }
}

// ---------------------------------------------------------------------------
// User pools
// ---------------------------------------------------------------------------

json_structure! {
    /// Input for the `CreateUserPool` operation.
    pub struct CreateUserPoolInput {
        "PoolName" => pool_name: String,
        "Policies" => policies: UserPoolPolicyType,
        "DeletionProtection" => deletion_protection: DeletionProtectionType,
        "AutoVerifiedAttributes" => auto_verified_attributes: Vec<VerifiedAttributeType>,
        "UsernameAttributes" => username_attributes: Vec<UsernameAttributeType>,
        "SmsVerificationMessage" => sms_verification_message: String,
        "EmailVerificationMessage" => email_verification_message: String,
        "EmailVerificationSubject" => email_verification_subject: String,
        "SmsAuthenticationMessage" => sms_authentication_message: String,
        "MfaConfiguration" => mfa_configuration: UserPoolMfaType,
        "SmsConfiguration" => sms_configuration: SmsConfigurationType,
        "UserPoolTags" => user_pool_tags: HashMap<String, String>,
        "Schema" => schema: Vec<SchemaAttributeType>,
        "AccountRecoverySetting" => account_recovery_setting: AccountRecoverySettingType,
    }
}

json_structure! {
    /// Input for the `DescribeUserPool` operation.
    pub struct DescribeUserPoolInput {
        "UserPoolId" => user_pool_id: String,
    }
}

json_structure! {
    /// Input for the `UpdateUserPool` operation. Unset members revert to
    /// their service defaults.
    pub struct UpdateUserPoolInput {
        "UserPoolId" => user_pool_id: String,
        "Policies" => policies: UserPoolPolicyType,
        "DeletionProtection" => deletion_protection: DeletionProtectionType,
        "AutoVerifiedAttributes" => auto_verified_attributes: Vec<VerifiedAttributeType>,
        "SmsVerificationMessage" => sms_verification_message: String,
        "EmailVerificationMessage" => email_verification_message: String,
        "EmailVerificationSubject" => email_verification_subject: String,
        "SmsAuthenticationMessage" => sms_authentication_message: String,
        "MfaConfiguration" => mfa_configuration: UserPoolMfaType,
        "SmsConfiguration" => sms_configuration: SmsConfigurationType,
        "UserPoolTags" => user_pool_tags: HashMap<String, String>,
        "AccountRecoverySetting" => account_recovery_setting: AccountRecoverySettingType,
    }
}

json_structure! {
    /// Input for the `ListUserPools` operation.
    pub struct ListUserPoolsInput {
        "NextToken" => next_token: String,
        "MaxResults" => max_results: i32,
    }
}

json_structure! {
    /// Input for the `SetUserPoolMfaConfig` operation.
    pub struct SetUserPoolMfaConfigInput {
        "UserPoolId" => user_pool_id: String,
        "SmsMfaConfiguration" => sms_mfa_configuration: SmsMfaConfigType,
        "SoftwareTokenMfaConfiguration" => software_token_mfa_configuration: SoftwareTokenMfaConfigType,
        "MfaConfiguration" => mfa_configuration: UserPoolMfaType,
    }
}

json_structure! {
    /// Input for the `GetUserPoolMfaConfig` operation.
    pub struct GetUserPoolMfaConfigInput {
        "UserPoolId" => user_pool_id: String,
    }
}

json_structure! {
    /// Input for the `ListUsers` operation.
    pub struct ListUsersInput {
        "UserPoolId" => user_pool_id: String,
        "AttributesToGet" => attributes_to_get: Vec<String>,
        "Limit" => limit: i32,
        "PaginationToken" => pagination_token: String,
        /// Filter expression such as `email ^= "alice"`.
        "Filter" => filter: String,
    }
}

// ---------------------------------------------------------------------------
// App clients
// ---------------------------------------------------------------------------

json_structure! {
    /// Input for the `CreateUserPoolClient` operation.
    pub struct CreateUserPoolClientInput {
        "UserPoolId" => user_pool_id: String,
        "ClientName" => client_name: String,
        "GenerateSecret" => generate_secret: bool,
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
    /// Input for the `DescribeUserPoolClient` operation.
    pub struct DescribeUserPoolClientInput {
        "UserPoolId" => user_pool_id: String,
        "ClientId" => client_id: String,
    }
}

json_structure! {
    /// Input for the `ListUserPoolClients` operation.
    pub struct ListUserPoolClientsInput {
        "UserPoolId" => user_pool_id: String,
        "MaxResults" => max_results: i32,
        "NextToken" => next_token: String,
    }
}

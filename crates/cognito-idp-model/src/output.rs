//! Response bodies for Cognito Identity Provider operations.
//!
//! Operations that return no data still get a (memberless) output type so
//! every operation has the same input/output shape. Unknown members sent by
//! newer service versions are skipped when reading.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use cognito_idp_json::json_structure;

use crate::enums::{ChallengeNameType, UserPoolMfaType, UserStatusType};
use crate::types::{
    AttributeType, AuthenticationResultType, CodeDeliveryDetailsType, MFAOptionType,
    SmsMfaConfigType, SoftwareTokenMfaConfigType, UserPoolClientDescription,
    UserPoolClientType, UserPoolDescriptionType, UserPoolType, UserType,
};

// ---------------------------------------------------------------------------
// User administration
// ---------------------------------------------------------------------------

json_structure! {
    /// Output of the `AdminCreateUser` operation.
    pub struct AdminCreateUserOutput {
        "User" => user: UserType,
    }
}

json_structure! {
    /// Output of the `AdminGetUser` operation.
    pub struct AdminGetUserOutput {
        "Username" => username: String,
        "UserAttributes" => user_attributes: Vec<AttributeType>,
        "UserCreateDate" => user_create_date: DateTime<Utc>,
        "UserLastModifiedDate" => user_last_modified_date: DateTime<Utc>,
        "Enabled" => enabled: bool,
        "UserStatus" => user_status: UserStatusType,
        "MFAOptions" => mfa_options: Vec<MFAOptionType>,
        "PreferredMfaSetting" => preferred_mfa_setting: String,
        "UserMFASettingList" => user_mfa_setting_list: Vec<String>,
    }
}

json_structure! {
    /// Output of the `AdminDeleteUser` operation.
    pub struct AdminDeleteUserOutput {}
}

json_structure! {
    /// Output of the `AdminDisableUser` operation.
    pub struct AdminDisableUserOutput {}
}

json_structure! {
    /// Output of the `AdminEnableUser` operation.
    pub struct AdminEnableUserOutput {}
}

json_structure! {
    /// Output of the `AdminSetUserSettings` operation.
    pub struct AdminSetUserSettingsOutput {}
}

json_structure! {
    /// Output of the `AdminUpdateUserAttributes` operation.
    pub struct AdminUpdateUserAttributesOutput {}
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

json_structure! {
    /// Output of the `AdminInitiateAuth` operation. Either a challenge or an
    /// authentication result is present.
    pub struct AdminInitiateAuthOutput {
        "ChallengeName" => challenge_name: ChallengeNameType,
        "Session" => session: String,
        "ChallengeParameters" => challenge_parameters: HashMap<String, String>,
        "AuthenticationResult" => authentication_result: AuthenticationResultType,
    }
}

json_structure! {
    /// Output of the `InitiateAuth` operation.
    pub struct InitiateAuthOutput {
        "ChallengeName" => challenge_name: ChallengeNameType,
        "Session" => session: String,
        "ChallengeParameters" => challenge_parameters: HashMap<String, String>,
        "AuthenticationResult" => authentication_result: AuthenticationResultType,
    }
}

json_structure! {
    /// Output of the `RespondToAuthChallenge` operation.
    pub struct RespondToAuthChallengeOutput {
        "ChallengeName" => challenge_name: ChallengeNameType,
        "Session" => session: String,
        "ChallengeParameters" => challenge_parameters: HashMap<String, String>,
        "AuthenticationResult" => authentication_result: AuthenticationResultType,
    }
}

// ---------------------------------------------------------------------------
// Self-service
// ---------------------------------------------------------------------------

json_structure! {
    /// Output of the `SignUp` operation.
    pub struct SignUpOutput {
        "UserConfirmed" => user_confirmed: bool,
        "CodeDeliveryDetails" => code_delivery_details: CodeDeliveryDetailsType,
        "UserSub" => user_sub: String,
    }
}

json_structure! {
    /// Output of the `ConfirmSignUp` operation.
    pub struct ConfirmSignUpOutput {}
}

json_structure! {
    /// Output of the `ForgotPassword` operation.
    pub struct ForgotPasswordOutput {
        "CodeDeliveryDetails" => code_delivery_details: CodeDeliveryDetailsType,
    }
}

json_structure! {
    /// Output of the `ConfirmForgotPassword` operation.
    pub struct ConfirmForgotPasswordOutput {}
}

json_structure! {
    /// Output of the `ChangePassword` operation.
    pub struct ChangePasswordOutput {}
}

json_structure! {
    /// Output of the `GetUser` operation.
    pub struct GetUserOutput {
        "Username" => username: String,
        "UserAttributes" => user_attributes: Vec<AttributeType>,
        "MFAOptions" => mfa_options: Vec<MFAOptionType>,
        "PreferredMfaSetting" => preferred_mfa_setting: String,
        "UserMFASettingList" => user_mfa_setting_list: Vec<String>,
    }
}

json_structure! {
    /// Output of the `GlobalSignOut` operation.
    pub struct GlobalSignOutOutput {}
}

json_structure! {
    /// Output of the `SetUserMFAPreference` operation.
    pub struct SetUserMFAPreferenceOutput {}
}

// ---------------------------------------------------------------------------
// User pools
// ---------------------------------------------------------------------------

json_structure! {
    /// Output of the `CreateUserPool` operation.
    pub struct CreateUserPoolOutput {
        "UserPool" => user_pool: UserPoolType,
    }
}

json_structure! {
    /// Output of the `DescribeUserPool` operation.
    pub struct DescribeUserPoolOutput {
        "UserPool" => user_pool: UserPoolType,
    }
}

json_structure! {
    /// Output of the `UpdateUserPool` operation.
    pub struct UpdateUserPoolOutput {}
}

json_structure! {
    /// Output of the `ListUserPools` operation.
    pub struct ListUserPoolsOutput {
        "UserPools" => user_pools: Vec<UserPoolDescriptionType>,
        "NextToken" => next_token: String,
    }
}

json_structure! {
    /// Output of the `SetUserPoolMfaConfig` operation.
    pub struct SetUserPoolMfaConfigOutput {
        "SmsMfaConfiguration" => sms_mfa_configuration: SmsMfaConfigType,
        "SoftwareTokenMfaConfiguration" => software_token_mfa_configuration: SoftwareTokenMfaConfigType,
        "MfaConfiguration" => mfa_configuration: UserPoolMfaType,
    }
}

json_structure! {
    /// Output of the `GetUserPoolMfaConfig` operation.
    pub struct GetUserPoolMfaConfigOutput {
        "SmsMfaConfiguration" => sms_mfa_configuration: SmsMfaConfigType,
        "SoftwareTokenMfaConfiguration" => software_token_mfa_configuration: SoftwareTokenMfaConfigType,
        "MfaConfiguration" => mfa_configuration: UserPoolMfaType,
    }
}

json_structure! {
    /// Output of the `ListUsers` operation.
    pub struct ListUsersOutput {
        "Users" => users: Vec<UserType>,
        "PaginationToken" => pagination_token: String,
    }
}

// ---------------------------------------------------------------------------
// App clients
// ---------------------------------------------------------------------------

json_structure! {
    /// Output of the `CreateUserPoolClient` operation.
    pub struct CreateUserPoolClientOutput {
        "UserPoolClient" => user_pool_client: UserPoolClientType,
    }
}

json_structure! {
    /// Output of the `DescribeUserPoolClient` operation.
    pub struct DescribeUserPoolClientOutput {
        "UserPoolClient" => user_pool_client: UserPoolClientType,
    }
}

json_structure! {
    /// Output of the `ListUserPoolClients` operation.
    pub struct ListUserPoolClientsOutput {
        "UserPoolClients" => user_pool_clients: Vec<UserPoolClientDescription>,
        "NextToken" => next_token: String,
    }
}

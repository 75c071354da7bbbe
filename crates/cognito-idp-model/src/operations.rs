//! Cognito Identity Provider operation enum and input/output bindings.

use std::fmt;

use cognito_idp_json::{JsonMarshall, JsonUnmarshall};

use crate::input::{
    AdminCreateUserInput, AdminDeleteUserInput, AdminDisableUserInput, AdminEnableUserInput,
    AdminGetUserInput, AdminInitiateAuthInput, AdminSetUserSettingsInput,
    AdminUpdateUserAttributesInput, ChangePasswordInput, ConfirmForgotPasswordInput,
    ConfirmSignUpInput, CreateUserPoolClientInput, CreateUserPoolInput,
    DescribeUserPoolClientInput, DescribeUserPoolInput, ForgotPasswordInput,
    GetUserInput, GetUserPoolMfaConfigInput, GlobalSignOutInput, InitiateAuthInput,
    ListUserPoolClientsInput, ListUserPoolsInput, ListUsersInput, RespondToAuthChallengeInput,
    SetUserMFAPreferenceInput, SetUserPoolMfaConfigInput, SignUpInput, UpdateUserPoolInput,
};
use crate::output::{
    AdminCreateUserOutput, AdminDeleteUserOutput, AdminDisableUserOutput, AdminEnableUserOutput,
    AdminGetUserOutput, AdminInitiateAuthOutput, AdminSetUserSettingsOutput,
    AdminUpdateUserAttributesOutput, ChangePasswordOutput, ConfirmForgotPasswordOutput,
    ConfirmSignUpOutput, CreateUserPoolClientOutput, CreateUserPoolOutput,
    DescribeUserPoolClientOutput, DescribeUserPoolOutput, ForgotPasswordOutput,
    GetUserOutput, GetUserPoolMfaConfigOutput, GlobalSignOutOutput, InitiateAuthOutput,
    ListUserPoolClientsOutput, ListUserPoolsOutput, ListUsersOutput,
    RespondToAuthChallengeOutput, SetUserMFAPreferenceOutput, SetUserPoolMfaConfigOutput,
    SignUpOutput, UpdateUserPoolOutput,
};

/// Prefix of the `X-Amz-Target` header value.
pub const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService.";

/// A request body bound to the operation it is sent with.
pub trait OperationInput: JsonMarshall {
    /// The operation this input belongs to.
    const OPERATION: CognitoIdpOperation;

    /// The response body type of the operation.
    type Output: JsonUnmarshall;
}

macro_rules! operations {
    ($($(#[$meta:meta])* $name:ident($input:ident => $output:ident)),* $(,)?) => {
        /// All supported Cognito Identity Provider operations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CognitoIdpOperation {
            $($(#[$meta])* $name,)*
        }

        impl CognitoIdpOperation {
            /// Every operation, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$name),*];

            /// Returns the AWS operation name string.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }

            /// Parse an operation name string into a `CognitoIdpOperation`.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($name) => Some(Self::$name),)*
                    _ => None,
                }
            }
        }

        $(
            impl OperationInput for $input {
                const OPERATION: CognitoIdpOperation = CognitoIdpOperation::$name;
                type Output = $output;
            }
        )*
    };
}

operations! {
    // User administration
    /// Create a user as an administrator.
    AdminCreateUser(AdminCreateUserInput => AdminCreateUserOutput),
    /// Get a user by username as an administrator.
    AdminGetUser(AdminGetUserInput => AdminGetUserOutput),
    /// Delete a user as an administrator.
    AdminDeleteUser(AdminDeleteUserInput => AdminDeleteUserOutput),
    /// Disable a user.
    AdminDisableUser(AdminDisableUserInput => AdminDisableUserOutput),
    /// Enable a user.
    AdminEnableUser(AdminEnableUserInput => AdminEnableUserOutput),
    /// Set legacy MFA options for a user.
    AdminSetUserSettings(AdminSetUserSettingsInput => AdminSetUserSettingsOutput),
    /// Update user attributes as an administrator.
    AdminUpdateUserAttributes(AdminUpdateUserAttributesInput => AdminUpdateUserAttributesOutput),

    // Authentication
    /// Start a server-side authentication flow.
    AdminInitiateAuth(AdminInitiateAuthInput => AdminInitiateAuthOutput),
    /// Start a client-side authentication flow.
    InitiateAuth(InitiateAuthInput => InitiateAuthOutput),
    /// Answer an authentication challenge.
    RespondToAuthChallenge(RespondToAuthChallengeInput => RespondToAuthChallengeOutput),

    // Self-service
    /// Register a user.
    SignUp(SignUpInput => SignUpOutput),
    /// Confirm a registration code.
    ConfirmSignUp(ConfirmSignUpInput => ConfirmSignUpOutput),
    /// Send a password reset code.
    ForgotPassword(ForgotPasswordInput => ForgotPasswordOutput),
    /// Reset a password with a code.
    ConfirmForgotPassword(ConfirmForgotPasswordInput => ConfirmForgotPasswordOutput),
    /// Change the signed-in user's password.
    ChangePassword(ChangePasswordInput => ChangePasswordOutput),
    /// Get the signed-in user.
    GetUser(GetUserInput => GetUserOutput),
    /// Revoke all tokens of the signed-in user.
    GlobalSignOut(GlobalSignOutInput => GlobalSignOutOutput),
    /// Set the signed-in user's MFA preference.
    SetUserMFAPreference(SetUserMFAPreferenceInput => SetUserMFAPreferenceOutput),

    // User pools
    /// Create a user pool.
    CreateUserPool(CreateUserPoolInput => CreateUserPoolOutput),
    /// Describe a user pool.
    DescribeUserPool(DescribeUserPoolInput => DescribeUserPoolOutput),
    /// Update a user pool.
    UpdateUserPool(UpdateUserPoolInput => UpdateUserPoolOutput),
    /// List user pools.
    ListUserPools(ListUserPoolsInput => ListUserPoolsOutput),
    /// List users in a pool.
    ListUsers(ListUsersInput => ListUsersOutput),
    /// Set the pool MFA configuration.
    SetUserPoolMfaConfig(SetUserPoolMfaConfigInput => SetUserPoolMfaConfigOutput),
    /// Get the pool MFA configuration.
    GetUserPoolMfaConfig(GetUserPoolMfaConfigInput => GetUserPoolMfaConfigOutput),

    // App clients
    /// Create an app client.
    CreateUserPoolClient(CreateUserPoolClientInput => CreateUserPoolClientOutput),
    /// Describe an app client.
    DescribeUserPoolClient(DescribeUserPoolClientInput => DescribeUserPoolClientOutput),
    /// List app clients of a pool.
    ListUserPoolClients(ListUserPoolClientsInput => ListUserPoolClientsOutput),
}

impl CognitoIdpOperation {
    /// The `X-Amz-Target` header value for this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}{}", self.as_str())
    }

    /// Resolve an `X-Amz-Target` header value.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        target.strip_prefix(TARGET_PREFIX).and_then(Self::from_name)
    }
}

impl fmt::Display for CognitoIdpOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! String enumerations used by Cognito model types.
//!
//! Each enum carries an `Unknown(String)` variant so values the service adds
//! later survive a read/write cycle unchanged.

use cognito_idp_json::string_enum;

string_enum! {
    /// Channel used to recover an account.
    pub enum RecoveryOptionNameType {
        VerifiedEmail => "verified_email",
        VerifiedPhoneNumber => "verified_phone_number",
        AdminOnly => "admin_only",
    }
}

string_enum! {
    /// How a code or message is delivered.
    pub enum DeliveryMediumType {
        Sms => "SMS",
        Email => "EMAIL",
    }
}

string_enum! {
    /// Invitation message handling for `AdminCreateUser`.
    pub enum MessageActionType {
        Resend => "RESEND",
        Suppress => "SUPPRESS",
    }
}

string_enum! {
    /// Lifecycle state of a user.
    pub enum UserStatusType {
        Unconfirmed => "UNCONFIRMED",
        Confirmed => "CONFIRMED",
        Archived => "ARCHIVED",
        Compromised => "COMPROMISED",
        /// The literal `UNKNOWN` status reported by the service.
        UnknownStatus => "UNKNOWN",
        ResetRequired => "RESET_REQUIRED",
        ForceChangePassword => "FORCE_CHANGE_PASSWORD",
        ExternalProvider => "EXTERNAL_PROVIDER",
    }
}

string_enum! {
    /// Data type of a schema attribute.
    pub enum AttributeDataType {
        String => "String",
        Number => "Number",
        DateTime => "DateTime",
        Boolean => "Boolean",
    }
}

string_enum! {
    pub enum VerifiedAttributeType {
        PhoneNumber => "phone_number",
        Email => "email",
    }
}

string_enum! {
    pub enum UsernameAttributeType {
        PhoneNumber => "phone_number",
        Email => "email",
    }
}

string_enum! {
    /// Pool-wide MFA setting.
    pub enum UserPoolMfaType {
        Off => "OFF",
        On => "ON",
        Optional => "OPTIONAL",
    }
}

string_enum! {
    pub enum StatusType {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

string_enum! {
    pub enum DeletionProtectionType {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

string_enum! {
    /// Authentication flows an app client may use.
    pub enum ExplicitAuthFlowsType {
        AdminNoSrpAuth => "ADMIN_NO_SRP_AUTH",
        CustomAuthFlowOnly => "CUSTOM_AUTH_FLOW_ONLY",
        UserPasswordAuth => "USER_PASSWORD_AUTH",
        AllowAdminUserPasswordAuth => "ALLOW_ADMIN_USER_PASSWORD_AUTH",
        AllowCustomAuth => "ALLOW_CUSTOM_AUTH",
        AllowUserPasswordAuth => "ALLOW_USER_PASSWORD_AUTH",
        AllowUserSrpAuth => "ALLOW_USER_SRP_AUTH",
        AllowRefreshTokenAuth => "ALLOW_REFRESH_TOKEN_AUTH",
    }
}

string_enum! {
    pub enum OAuthFlowType {
        Code => "code",
        Implicit => "implicit",
        ClientCredentials => "client_credentials",
    }
}

string_enum! {
    pub enum PreventUserExistenceErrorTypes {
        Legacy => "LEGACY",
        Enabled => "ENABLED",
    }
}

string_enum! {
    /// Unit applied to a token validity period.
    pub enum TimeUnitsType {
        Seconds => "seconds",
        Minutes => "minutes",
        Hours => "hours",
        Days => "days",
    }
}

string_enum! {
    pub enum AuthFlowType {
        UserSrpAuth => "USER_SRP_AUTH",
        RefreshTokenAuth => "REFRESH_TOKEN_AUTH",
        RefreshToken => "REFRESH_TOKEN",
        CustomAuth => "CUSTOM_AUTH",
        AdminNoSrpAuth => "ADMIN_NO_SRP_AUTH",
        UserPasswordAuth => "USER_PASSWORD_AUTH",
        AdminUserPasswordAuth => "ADMIN_USER_PASSWORD_AUTH",
    }
}

string_enum! {
    /// Challenge returned by an authentication call.
    pub enum ChallengeNameType {
        SmsMfa => "SMS_MFA",
        SoftwareTokenMfa => "SOFTWARE_TOKEN_MFA",
        SelectMfaType => "SELECT_MFA_TYPE",
        MfaSetup => "MFA_SETUP",
        PasswordVerifier => "PASSWORD_VERIFIER",
        CustomChallenge => "CUSTOM_CHALLENGE",
        DeviceSrpAuth => "DEVICE_SRP_AUTH",
        DevicePasswordVerifier => "DEVICE_PASSWORD_VERIFIER",
        AdminNoSrpAuth => "ADMIN_NO_SRP_AUTH",
        NewPasswordRequired => "NEW_PASSWORD_REQUIRED",
    }
}

string_enum! {
    pub enum AccountTakeoverEventActionType {
        Block => "BLOCK",
        MfaIfConfigured => "MFA_IF_CONFIGURED",
        MfaRequired => "MFA_REQUIRED",
        NoAction => "NO_ACTION",
    }
}

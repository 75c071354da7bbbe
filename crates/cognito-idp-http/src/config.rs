//! Client-side configuration for the Cognito Identity Provider endpoint.
//!
//! Values are loaded from environment variables following the usual AWS
//! conventions.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Endpoint configuration.
///
/// # Examples
///
/// ```
/// use cognito_idp_http::config::CognitoIdpConfig;
///
/// let config = CognitoIdpConfig::builder().region("eu-west-1".into()).build();
/// assert_eq!(config.endpoint(), "https://cognito-idp.eu-west-1.amazonaws.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CognitoIdpConfig {
    /// AWS region the user pools live in.
    #[builder(default = String::from("us-east-1"))]
    pub region: String,

    /// Explicit endpoint URL, overriding the regional default (e.g. a local
    /// emulator).
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl Default for CognitoIdpConfig {
    fn default() -> Self {
        Self {
            region: String::from("us-east-1"),
            endpoint_url: None,
        }
    }
}

impl CognitoIdpConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` | `DEFAULT_REGION`, then `us-east-1` |
    /// | `COGNITO_IDP_ENDPOINT_URL` | regional endpoint |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) =
            non_empty(lookup("AWS_REGION")).or_else(|| non_empty(lookup("DEFAULT_REGION")))
        {
            config.region = v;
        }
        if let Some(v) = non_empty(lookup("COGNITO_IDP_ENDPOINT_URL")) {
            config.endpoint_url = Some(v);
        }

        config
    }

    /// The URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        match &self.endpoint_url {
            Some(url) => url.clone(),
            None => format!("https://cognito-idp.{}.amazonaws.com", self.region),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

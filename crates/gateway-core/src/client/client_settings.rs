use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the target and identification of the
/// gateway client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use gateway_core::ClientSettings;
/// let settings = ClientSettings {
///     api_url: "http://localhost:3000".to_string(),
///     user_agent: "One Gateway Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The url of the targeted gateway instance. Defaults to `http://localhost:3000`
    pub api_url: String,
    /// The user_agent sent to the gateway. Defaults to `One Gateway Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".into(),
            user_agent: "One Gateway Rust-SDK".into(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::{
    api, error::PasskeyError, platform::PlatformAuthenticator, types::LoginFinishRequest,
    WebAuthnClient,
};

const BEGIN_FALLBACK: &str = "Failed to start passkey login";
const FINISH_FALLBACK: &str = "Passkey login failed";

/// Inputs for logging in with a passkey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasskeyLoginRequest {
    /// The account the ceremony is bound to. The gateway only accepts
    /// assertions from credentials registered to this user.
    pub username: String,
}

impl WebAuthnClient {
    /// Logs in with a passkey registered to `request.username`.
    ///
    /// On success the gateway has authenticated the session behind the shared
    /// cookie jar; session-derived state (stored user, tokens) is for the
    /// caller to re-initialize, the way the web console reloads the page.
    pub async fn login_with_passkey(
        &self,
        authenticator: &dyn PlatformAuthenticator,
        request: PasskeyLoginRequest,
    ) -> Result<(), PasskeyError> {
        let username = request.username.trim();
        if username.is_empty() {
            return Err(PasskeyError::Validation("Username cannot be empty"));
        }

        if !authenticator.is_supported().await {
            return Err(PasskeyError::Unsupported);
        }

        let config = self.client.internal.api_configuration();

        let begin = api::begin_login(&config, &api::LoginBeginRequest { username }).await?;
        let message = begin.message_or(BEGIN_FALLBACK);
        if !begin.success {
            return Err(PasskeyError::BeginFailed(message));
        }
        let options = begin
            .data
            .and_then(|d| d.public_key)
            .ok_or(PasskeyError::BeginFailed(message))?;

        let credential = authenticator
            .get_credential(options.try_into()?)
            .await
            .map_err(|e| PasskeyError::from_platform("login", e))?
            .ok_or(PasskeyError::Cancelled)?;

        let finish = api::finish_login(&config, &LoginFinishRequest::from(credential)).await?;
        if !finish.success {
            return Err(PasskeyError::FinishFailed(finish.message_or(FINISH_FALLBACK)));
        }

        Ok(())
    }
}

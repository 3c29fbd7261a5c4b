use serde::{Deserialize, Serialize};

use crate::{
    api, error::PasskeyError, platform::PlatformAuthenticator, types::RegistrationFinishRequest,
    WebAuthnClient,
};

const BEGIN_FALLBACK: &str = "Failed to start passkey registration";
const FINISH_FALLBACK: &str = "Failed to complete passkey registration";

/// Inputs for registering a new passkey on the signed-in account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PasskeyRegistrationRequest {
    /// Optional human-readable name stored alongside the credential and shown
    /// in the credential listing.
    pub alias: Option<String>,
}

impl WebAuthnClient {
    /// Registers a new passkey for the current session's user.
    ///
    /// Runs the full attestation ceremony: requests creation options from the
    /// gateway, hands the decoded options to `authenticator`, and posts the
    /// resulting attestation back with the session's bearer token. The finish
    /// endpoint is never called when the platform step does not produce a
    /// credential.
    pub async fn register_passkey(
        &self,
        authenticator: &dyn PlatformAuthenticator,
        request: PasskeyRegistrationRequest,
    ) -> Result<(), PasskeyError> {
        if !authenticator.is_supported().await {
            return Err(PasskeyError::Unsupported);
        }

        let config = self.client.internal.api_configuration();

        let begin = api::begin_registration(
            &config,
            &api::RegistrationBeginRequest {
                alias: request.alias.as_deref(),
            },
        )
        .await?;
        let message = begin.message_or(BEGIN_FALLBACK);
        if !begin.success {
            return Err(PasskeyError::BeginFailed(message));
        }
        let options = begin
            .data
            .and_then(|d| d.public_key)
            .ok_or(PasskeyError::BeginFailed(message))?;

        let credential = authenticator
            .create_credential(options.try_into()?)
            .await
            .map_err(|e| PasskeyError::from_platform("registration", e))?
            .ok_or(PasskeyError::Cancelled)?;

        let finish =
            api::finish_registration(&config, &RegistrationFinishRequest::from(credential)).await?;
        if !finish.success {
            return Err(PasskeyError::FinishFailed(finish.message_or(FINISH_FALLBACK)));
        }

        Ok(())
    }
}

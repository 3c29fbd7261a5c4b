use gateway_core::ApiError;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{api, WebAuthnClient};

const LIST_FALLBACK: &str = "Failed to list passkey credentials";
const DELETE_FALLBACK: &str = "Failed to delete the passkey credential";

/// One registered passkey, as listed by the gateway. Field names follow the
/// gateway's own row format, not the WebAuthn wire casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasskeyCredentialView {
    /// Row id, used for deletion.
    pub id: i32,
    /// The credential id as base64url text.
    pub credential_id: String,
    /// Human-readable name chosen at registration, if any.
    pub alias: Option<String>,
    /// Registration time as unix seconds.
    pub created_time: i64,
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ListCredentialsError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Rejected(String),
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DeleteCredentialError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Rejected(String),
}

impl WebAuthnClient {
    /// Lists the passkeys registered to the current session's user.
    ///
    /// Mirrors the admin console's settings page: any failure degrades to an
    /// empty list (with a warning log) so the page renders without
    /// credentials instead of erroring. Use
    /// [`WebAuthnClient::try_list_credentials`] when "none registered" and
    /// "listing failed" must be distinguished.
    pub async fn list_credentials(&self) -> Vec<PasskeyCredentialView> {
        match self.try_list_credentials().await {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("Failed to list passkey credentials: {e}");
                Vec::new()
            }
        }
    }

    /// Lists the passkeys registered to the current session's user,
    /// surfacing failures.
    pub async fn try_list_credentials(
        &self,
    ) -> Result<Vec<PasskeyCredentialView>, ListCredentialsError> {
        let config = self.client.internal.api_configuration();

        let response = api::list_credentials(&config).await?;
        if !response.success {
            return Err(ListCredentialsError::Rejected(
                response.message_or(LIST_FALLBACK),
            ));
        }

        Ok(response.data.unwrap_or_default())
    }

    /// Deletes the passkey with the given row id.
    ///
    /// The gateway rejects ids that do not belong to the current user with
    /// the same message as absent ids.
    pub async fn delete_credential(&self, id: i32) -> Result<(), DeleteCredentialError> {
        let config = self.client.internal.api_configuration();

        let response = api::delete_credential(&config, id).await?;
        if !response.success {
            return Err(DeleteCredentialError::Rejected(
                response.message_or(DELETE_FALLBACK),
            ));
        }

        Ok(())
    }
}

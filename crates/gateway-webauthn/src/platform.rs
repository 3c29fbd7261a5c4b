//! The seam between the ceremonies and the host's credential machinery.
//!
//! The gateway's web console hands its options to `navigator.credentials`;
//! an embedding application hands them to whatever platform passkey API it
//! has. [`PlatformAuthenticator`] is that injection point. All byte fields
//! on this boundary are raw bytes, already decoded from the gateway's
//! base64url text.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{
    AuthenticatorSelectionCriteria, PublicKeyCredentialParameters, PublicKeyCredentialRpEntity,
};

/// Failure raised by a platform authenticator, mirroring the WebAuthn
/// exception names a browser credential API produces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformAuthenticatorError {
    /// The request was denied, cancelled by policy, or timed out
    /// (`NotAllowedError`).
    #[error("The request is not allowed")]
    NotAllowed,
    /// The device cannot perform the requested operation
    /// (`NotSupportedError`).
    #[error("The operation is not supported")]
    NotSupported,
    /// The authenticator rejected the request in its current state, such as
    /// the credential already existing (`InvalidStateError`).
    #[error("The authenticator is in an invalid state")]
    InvalidState,
    /// The operation was blocked for security reasons (`SecurityError`).
    #[error("The operation is insecure")]
    Security,
    /// Any other platform failure, with its message.
    #[error("{0}")]
    Unknown(String),
}

/// User account block of a creation request, with the id decoded to bytes.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

/// Reference to an existing credential, with the id decoded to bytes.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialDescriptor {
    pub ty: String,
    pub id: Vec<u8>,
    pub transports: Option<Vec<String>>,
}

/// Decoded options for the platform "create credential" (attestation) call.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialCreationRequest {
    pub challenge: Vec<u8>,
    pub rp: PublicKeyCredentialRpEntity,
    pub user: UserEntity,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    /// Credentials the authenticator must refuse to re-register. Empty when
    /// the gateway sent none.
    pub exclude_credentials: Vec<CredentialDescriptor>,
    pub timeout: Option<u64>,
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    pub attestation: Option<String>,
    /// Client extension inputs, relayed without interpretation.
    pub extensions: Option<serde_json::Value>,
}

/// Decoded options for the platform "get credential" (assertion) call.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialAssertionRequest {
    pub challenge: Vec<u8>,
    pub rp_id: Option<String>,
    /// Credentials the gateway will accept an assertion from. Empty when the
    /// gateway sent none.
    pub allow_credentials: Vec<CredentialDescriptor>,
    pub timeout: Option<u64>,
    pub user_verification: Option<String>,
    /// Client extension inputs, relayed without interpretation.
    pub extensions: Option<serde_json::Value>,
}

/// A newly created credential, as returned by the platform. The blobs are
/// opaque to this SDK and are relayed to the gateway untouched.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPublicKeyCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub ty: String,
    pub attestation_object: Vec<u8>,
    pub client_data_json: Vec<u8>,
}

/// An assertion over an existing credential, as returned by the platform.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertedPublicKeyCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub ty: String,
    pub authenticator_data: Vec<u8>,
    pub client_data_json: Vec<u8>,
    pub signature: Vec<u8>,
    pub user_handle: Option<Vec<u8>>,
}

/// Host-provided access to the platform credential API.
///
/// Both credential calls may suspend indefinitely while the platform waits
/// for user interaction (biometric prompt, security-key tap). `Ok(None)`
/// means the user dismissed the prompt without the platform raising an
/// error; the ceremonies treat it as a cancellation.
#[async_trait]
pub trait PlatformAuthenticator: Send + Sync {
    /// Whether passkeys are available at all in this environment.
    async fn is_supported(&self) -> bool;

    /// Create a new passkey.
    async fn create_credential(
        &self,
        request: CredentialCreationRequest,
    ) -> Result<Option<CreatedPublicKeyCredential>, PlatformAuthenticatorError>;

    /// Assert an existing passkey.
    async fn get_credential(
        &self,
        request: CredentialAssertionRequest,
    ) -> Result<Option<AssertedPublicKeyCredential>, PlatformAuthenticatorError>;
}

//! Wire types for the gateway's WebAuthn endpoints.
//!
//! The begin endpoints reply with the options object go-webauthn produced,
//! where every byte field (challenge, user id, credential ids) is base64url
//! text. The `TryFrom` conversions decode those fields into the platform
//! request types; everything else is relayed as received.

use gateway_encoding::{B64Url, NotB64UrlEncoded};
use serde::{Deserialize, Serialize};

use crate::platform::{
    AssertedPublicKeyCredential, CreatedPublicKeyCredential, CredentialAssertionRequest,
    CredentialCreationRequest, CredentialDescriptor, UserEntity,
};

/// Relying party block of the creation options.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialRpEntity {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// User account block of the creation options, with the id still encoded.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialUserEntity {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

/// A credential type/algorithm pair the relying party accepts.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyCredentialParameters {
    #[serde(rename = "type")]
    pub ty: String,
    pub alg: i64,
}

/// Reference to an existing credential, with the id still encoded.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyCredentialDescriptor {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
}

/// Authenticator requirements chosen by the gateway.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelectionCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_resident_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
}

/// Creation options as sent by the registration begin endpoint.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialCreationOptions {
    pub rp: PublicKeyCredentialRpEntity,
    pub user: PublicKeyCredentialUserEntity,
    pub challenge: String,
    #[serde(default)]
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    pub timeout: Option<u64>,
    pub exclude_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    pub attestation: Option<String>,
    pub extensions: Option<serde_json::Value>,
}

/// Request options as sent by the login begin endpoint.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialRequestOptions {
    pub challenge: String,
    pub timeout: Option<u64>,
    pub rp_id: Option<String>,
    pub allow_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    pub user_verification: Option<String>,
    pub extensions: Option<serde_json::Value>,
}

/// Payload of the registration begin envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CredentialCreationData {
    pub public_key: Option<PublicKeyCredentialCreationOptions>,
}

/// Payload of the login begin envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CredentialAssertionData {
    pub public_key: Option<PublicKeyCredentialRequestOptions>,
}

impl TryFrom<PublicKeyCredentialDescriptor> for CredentialDescriptor {
    type Error = NotB64UrlEncoded;

    fn try_from(value: PublicKeyCredentialDescriptor) -> Result<Self, Self::Error> {
        Ok(Self {
            ty: value.ty,
            id: B64Url::try_from(value.id.as_str())?.into_bytes(),
            transports: value.transports,
        })
    }
}

impl TryFrom<PublicKeyCredentialCreationOptions> for CredentialCreationRequest {
    type Error = NotB64UrlEncoded;

    fn try_from(value: PublicKeyCredentialCreationOptions) -> Result<Self, Self::Error> {
        Ok(Self {
            challenge: B64Url::try_from(value.challenge.as_str())?.into_bytes(),
            rp: value.rp,
            user: UserEntity {
                id: B64Url::try_from(value.user.id.as_str())?.into_bytes(),
                name: value.user.name,
                display_name: value.user.display_name,
            },
            pub_key_cred_params: value.pub_key_cred_params,
            exclude_credentials: value
                .exclude_credentials
                .unwrap_or_default()
                .into_iter()
                .map(CredentialDescriptor::try_from)
                .collect::<Result<_, _>>()?,
            timeout: value.timeout,
            authenticator_selection: value.authenticator_selection,
            attestation: value.attestation,
            extensions: value.extensions,
        })
    }
}

impl TryFrom<PublicKeyCredentialRequestOptions> for CredentialAssertionRequest {
    type Error = NotB64UrlEncoded;

    fn try_from(value: PublicKeyCredentialRequestOptions) -> Result<Self, Self::Error> {
        Ok(Self {
            challenge: B64Url::try_from(value.challenge.as_str())?.into_bytes(),
            rp_id: value.rp_id,
            allow_credentials: value
                .allow_credentials
                .unwrap_or_default()
                .into_iter()
                .map(CredentialDescriptor::try_from)
                .collect::<Result<_, _>>()?,
            timeout: value.timeout,
            user_verification: value.user_verification,
            extensions: value.extensions,
        })
    }
}

/// Attestation payload posted to the registration finish endpoint.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFinishRequest {
    pub id: String,
    pub raw_id: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub response: AuthenticatorAttestationResponse,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorAttestationResponse {
    pub attestation_object: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
}

/// Assertion payload posted to the login finish endpoint.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFinishRequest {
    pub id: String,
    pub raw_id: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub response: AuthenticatorAssertionResponse,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorAssertionResponse {
    pub authenticator_data: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_handle: Option<String>,
}

impl From<CreatedPublicKeyCredential> for RegistrationFinishRequest {
    fn from(value: CreatedPublicKeyCredential) -> Self {
        Self {
            id: value.id,
            raw_id: B64Url::from(value.raw_id).to_string(),
            ty: value.ty,
            response: AuthenticatorAttestationResponse {
                attestation_object: B64Url::from(value.attestation_object).to_string(),
                client_data_json: B64Url::from(value.client_data_json).to_string(),
            },
        }
    }
}

impl From<AssertedPublicKeyCredential> for LoginFinishRequest {
    fn from(value: AssertedPublicKeyCredential) -> Self {
        Self {
            id: value.id,
            raw_id: B64Url::from(value.raw_id).to_string(),
            ty: value.ty,
            response: AuthenticatorAssertionResponse {
                authenticator_data: B64Url::from(value.authenticator_data).to_string(),
                client_data_json: B64Url::from(value.client_data_json).to_string(),
                signature: B64Url::from(value.signature).to_string(),
                user_handle: value.user_handle.map(|h| B64Url::from(h).to_string()),
            },
        }
    }
}

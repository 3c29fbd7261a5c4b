#![doc = include_str!("../README.md")]

mod client_webauthn;
mod credentials;
mod error;
mod login;
mod platform;
mod registration;
mod types;

pub(crate) mod api;

pub use client_webauthn::{WebAuthnClient, WebAuthnClientExt};
pub use credentials::{DeleteCredentialError, ListCredentialsError, PasskeyCredentialView};
pub use error::PasskeyError;
pub use login::PasskeyLoginRequest;
pub use platform::{
    AssertedPublicKeyCredential, CreatedPublicKeyCredential, CredentialAssertionRequest,
    CredentialCreationRequest, CredentialDescriptor, PlatformAuthenticator,
    PlatformAuthenticatorError, UserEntity,
};
pub use registration::PasskeyRegistrationRequest;
pub use types::{
    AuthenticatorAssertionResponse, AuthenticatorAttestationResponse,
    AuthenticatorSelectionCriteria, LoginFinishRequest, PublicKeyCredentialCreationOptions,
    PublicKeyCredentialDescriptor, PublicKeyCredentialParameters,
    PublicKeyCredentialRequestOptions, PublicKeyCredentialRpEntity,
    PublicKeyCredentialUserEntity, RegistrationFinishRequest,
};

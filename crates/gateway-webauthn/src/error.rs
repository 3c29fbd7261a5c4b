use gateway_core::ApiError;
use gateway_encoding::NotB64UrlEncoded;
use thiserror::Error;

use crate::platform::PlatformAuthenticatorError;

/// Failure modes of the passkey ceremonies.
///
/// `BeginFailed` and `FinishFailed` carry the server's message verbatim when
/// it sent one, and an operation-specific fallback otherwise, so the value's
/// `Display` output is always suitable for showing to a user.
#[derive(Debug, Error)]
pub enum PasskeyError {
    /// Passkeys are unavailable in this environment; reported before any
    /// network traffic.
    #[error("Passkeys are not supported in this environment")]
    Unsupported,

    /// A required input was missing or malformed.
    #[error("{0}")]
    Validation(&'static str),

    /// The server rejected the begin step of the ceremony.
    #[error("{0}")]
    BeginFailed(String),

    /// The server rejected the finish step of the ceremony.
    #[error("{0}")]
    FinishFailed(String),

    /// The user dismissed the platform prompt without the platform raising
    /// an explicit error.
    #[error("The passkey prompt was dismissed")]
    Cancelled,

    /// The platform denied the request or it timed out.
    #[error("The request was denied or timed out")]
    PlatformDenied,

    /// The device does not support the requested passkey operation.
    #[error("This device does not support the requested operation")]
    PlatformUnsupported,

    /// The authenticator rejected the request in its current state, for
    /// example because the passkey is already registered there.
    #[error("The authenticator is in an invalid state")]
    PlatformInvalidState,

    /// The platform blocked the operation for security reasons.
    #[error("The operation was blocked for security reasons")]
    PlatformSecurity,

    /// A base64url field in the server's options could not be decoded.
    #[error(transparent)]
    Decode(#[from] NotB64UrlEncoded),

    /// Transport, serialization, or authentication failure talking to the
    /// gateway.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Unrecognized platform failure.
    #[error("{operation} failed: {message}")]
    Unknown {
        /// The ceremony that was running when the platform failed.
        operation: &'static str,
        /// The platform's own description of the failure.
        message: String,
    },
}

impl PasskeyError {
    /// Maps a platform authenticator failure during `operation` onto the
    /// ceremony error kinds.
    pub(crate) fn from_platform(
        operation: &'static str,
        error: PlatformAuthenticatorError,
    ) -> Self {
        match error {
            PlatformAuthenticatorError::NotAllowed => Self::PlatformDenied,
            PlatformAuthenticatorError::NotSupported => Self::PlatformUnsupported,
            PlatformAuthenticatorError::InvalidState => Self::PlatformInvalidState,
            PlatformAuthenticatorError::Security => Self::PlatformSecurity,
            PlatformAuthenticatorError::Unknown(message) => Self::Unknown { operation, message },
        }
    }
}

use gateway_core::Client;

/// Subclient for the gateway's passkey operations.
#[derive(Clone)]
pub struct WebAuthnClient {
    pub(crate) client: Client,
}

impl WebAuthnClient {
    /// Constructs a new `WebAuthnClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Extension trait for `Client` to provide access to the `WebAuthnClient`.
pub trait WebAuthnClientExt {
    /// Creates a new `WebAuthnClient` instance.
    fn webauthn(&self) -> WebAuthnClient;
}

impl WebAuthnClientExt for Client {
    fn webauthn(&self) -> WebAuthnClient {
        WebAuthnClient::new(self.clone())
    }
}

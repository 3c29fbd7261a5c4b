use std::sync::{Arc, RwLock};

use super::internal::InternalClient;
use crate::client::{client_settings::ClientSettings, internal::ApiConfiguration};

/// The main struct to interact with the One Gateway SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. For this to happen, any mutable state needs to be behind
    // an Arc, ideally as part of the existing [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new gateway client, with `None` using the default [`ClientSettings`].
    pub fn new(settings: Option<ClientSettings>) -> Self {
        let settings = settings.unwrap_or_default();

        // The gateway keeps in-flight WebAuthn ceremony state in a server-side
        // session identified by a cookie, so every request from one client must
        // share a cookie jar.
        let http_client = reqwest::Client::builder()
            .user_agent(&settings.user_agent)
            .cookie_store(true)
            .build()
            .expect("HTTP Client build should not fail");

        let configuration = ApiConfiguration {
            base_path: settings.api_url,
            user_agent: settings.user_agent,
            client: http_client,
            session_token: None,
        };

        Self {
            internal: Arc::new(InternalClient {
                __api_configuration: RwLock::new(Arc::new(configuration)),
            }),
        }
    }
}

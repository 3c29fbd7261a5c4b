use std::sync::{Arc, RwLock};

/// Connection details for one gateway deployment, shared by every endpoint
/// call made through the owning client.
#[allow(missing_docs)]
#[derive(Clone)]
pub struct ApiConfiguration {
    pub base_path: String,
    pub user_agent: String,
    pub client: reqwest::Client,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for ApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfiguration")
            .field("base_path", &self.base_path)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ApiConfiguration {
    fn set_session_token(self: &mut Arc<Self>, token: Option<String>) {
        let mut config = (**self).clone();
        config.session_token = token;
        *self = Arc::new(config);
    }
}

#[allow(missing_docs)]
#[derive(Debug)]
pub struct InternalClient {
    /// Use [`InternalClient::api_configuration`] to access this.
    #[doc(hidden)]
    pub(crate) __api_configuration: RwLock<Arc<ApiConfiguration>>,
}

impl InternalClient {
    /// Returns a snapshot of the current API configuration.
    pub fn api_configuration(&self) -> Arc<ApiConfiguration> {
        self.__api_configuration
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    /// Attaches a session bearer token to all subsequent authenticated calls.
    pub fn set_session_token(&self, token: String) {
        self.__api_configuration
            .write()
            .expect("RwLock is not poisoned")
            .set_session_token(Some(token));
    }

    /// Drops the session token, for example after the server reported the
    /// session as expired.
    pub fn clear_session_token(&self) {
        self.__api_configuration
            .write()
            .expect("RwLock is not poisoned")
            .set_session_token(None);
    }
}

#[cfg(test)]
mod tests {
    use crate::Client;

    #[test]
    fn session_token_swaps_are_visible_to_new_snapshots() {
        let client = Client::new(None);

        let before = client.internal.api_configuration();
        assert_eq!(before.session_token, None);

        client.internal.set_session_token("tok_123".to_owned());
        let after = client.internal.api_configuration();
        assert_eq!(after.session_token.as_deref(), Some("tok_123"));
        // Snapshots taken earlier are unaffected.
        assert_eq!(before.session_token, None);

        client.internal.clear_session_token();
        assert_eq!(client.internal.api_configuration().session_token, None);
    }

    #[test]
    fn clones_share_state() {
        let client = Client::new(None);
        let clone = client.clone();

        client.internal.set_session_token("tok_shared".to_owned());
        assert_eq!(
            clone.internal.api_configuration().session_token.as_deref(),
            Some("tok_shared")
        );
    }
}

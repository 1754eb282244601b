use crate::config::ClientConfig;

/// Role name of regular signed-in users.
pub const USER_ROLE: &str = "USER";

/// Identity of the current viewer.
pub trait AuthService {
    fn username(&self) -> Option<String>;
    fn role(&self) -> Option<String>;
    fn token(&self) -> Option<String>;
}

/// Reads the session stored in the browser's local storage by the login flow.
pub struct BrowserAuthService {
    config: ClientConfig,
}

impl BrowserAuthService {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[cfg(target_arch = "wasm32")]
    fn read(&self, key: &str) -> Option<String> {
        let storage = gloo_utils::window().local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten().filter(|value| !value.is_empty())
    }

    // No browser storage while rendering on the server.
    #[cfg(not(target_arch = "wasm32"))]
    fn read(&self, _key: &str) -> Option<String> {
        None
    }
}

impl AuthService for BrowserAuthService {
    fn username(&self) -> Option<String> {
        self.read(&self.config.username_key)
    }

    fn role(&self) -> Option<String> {
        self.read(&self.config.role_key)
    }

    fn token(&self) -> Option<String> {
        self.read(&self.config.token_key)
    }
}

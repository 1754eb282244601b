/// Client-side settings for talking to the opinion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub username_key: String,
    pub role_key: String,
    pub token_key: String,
}

impl ClientConfig {
    /// `OPINIONS_API_URL` is read at build time since the bundle has no
    /// process environment in the browser.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("OPINIONS_API_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            username_key: "username".to_string(),
            role_key: "role".to_string(),
            token_key: "token".to_string(),
        }
    }
}

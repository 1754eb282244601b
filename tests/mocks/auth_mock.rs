use opinion_collector::auth::AuthService;

/// Fixed viewer identity.
#[derive(Default)]
pub struct StaticAuth {
    pub username: Option<String>,
    pub role: Option<String>,
}

impl StaticAuth {
    pub fn user(username: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            role: Some("USER".to_string()),
        }
    }

    pub fn with_role(username: &str, role: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            role: Some(role.to_string()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl AuthService for StaticAuth {
    fn username(&self) -> Option<String> {
        self.username.clone()
    }

    fn role(&self) -> Option<String> {
        self.role.clone()
    }

    fn token(&self) -> Option<String> {
        None
    }
}

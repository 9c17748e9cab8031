use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Seed user id 1 at startup so the onboarding flow has an owner to
    /// attach brands to.
    pub seed_demo_user: bool,
    /// Niche used by digest generation when the request omits one.
    pub default_niche: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            log_level: "info".to_string(),
            seed_demo_user: true,
            default_niche: crate::mock::DEFAULT_NICHE.to_string(),
        }
    }
}

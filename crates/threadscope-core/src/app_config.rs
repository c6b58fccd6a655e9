use std::net::SocketAddr;
use std::path::PathBuf;

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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// YAML vocabulary override; `None` means the built-in vocabulary.
    pub vocabulary_path: Option<PathBuf>,
    /// Used by the analyze endpoint when a request carries no description.
    pub default_company_description: Option<String>,
    pub min_relevance: f64,
    pub min_trend_posts: usize,
    pub max_batch_size: usize,
    pub rate_limit_per_minute: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("vocabulary_path", &self.vocabulary_path)
            .field(
                "default_company_description",
                &self
                    .default_company_description
                    .as_ref()
                    .map(|_| "[redacted]"),
            )
            .field("min_relevance", &self.min_relevance)
            .field("min_trend_posts", &self.min_trend_posts)
            .field("max_batch_size", &self.max_batch_size)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}

//! Picks the recommendation API base URL for the hosting environment.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEnvironment {
    Development,
    Production,
}

impl ApiEnvironment {
    /// Local hosts (and an empty host, e.g. a page opened from disk) are development.
    #[must_use]
    pub fn detect(host: &str) -> Self {
        match host.trim() {
            "" | "localhost" | "127.0.0.1" => Self::Development,
            _ => Self::Production,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base URLs per environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApiUrls {
    pub development: String,
    pub production: String,
}

impl Default for ApiUrls {
    fn default() -> Self {
        Self {
            development: "http://localhost:5000".to_string(),
            production: "https://vibe-coding-production-cdb4.up.railway.app".to_string(),
        }
    }
}

impl ApiUrls {
    #[must_use]
    pub fn base_for(&self, env: ApiEnvironment) -> &str {
        let base = match env {
            ApiEnvironment::Development => &self.development,
            ApiEnvironment::Production => &self.production,
        };
        base.trim_end_matches('/')
    }
}

/// Fully qualified endpoint URLs of the recommendation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub environment: ApiEnvironment,
    pub base_url: String,
    pub options: String,
    pub generate_question: String,
    pub recommend: String,
    pub health: String,
}

impl ApiEndpoints {
    #[must_use]
    pub fn for_host(urls: &ApiUrls, host: &str) -> Self {
        let environment = ApiEnvironment::detect(host);
        let base = urls.base_for(environment);
        Self {
            environment,
            base_url: base.to_string(),
            options: format!("{base}/api/options"),
            generate_question: format!("{base}/api/generate-question"),
            recommend: format!("{base}/api/recommend"),
            health: format!("{base}/api/health"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_are_development() {
        assert_eq!(ApiEnvironment::detect("localhost"), ApiEnvironment::Development);
        assert_eq!(ApiEnvironment::detect("127.0.0.1"), ApiEnvironment::Development);
        assert_eq!(ApiEnvironment::detect(""), ApiEnvironment::Development);
        assert_eq!(
            ApiEnvironment::detect("swipe.example.com"),
            ApiEnvironment::Production
        );
    }

    #[test]
    fn endpoints_join_base_without_double_slash() {
        let urls = ApiUrls {
            development: "http://localhost:5000/".into(),
            production: "https://api.example.com".into(),
        };
        let dev = ApiEndpoints::for_host(&urls, "localhost");
        assert_eq!(dev.base_url, "http://localhost:5000");
        assert_eq!(dev.recommend, "http://localhost:5000/api/recommend");

        let prod = ApiEndpoints::for_host(&urls, "app.example.com");
        assert_eq!(prod.environment, ApiEnvironment::Production);
        assert_eq!(prod.health, "https://api.example.com/api/health");
        assert_eq!(
            prod.generate_question,
            "https://api.example.com/api/generate-question"
        );
        assert_eq!(prod.options, "https://api.example.com/api/options");
    }
}

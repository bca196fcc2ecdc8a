use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub data_file: String,
    pub allowed_origins: Vec<String>,
    pub static_dir: String,
    pub environment: String,
    pub log_requests: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let server_host = var("SERVER_HOST", "0.0.0.0");
        let server_port = var("SERVER_PORT", "3000")
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let data_file = var("DATA_FILE", "./data/store.json");

        let allowed_origins = var("ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let static_dir = var("STATIC_DIR", "./static");
        let environment = var("ENVIRONMENT", "development");

        let log_requests = var("LOG_REQUESTS", "false")
            .parse()
            .map_err(|_| "Invalid LOG_REQUESTS (expected true or false)")?;

        Ok(Config {
            server_host,
            server_port,
            data_file,
            allowed_origins,
            static_dir,
            environment,
            log_requests,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// True when CORS should accept requests from any origin
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Session cookies are only marked secure outside development
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.data_file, "./data/store.json");
        assert!(config.allows_any_origin());
        assert!(!config.log_requests);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "8081"),
            ("ALLOWED_ORIGINS", "http://localhost:5173, http://shop.local"),
            ("LOG_REQUESTS", "true"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 8081);
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:5173", "http://shop.local"]
        );
        assert!(!config.allows_any_origin());
        assert!(config.log_requests);
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[("SERVER_PORT", "not-a-port")]));
        assert_eq!(result.unwrap_err(), "Invalid SERVER_PORT");
    }
}

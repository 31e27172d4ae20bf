use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;

    /// Load `.env.{RUST_ENV}` (falling back to `.env`) into the process env.
    pub fn load_env_files() {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    /// Read `HOST` and `PORT`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => Self::parse_port(&raw)?,
            Err(_) => Self::DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    fn parse_port(raw: &str) -> Result<u16, String> {
        raw.trim()
            .parse::<u16>()
            .map_err(|_| format!("Invalid PORT value: {raw}"))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(ServerConfig::parse_port(" 8081 "), Ok(8081));
        assert!(ServerConfig::parse_port("http").is_err());
        assert!(ServerConfig::parse_port("70000").is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}

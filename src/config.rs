use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5050;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Bind address: {}", config.bind_addr());

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("HOST must be a valid IP address, got '{}'", host))?;

        let port = match lookup("PORT").filter(|s| !s.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or_else(|| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:5050");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "0.0.0.0"), ("PORT", "8080")]))
            .unwrap();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "  "), ("PORT", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, Config::default().host);
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "abc")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PORT", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_invalid_host_rejected() {
        let err = Config::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("HOST"));
    }
}

/// Application configuration module
use crate::catalog;
use std::env;
use std::str::FromStr;

pub const DEFAULT_BODIES_API_URL: &str = "https://api.le-systeme-solaire.net/rest/bodies";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bodies_api_url: String,
    pub bind_addr: String,
    pub catalog_limit: usize,
    pub orbit: OrbitSettings,
    pub http_timeout_seconds: u64,
    pub catalog_refresh_seconds: u64,
}

/// Detail-chart sampling knobs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSettings {
    pub sample_count: usize,
    /// Upper bound of the per-sample temperature jitter; 0 disables it.
    pub jitter_kelvin: f64,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            sample_count: 12,
            jitter_kelvin: 10.0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bodies_api_url: DEFAULT_BODIES_API_URL.to_string(),
            bind_addr: "0.0.0.0:3000".to_string(),
            catalog_limit: catalog::DEFAULT_LIMIT,
            orbit: OrbitSettings::default(),
            http_timeout_seconds: 30,
            catalog_refresh_seconds: 3600,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let bodies_api_url = env::var("BODIES_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.bodies_api_url);

        let bind_addr = env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let orbit = OrbitSettings {
            sample_count: env_or("ORBIT_SAMPLE_COUNT", defaults.orbit.sample_count),
            jitter_kelvin: env_or("TEMPERATURE_JITTER_KELVIN", defaults.orbit.jitter_kelvin),
        };
        if orbit.jitter_kelvin.is_nan() || orbit.jitter_kelvin < 0.0 {
            anyhow::bail!("TEMPERATURE_JITTER_KELVIN must be a non-negative number");
        }

        Ok(Self {
            bodies_api_url,
            bind_addr,
            catalog_limit: env_or("CATALOG_LIMIT", defaults.catalog_limit),
            orbit,
            http_timeout_seconds: env_or("HTTP_TIMEOUT_SECONDS", defaults.http_timeout_seconds),
            catalog_refresh_seconds: env_or(
                "CATALOG_REFRESH_SECONDS",
                defaults.catalog_refresh_seconds,
            ),
        })
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok(), default)
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_uses_value() {
        assert_eq!(parse_or(Some(" 20 ".to_string()), 15usize), 20);
        assert_eq!(parse_or(Some("2.5".to_string()), 10.0f64), 2.5);
    }

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or(None, 15usize), 15);
        assert_eq!(parse_or(Some("lots".to_string()), 12usize), 12);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_limit, 15);
        assert_eq!(config.orbit.sample_count, 12);
        assert_eq!(config.orbit.jitter_kelvin, 10.0);
        assert_eq!(config.bodies_api_url, DEFAULT_BODIES_API_URL);
    }
}

//! Process configuration read from the environment.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_addr: String,
    pub jwt_secret: String,
    /// Cookie consulted for the session token when no bearer header is sent.
    pub session_cookie: String,
    pub preserve_return_to: bool,
    /// `None` keeps cached tenant configuration until explicitly invalidated.
    pub config_cache_ttl: Option<Duration>,
}

impl AppConfig {
    /// Defaults for everything except the signing secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            http_addr: "0.0.0.0:8080".to_string(),
            jwt_secret: jwt_secret.into(),
            session_cookie: "session".to_string(),
            preserve_return_to: false,
            config_cache_ttl: Some(Duration::from_secs(300)),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("ERPGATE_JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::Missing("ERPGATE_JWT_SECRET".to_string()))?;

        let mut config = Self::new(jwt_secret);

        if let Some(addr) = lookup("ERPGATE_HTTP_ADDR") {
            config.http_addr = addr;
        }
        if let Some(cookie) = lookup("ERPGATE_SESSION_COOKIE") {
            config.session_cookie = cookie;
        }
        if let Some(raw) = lookup("ERPGATE_PRESERVE_RETURN_TO") {
            config.preserve_return_to = parse_bool("ERPGATE_PRESERVE_RETURN_TO", &raw)?;
        }
        if let Some(raw) = lookup("ERPGATE_CONFIG_CACHE_TTL_SECONDS") {
            let secs = raw
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("ERPGATE_CONFIG_CACHE_TTL_SECONDS".to_string(), raw.clone()))?;
            config.config_cache_ttl = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(name.to_string(), raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn secret_is_required() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("ERPGATE_JWT_SECRET".to_string()))
        );
    }

    #[test]
    fn defaults_apply() {
        let config = AppConfig::from_lookup(lookup(&[("ERPGATE_JWT_SECRET", "s")])).unwrap();
        assert_eq!(config, AppConfig::new("s"));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ERPGATE_JWT_SECRET", "s"),
            ("ERPGATE_HTTP_ADDR", "127.0.0.1:9000"),
            ("ERPGATE_SESSION_COOKIE", "sid"),
            ("ERPGATE_PRESERVE_RETURN_TO", "yes"),
            ("ERPGATE_CONFIG_CACHE_TTL_SECONDS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.http_addr, "127.0.0.1:9000");
        assert_eq!(config.session_cookie, "sid");
        assert!(config.preserve_return_to);
        assert_eq!(config.config_cache_ttl, None);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[
                ("ERPGATE_JWT_SECRET", "s"),
                ("ERPGATE_PRESERVE_RETURN_TO", "maybe"),
            ])),
            Err(ConfigError::Invalid(
                "ERPGATE_PRESERVE_RETURN_TO".to_string(),
                "maybe".to_string()
            ))
        );
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[
                ("ERPGATE_JWT_SECRET", "s"),
                ("ERPGATE_CONFIG_CACHE_TTL_SECONDS", "-5"),
            ])),
            Err(ConfigError::Invalid(_, _))
        ));
    }
}

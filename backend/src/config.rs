use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_PRIZES: &[&str] = &["Free Coffee", "Gift Card", "Company T-Shirt", "Sticker Pack"];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub prizes: Vec<String>,
}

impl ServerConfig {
    /// Reads `BIND_ADDR`, `STATIC_DIR` and `PRIZES`. Call after `.env` is loaded.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("BIND_ADDR: {}", e)))?;

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let prizes = match lookup("PRIZES") {
            Some(raw) => parse_prizes(&raw),
            None => DEFAULT_PRIZES.iter().map(|p| p.to_string()).collect(),
        };

        Ok(Self {
            bind_addr,
            static_dir,
            prizes,
        })
    }
}

/// Comma separated, blanks dropped.
pub fn parse_prizes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.prizes.len(), DEFAULT_PRIZES.len());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("STATIC_DIR", "frontend/dist"),
            ("PRIZES", "Mug, ,Hoodie,"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.prizes, vec!["Mug".to_string(), "Hoodie".to_string()]);
    }

    #[test]
    fn test_bad_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_prize_list_is_allowed() {
        let config = ServerConfig::from_lookup(lookup(&[("PRIZES", " , ")])).unwrap();
        assert!(config.prizes.is_empty());
    }
}

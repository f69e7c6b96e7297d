//! Service configuration loaded from environment variables.
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the catalog service binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub seed: bool,
    /// `None` leaves generate counts unbounded.
    pub max_generate: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            static_dir: PathBuf::from("Frontend"),
            seed: true,
            max_generate: None,
        }
    }
}

impl CatalogConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CATALOG_BIND_ADDR` - Listen address (default: 127.0.0.1:5000)
    /// - `CATALOG_STATIC_DIR` - Directory holding the browser UI (default: Frontend)
    /// - `CATALOG_SEED` - Seed the sample catalog on start-up (default: true)
    /// - `CATALOG_MAX_GENERATE` - Largest accepted generate count (default: unlimited)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("CATALOG_BIND_ADDR").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr.trim().to_string();
        }

        if let Some(dir) = lookup("CATALOG_STATIC_DIR").filter(|v| !v.trim().is_empty()) {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(seed) = lookup("CATALOG_SEED").as_deref().and_then(parse_bool) {
            config.seed = seed;
        }

        if let Some(max) = parse_value::<usize>(lookup("CATALOG_MAX_GENERATE")) {
            config.max_generate = Some(max.max(1));
        }

        config
    }
}

fn parse_value<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

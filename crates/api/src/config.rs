use std::path::PathBuf;

use tristore_core::types::{RecordId, MAX_RECORD_ID};
use tristore_store::IdFloors;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root holding the front-end bundles (`website_A`, `website_B`,
    /// `website_C`, `common`). Static serving is off when unset.
    pub static_dir: Option<PathBuf>,
    /// Lower bounds for the series and character id counters.
    pub id_floors: IdFloors,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `STATIC_DIR`           | unset                   |
    /// | `SERIES_ID_FLOOR`      | unset                   |
    /// | `CHARACTER_ID_FLOOR`   | unset                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let id_floors = IdFloors {
            series: optional_id("SERIES_ID_FLOOR"),
            character: optional_id("CHARACTER_ID_FLOOR"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            id_floors,
        }
    }
}

/// Read an optional id floor from the environment. Panics on garbage so a
/// typo fails at startup instead of silently using the derived counter.
fn optional_id(var: &str) -> Option<RecordId> {
    let raw = std::env::var(var).ok()?;
    Some(parse_id_floor(var, &raw))
}

fn parse_id_floor(var: &str, raw: &str) -> RecordId {
    let value: RecordId = raw
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("{var} must be a valid integer"));
    assert!(
        (1..=MAX_RECORD_ID).contains(&value),
        "{var} must be between 1 and {MAX_RECORD_ID}"
    );
    value
}

//! Host configuration parsed from environment variables.
//!
//! Leptos build settings (output name, default site root) are read by leptos
//! itself from `[package.metadata.leptos]` and `LEPTOS_*` variables. The
//! listen port and an optional site root override are ours.

use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built `pkg/` bundle; `None` uses leptos' own.
    pub site_root: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, site_root: None }
    }
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SITE_ROOT`: overrides the leptos site root for the `/pkg` bundle
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidPort`] when `PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = parse_site_root(std::env::var("SITE_ROOT").ok().as_deref());
        Ok(Self { port, site_root })
    }

    /// Socket address to bind on all interfaces.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ServerError::InvalidPort(value.to_owned())),
    }
}

fn parse_site_root(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim).filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Load `.env` if present. A missing file is normal; anything else is logged.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

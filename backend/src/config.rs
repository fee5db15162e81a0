//! Server configuration and environment variable handling.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

/// Dashboard server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Interface the server binds to
    pub host: String,
    /// Port the server listens on
    pub port: u16,
    /// Path of the launch table loaded at startup
    pub data_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DashboardConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DASHBOARD_HOST` (optional, default: 127.0.0.1): Bind address
    /// - `DASHBOARD_PORT` (optional, default: 8050): Listen port
    /// - `LAUNCH_DATA_PATH` (optional, default: spacex_launch_dash.csv): Launch table
    ///
    /// # Errors
    /// Returns an error if `DASHBOARD_PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DASHBOARD_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("DASHBOARD_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| format!("DASHBOARD_PORT must be a valid port number, got '{}'", raw))?,
            None => DEFAULT_PORT,
        };
        let data_path = lookup("LAUNCH_DATA_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Ok(Self {
            host,
            port,
            data_path,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}

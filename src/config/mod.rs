//! Server configuration loading.
//!
//! This module provides the [`ServerConfig`] type, loaded from a YAML
//! file. Only the serving socket is configurable; the payroll validation
//! bounds are fixed by the engine.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ServerConfig;
//!
//! let config = ServerConfig::load("./config/server.yaml").unwrap();
//! println!("Binding {}", config.bind_address());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind, e.g. `127.0.0.1`.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g. `./config/server.yaml`)
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if the file is
    /// missing (`ConfigNotFound`) or not valid YAML (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|err| PayrollError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Returns the `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

//! Server connection settings for the drone-sync CLI.
//!
//! The Drone server address and access token are read from the environment:
//!
//! - `DRONE_SERVER`: base address of the server, e.g. `https://drone.example.com`
//! - `DRONE_TOKEN`: personal access token
//!
//! Both are required by every command that talks to the server.

use drone_client::DroneClient;
use secrecy::SecretString;
use tracing::debug;

use crate::errors::Error;

/// Environment variable holding the server address
pub const DRONE_SERVER_ENV: &str = "DRONE_SERVER";

/// Environment variable holding the access token
pub const DRONE_TOKEN_ENV: &str = "DRONE_TOKEN";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Where and how to reach the Drone server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server: String,
    pub token: SecretString,
}

impl ServerConfig {
    /// Reads the settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingEnvironment` naming the first variable that is
    /// unset or empty, server first.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the settings through `lookup`, which returns the value of an
    /// environment variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::MissingEnvironment(name.to_string()))
        };

        let server = required(DRONE_SERVER_ENV)?;
        let token = required(DRONE_TOKEN_ENV)?;

        debug!(server = server.as_str(), "Loaded server configuration");

        Ok(Self {
            server,
            token: SecretString::from(token),
        })
    }

    /// Creates a client for the configured server.
    pub fn connect(&self) -> Result<DroneClient, Error> {
        Ok(DroneClient::new(&self.server, self.token.clone())?)
    }
}

//! Crate for interacting with the Drone CI REST API.
//!
//! This crate provides the [`DroneApi`] trait, which is the only view the
//! synchronizer has of a Drone server, and [`DroneClient`], the HTTP
//! implementation authenticated with a personal access token.

use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, info, instrument};
use url::Url;

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{RemoteRepository, RemoteSecret, RepositoryPatch};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Repository-settings operations consumed from a Drone server.
///
/// Every method maps to exactly one HTTP request. Implementations must not
/// retry; any failure is returned to the caller as is.
#[async_trait]
pub trait DroneApi: Send + Sync {
    /// Lists every repository visible to the authenticated user.
    async fn list_repositories(&self) -> Result<Vec<RemoteRepository>, Error>;

    /// Lists the secrets of a repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `name` - The name of the repository.
    async fn list_secrets(&self, owner: &str, name: &str) -> Result<Vec<RemoteSecret>, Error>;

    /// Creates a new secret on a repository.
    async fn create_secret(
        &self,
        owner: &str,
        name: &str,
        secret: &RemoteSecret,
    ) -> Result<RemoteSecret, Error>;

    /// Replaces an existing secret, identified by `secret.name`.
    async fn update_secret(
        &self,
        owner: &str,
        name: &str,
        secret: &RemoteSecret,
    ) -> Result<RemoteSecret, Error>;

    /// Updates repository settings.
    ///
    /// Only the fields set in `patch` are sent to the server.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `name` - The name of the repository.
    /// * `patch` - A `RepositoryPatch` containing the desired changes.
    async fn patch_repository(
        &self,
        owner: &str,
        name: &str,
        patch: &RepositoryPatch,
    ) -> Result<RemoteRepository, Error>;
}

/// A client for the Drone REST API, authenticated with a bearer token.
#[derive(Debug)]
pub struct DroneClient {
    http: reqwest::Client,
    base_url: Url,
    token: SecretString,
}

impl DroneClient {
    /// Creates a new `DroneClient` for the server at `server`.
    ///
    /// # Arguments
    ///
    /// * `server` - Address of the Drone server, e.g. `https://drone.example.com`.
    ///   A path prefix is kept, so `https://example.com/drone` works as well.
    /// * `token` - Personal access token sent as `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidServerUrl` if `server` is not an absolute http(s)
    /// URL, and `Error::Transport` if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```rust
    /// use drone_client::DroneClient;
    /// use secrecy::SecretString;
    ///
    /// let client = DroneClient::new(
    ///     "https://drone.example.com",
    ///     SecretString::from("my-token".to_string()),
    /// );
    /// assert!(client.is_ok());
    /// ```
    pub fn new(server: &str, token: SecretString) -> Result<Self, Error> {
        let base_url =
            Url::parse(server).map_err(|_| Error::InvalidServerUrl(server.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidServerUrl(server.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("drone-sync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Builds the URL for an API path, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidServerUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = %method, url = %url, "Sending request to Drone");

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .bearer_auth(self.token.expose_secret());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(
                method = %method,
                url = %url,
                error_message = e.to_string(),
                "Failed to send request to Drone"
            );
            Error::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if !status.is_success() {
            error!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                "Received an error from Drone"
            );
            return Err(Error::from_status(status, text.trim().to_string()));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl DroneApi for DroneClient {
    #[instrument(skip(self))]
    async fn list_repositories(&self) -> Result<Vec<RemoteRepository>, Error> {
        let url = self.endpoint(&["api", "user", "repos"])?;
        let repos: Vec<RemoteRepository> = self.send(Method::GET, url, None::<&()>).await?;

        info!(count = repos.len(), "Retrieved repository list");
        Ok(repos)
    }

    #[instrument(skip(self), fields(owner = %owner, name = %name))]
    async fn list_secrets(&self, owner: &str, name: &str) -> Result<Vec<RemoteSecret>, Error> {
        let url = self.endpoint(&["api", "repos", owner, name, "secrets"])?;
        let secrets: Vec<RemoteSecret> = self.send(Method::GET, url, None::<&()>).await?;

        debug!(count = secrets.len(), "Retrieved secret list");
        Ok(secrets)
    }

    // Secret values are never logged, only the secret name.
    #[instrument(skip(self, secret), fields(owner = %owner, name = %name, secret = %secret.name))]
    async fn create_secret(
        &self,
        owner: &str,
        name: &str,
        secret: &RemoteSecret,
    ) -> Result<RemoteSecret, Error> {
        let url = self.endpoint(&["api", "repos", owner, name, "secrets"])?;
        self.send(Method::POST, url, Some(secret)).await
    }

    #[instrument(skip(self, secret), fields(owner = %owner, name = %name, secret = %secret.name))]
    async fn update_secret(
        &self,
        owner: &str,
        name: &str,
        secret: &RemoteSecret,
    ) -> Result<RemoteSecret, Error> {
        let url = self.endpoint(&["api", "repos", owner, name, "secrets", secret.name.as_str()])?;
        self.send(Method::PATCH, url, Some(secret)).await
    }

    #[instrument(skip(self, patch), fields(owner = %owner, name = %name))]
    async fn patch_repository(
        &self,
        owner: &str,
        name: &str,
        patch: &RepositoryPatch,
    ) -> Result<RemoteRepository, Error> {
        let url = self.endpoint(&["api", "repos", owner, name])?;
        self.send(Method::PATCH, url, Some(patch)).await
    }
}

//! Export and import of repository settings against a Drone server.

use config_manager::{split_owner_and_repo_name, Repos};
use drone_client::DroneApi;
use tracing::{debug, info, instrument};

use crate::mapping::{patch_from_repo, repo_from_remote, secret_to_remote};
use crate::{SyncError, SyncResult};

#[cfg(test)]
#[path = "synchronizer_tests.rs"]
mod tests;

/// Counters describing a completed import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of repositories patched
    pub repositories: usize,

    /// Number of secrets that did not exist and were created
    pub secrets_created: usize,

    /// Number of existing secrets that were replaced
    pub secrets_updated: usize,
}

/// Moves repository settings between the declarative model and a Drone server.
///
/// All remote calls are made one at a time, in order. The first failure stops
/// the run; changes already applied to earlier repositories are kept.
///
/// # Examples
///
/// ```rust,no_run
/// use drone_client::DroneClient;
/// use drone_sync_core::Synchronizer;
///
/// # async fn example(client: DroneClient) -> Result<(), drone_sync_core::SyncError> {
/// let synchronizer = Synchronizer::new(client);
/// let repos = synchronizer.export().await?;
/// println!("{} repositories", repos.len());
/// # Ok(())
/// # }
/// ```
pub struct Synchronizer<C: DroneApi> {
    client: C,
}

impl<C: DroneApi> Synchronizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    #[cfg(test)]
    fn client(&self) -> &C {
        &self.client
    }

    /// Reads every repository visible to the token, with its secrets.
    ///
    /// Repositories are keyed by their qualified `owner/name`.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Remote` with the client error unchanged.
    #[instrument(skip(self))]
    pub async fn export(&self) -> SyncResult<Repos> {
        let remotes = self.client.list_repositories().await?;
        info!(count = remotes.len(), "Exporting repositories");

        let mut repos = Repos::new();
        for remote in &remotes {
            let full_name = remote.qualified_name();
            let secrets = self.client.list_secrets(&remote.owner, &remote.name).await?;

            debug!(
                repository = full_name.as_str(),
                secrets = secrets.len(),
                "Exported repository"
            );
            repos.insert(full_name, repo_from_remote(remote, &secrets));
        }

        Ok(repos)
    }

    /// Applies resolved settings to the server, in key order.
    ///
    /// For each repository the settings patch is sent first. Each declared
    /// secret is then updated when a secret of that name already exists on
    /// the repository, and created otherwise.
    ///
    /// # Errors
    ///
    /// Returns the first failure, annotated with the repository (and secret)
    /// being processed.
    #[instrument(skip(self, repos), fields(count = repos.len()))]
    pub async fn import(&self, repos: &Repos) -> SyncResult<ImportSummary> {
        let mut summary = ImportSummary::default();

        for (full_name, repo) in repos {
            let (owner, name) = split_owner_and_repo_name(full_name);
            info!(repository = full_name.as_str(), "Importing repository");

            self.client
                .patch_repository(owner, name, &patch_from_repo(repo))
                .await
                .map_err(|source| SyncError::PatchRepository {
                    repository: full_name.clone(),
                    source,
                })?;
            summary.repositories += 1;

            let existing = self
                .client
                .list_secrets(owner, name)
                .await
                .map_err(|source| SyncError::ListSecrets {
                    repository: full_name.clone(),
                    source,
                })?;

            for (secret_name, secret) in &repo.secrets {
                let remote = secret_to_remote(secret_name, secret);

                if existing.iter().any(|s| &s.name == secret_name) {
                    debug!(
                        repository = full_name.as_str(),
                        secret = secret_name.as_str(),
                        "Updating secret"
                    );
                    self.client
                        .update_secret(owner, name, &remote)
                        .await
                        .map_err(|source| SyncError::UpdateSecret {
                            repository: full_name.clone(),
                            secret: secret_name.clone(),
                            source,
                        })?;
                    summary.secrets_updated += 1;
                } else {
                    debug!(
                        repository = full_name.as_str(),
                        secret = secret_name.as_str(),
                        "Creating secret"
                    );
                    self.client
                        .create_secret(owner, name, &remote)
                        .await
                        .map_err(|source| SyncError::CreateSecret {
                            repository: full_name.clone(),
                            secret: secret_name.clone(),
                            source,
                        })?;
                    summary.secrets_created += 1;
                }
            }
        }

        info!(
            repositories = summary.repositories,
            secrets_created = summary.secrets_created,
            secrets_updated = summary.secrets_updated,
            "Import complete"
        );

        Ok(summary)
    }
}

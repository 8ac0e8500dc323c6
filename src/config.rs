use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use clap::Args;
use tracing::info;

use crate::error::ConfigError;

/// GraphQL endpoint used when `GITHUB_GRAPHQL_URL` is not set
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Timeout for the release query in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credential used for the GraphQL request.
///
/// Formatting never reveals the value; call [`AccessToken::expose`] where the
/// cleartext is actually needed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccessToken {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Upstream repository in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepositorySlug {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepository(s.to_string());
        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Raw run inputs, each readable from a flag or the CI environment
#[derive(Debug, Clone, Args)]
pub struct Inputs {
    /// Token used to authenticate against the GitHub GraphQL API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: AccessToken,

    /// Package directory, relative to the workspace
    #[arg(long, env = "INPUT_PACKAGE")]
    pub package: String,

    /// Upstream repository to track (`owner/name`)
    #[arg(long, env = "INPUT_REPOSITORY")]
    pub repository: RepositorySlug,

    /// Workspace root containing the package directory
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: PathBuf,

    /// Step output file the results are appended to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output: PathBuf,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "INPUT_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// GraphQL endpoint to query
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = DEFAULT_GRAPHQL_URL)]
    pub graphql_url: String,
}

/// Validated, immutable settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub token: AccessToken,
    pub package: String,
    pub repository: RepositorySlug,
    pub workspace: PathBuf,
    pub output: PathBuf,
    pub timeout: Duration,
    pub graphql_url: String,
}

impl RunConfig {
    pub fn from_inputs(inputs: Inputs) -> Result<Self, ConfigError> {
        let package = inputs.package.trim().to_string();
        if package.is_empty() {
            return Err(ConfigError::EmptyPackage);
        }
        if !inputs.workspace.is_dir() {
            return Err(ConfigError::WorkspaceNotFound(inputs.workspace));
        }

        let config = Self {
            token: inputs.token,
            package,
            repository: inputs.repository,
            workspace: inputs.workspace,
            output: inputs.output,
            timeout: Duration::from_secs(inputs.timeout),
            graphql_url: inputs.graphql_url,
        };
        info!("settings: {:?}", config);
        Ok(config)
    }

    /// Directory holding the package's build files
    pub fn package_dir(&self) -> PathBuf {
        self.workspace.join(&self.package)
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Umbrella error for one check run
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Package(#[from] PackageError),

    #[error(transparent)]
    Release(#[from] ReleaseError),

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("access token must not be empty")]
    EmptyToken,

    #[error("package name must not be empty")]
    EmptyPackage,

    #[error("repository must be in `owner/name` form, got {0:?}")]
    InvalidRepository(String),

    #[error("workspace is not a directory: {}", .0.display())]
    WorkspaceNotFound(PathBuf),
}

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("graphql request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("graphql errors: {0}")]
    GraphQl(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("no release published for {0}")]
    NoRelease(String),
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to determine current version: no pkgver line in pin file")]
    MissingVersion,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write step output {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

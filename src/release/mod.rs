//! Upstream release lookup
//!
//! - [`source`]: `ReleaseSource` trait the check pipeline depends on
//! - [`github`]: GitHub GraphQL implementation
//! - [`types`]: Release model and GraphQL response envelope

pub mod github;
pub mod source;
pub mod types;

pub use github::GitHubReleases;
pub use source::ReleaseSource;
pub use types::ReleaseInfo;

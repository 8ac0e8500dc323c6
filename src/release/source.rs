//! Trait for fetching the latest upstream release

#[cfg(test)]
use mockall::automock;

use crate::config::RepositorySlug;
use crate::error::ReleaseError;
use crate::release::types::ReleaseInfo;

/// Source of upstream release information
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the latest published release of `repository`
    ///
    /// # Returns
    /// * `Ok(ReleaseInfo)` - The release the upstream marks as latest
    /// * `Err(ReleaseError)` - If the request fails or the repository has no release
    async fn latest_release(
        &self,
        repository: &RepositorySlug,
    ) -> Result<ReleaseInfo, ReleaseError>;
}

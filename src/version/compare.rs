use crate::error::CompareError;

/// Outcome of comparing the pinned version with the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Pinned version, without a leading `v`
    pub current_version: String,
    /// Latest release tag, without a leading `v`
    pub latest_version: String,
    /// True whenever the two normalized strings differ
    pub outdated: bool,
}

impl ComparisonResult {
    /// Step output pairs in the order they are written
    pub fn outputs(&self) -> [(&'static str, &str); 3] {
        [
            ("current-version", self.current_version.as_str()),
            ("latest-version", self.latest_version.as_str()),
            ("outdated", if self.outdated { "true" } else { "false" }),
        ]
    }
}

/// Strip a single leading 'v' prefix from a version string.
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Compare the pinned version against the latest release tag.
///
/// Any literal difference counts as outdated, including a pin that is ahead
/// of upstream.
pub fn compare(
    current: Option<&str>,
    latest_tag: &str,
) -> Result<ComparisonResult, CompareError> {
    let current = current.ok_or(CompareError::MissingVersion)?;
    let current_version = normalize_version(current);
    let latest_version = normalize_version(latest_tag);

    Ok(ComparisonResult {
        current_version: current_version.to_string(),
        latest_version: latest_version.to_string(),
        outdated: current_version != latest_version,
    })
}

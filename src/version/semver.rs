use semver::Version;

use crate::version::compare::normalize_version;

/// How the pinned version orders against upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRelation {
    Same,
    /// Pin is older than upstream
    Behind,
    /// Pin is newer than upstream (pre-release bump or unpublished tag)
    Ahead,
    /// At least one side is not a semver version
    Unknown,
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
/// Does NOT strip 'v' prefix (use `normalize_version` first if needed).
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Order `current` against `latest`, ignoring a leading 'v' on either side
pub fn relation(current: &str, latest: &str) -> VersionRelation {
    let (Some(current), Some(latest)) = (
        parse_version(normalize_version(current)),
        parse_version(normalize_version(latest)),
    ) else {
        return VersionRelation::Unknown;
    };

    match current.cmp(&latest) {
        std::cmp::Ordering::Equal => VersionRelation::Same,
        std::cmp::Ordering::Less => VersionRelation::Behind,
        std::cmp::Ordering::Greater => VersionRelation::Ahead,
    }
}

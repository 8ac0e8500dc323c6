//! Local package files and the version pinned in them

use std::path::{Path, PathBuf};

use crate::error::PackageError;

/// Build definition file name
pub const PKGBUILD: &str = "PKGBUILD";

/// Version pin file name
pub const SRCINFO: &str = ".SRCINFO";

/// Key of the version assignment in the pin file
pub const VERSION_KEY: &str = "pkgver";

/// A vendored package directory with its build and pin files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub path: PathBuf,
    pub pkgbuild_path: PathBuf,
    pub srcinfo_path: PathBuf,
}

impl PackageDescriptor {
    /// Resolves the package files under `path`.
    ///
    /// Fails with [`PackageError::FileNotFound`] if either file is missing.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, PackageError> {
        let path = path.into();
        let pkgbuild_path = path.join(PKGBUILD);
        let srcinfo_path = path.join(SRCINFO);

        for file in [&pkgbuild_path, &srcinfo_path] {
            if !file.is_file() {
                return Err(PackageError::FileNotFound(file.clone()));
            }
        }

        Ok(Self {
            path,
            pkgbuild_path,
            srcinfo_path,
        })
    }

    /// Returns the first `pkgver = ...` value of the pin file, if any
    pub fn find_current_version(&self) -> Result<Option<String>, PackageError> {
        let content = read(&self.srcinfo_path)?;
        Ok(parse_pinned_version(&content))
    }
}

fn read(path: &Path) -> Result<String, PackageError> {
    std::fs::read_to_string(path).map_err(|source| PackageError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_pinned_version(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.contains('='))
        .filter_map(|line| line.split_once(" = "))
        .find(|(key, _)| key.trim() == VERSION_KEY)
        .map(|(_, value)| value.trim().to_string())
}

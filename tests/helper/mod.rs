//! Shared fixtures for integration tests

use std::path::Path;
use std::time::Duration;

use serde_json::json;
use tempfile::TempDir;

use check_outdated::config::RunConfig;
use check_outdated::package::{PKGBUILD, SRCINFO};

pub const PACKAGE: &str = "foo-bin";

pub const TOKEN: &str = "ghp_integration";

/// Creates a workspace with `foo-bin/PKGBUILD` and, if given, `foo-bin/.SRCINFO`
pub fn create_workspace(srcinfo: Option<&str>) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let package_dir = temp_dir.path().join(PACKAGE);
    std::fs::create_dir_all(&package_dir).unwrap();
    std::fs::write(
        package_dir.join(PKGBUILD),
        "pkgname=foo-bin\npkgver=1.2.3\npkgrel=1\n",
    )
    .unwrap();
    if let Some(content) = srcinfo {
        std::fs::write(package_dir.join(SRCINFO), content).unwrap();
    }
    temp_dir
}

pub fn srcinfo(version: &str) -> String {
    format!(
        "pkgbase = foo-bin\n\tpkgdesc = Foo, prebuilt\n\tpkgver = {version}\n\tpkgrel = 1\n\tarch = x86_64\n\npkgname = foo-bin\n"
    )
}

pub fn run_config(workspace: &Path, graphql_url: &str) -> RunConfig {
    RunConfig {
        token: TOKEN.parse().unwrap(),
        package: PACKAGE.to_string(),
        repository: "acme/foo".parse().unwrap(),
        workspace: workspace.to_path_buf(),
        output: workspace.join("github_output"),
        timeout: Duration::from_secs(5),
        graphql_url: graphql_url.to_string(),
    }
}

/// GraphQL body reporting `tag` as the latest release
pub fn release_response(tag: &str) -> String {
    json!({
        "data": {
            "repository": {
                "latestRelease": {
                    "createdAt": "2024-05-01T12:00:00Z",
                    "id": "RE_kwDOIntegration",
                    "name": format!("Release {tag}"),
                    "tagName": tag,
                    "publishedAt": "2024-05-01T12:05:00Z"
                }
            }
        }
    })
    .to_string()
}

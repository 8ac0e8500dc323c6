//! One outdated check: package → release → compare → step outputs

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::CheckError;
use crate::output::StepOutput;
use crate::package::PackageDescriptor;
use crate::release::ReleaseSource;
use crate::version::semver::{VersionRelation, relation};
use crate::version::{ComparisonResult, compare};

/// Runs the check for `config` and appends the results to its output file.
///
/// Nothing is written unless every earlier stage succeeds.
pub async fn run<S: ReleaseSource + ?Sized>(
    config: &RunConfig,
    source: &S,
) -> Result<ComparisonResult, CheckError> {
    let package = PackageDescriptor::from_path(config.package_dir())?;
    info!("package: {:?}", package);

    let release = source.latest_release(&config.repository).await?;

    let current = package.find_current_version()?;
    let result = compare(current.as_deref(), &release.tag_name)?;

    if relation(&result.current_version, &result.latest_version) == VersionRelation::Ahead {
        warn!(
            "pinned version {} is ahead of upstream {}; reporting as outdated",
            result.current_version, result.latest_version
        );
    }

    info!("results for {}: {:?}", config.package, result);
    StepOutput::new(config.output_path()).write(&result)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, RepositorySlug};
    use crate::error::{CompareError, PackageError, ReleaseError};
    use crate::package::{PKGBUILD, SRCINFO};
    use crate::release::ReleaseInfo;
    use crate::release::source::MockReleaseSource;
    use chrono::Utc;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tempfile::TempDir;

    /// In-memory sink for formatted log lines
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn config(workspace: &TempDir) -> RunConfig {
        RunConfig {
            token: "ghp_secret".parse::<AccessToken>().unwrap(),
            package: "foo-bin".to_string(),
            repository: "acme/foo".parse().unwrap(),
            workspace: workspace.path().to_path_buf(),
            output: workspace.path().join("github_output"),
            timeout: Duration::from_secs(30),
            graphql_url: "http://localhost/graphql".to_string(),
        }
    }

    fn write_package(workspace: &TempDir, srcinfo: Option<&str>) {
        let dir = workspace.path().join("foo-bin");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(PKGBUILD), "pkgname=foo-bin\n").unwrap();
        if let Some(content) = srcinfo {
            std::fs::write(dir.join(SRCINFO), content).unwrap();
        }
    }

    fn release(tag: &str) -> ReleaseInfo {
        ReleaseInfo {
            id: "RE_1".to_string(),
            name: Some(tag.to_string()),
            tag_name: tag.to_string(),
            published_at: Utc::now(),
        }
    }

    fn source_returning(tag: &'static str) -> MockReleaseSource {
        let mut source = MockReleaseSource::new();
        source
            .expect_latest_release()
            .withf(|repo: &RepositorySlug| repo.owner == "acme" && repo.name == "foo")
            .times(1)
            .returning(move |_| Ok(release(tag)));
        source
    }

    #[tokio::test]
    async fn run_writes_outputs_for_outdated_package() {
        let workspace = TempDir::new().unwrap();
        write_package(&workspace, Some("pkgbase = foo-bin\n\tpkgver = 1.2.3\n"));
        let config = config(&workspace);

        let result = run(&config, &source_returning("v1.3.0")).await.unwrap();

        assert!(result.outdated);
        assert_eq!(
            std::fs::read_to_string(&config.output).unwrap(),
            "current-version=1.2.3\nlatest-version=1.3.0\noutdated=true\n"
        );
    }

    #[tokio::test]
    async fn run_fails_before_fetch_when_pin_file_is_missing() {
        let workspace = TempDir::new().unwrap();
        write_package(&workspace, None);
        let config = config(&workspace);

        let mut source = MockReleaseSource::new();
        source.expect_latest_release().never();

        let err = run(&config, &source).await.unwrap_err();

        assert!(matches!(
            err,
            CheckError::Package(PackageError::FileNotFound(_))
        ));
        assert!(!config.output.exists());
    }

    #[tokio::test]
    async fn run_fails_without_pkgver_and_writes_nothing() {
        let workspace = TempDir::new().unwrap();
        write_package(&workspace, Some("pkgbase = foo-bin\n\tpkgrel = 1\n"));
        let config = config(&workspace);

        let err = run(&config, &source_returning("v1.0.0"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CheckError::Compare(CompareError::MissingVersion)
        ));
        assert!(!config.output.exists());
    }

    #[tokio::test]
    async fn run_propagates_release_error_without_output() {
        let workspace = TempDir::new().unwrap();
        write_package(&workspace, Some("pkgver = 1.2.3\n"));
        let config = config(&workspace);

        let mut source = MockReleaseSource::new();
        source.expect_latest_release().times(1).returning(|_| {
            Err(ReleaseError::Http {
                status: 502,
                body: "bad gateway".to_string(),
            })
        });

        let err = run(&config, &source).await.unwrap_err();

        assert!(matches!(
            err,
            CheckError::Release(ReleaseError::Http { status: 502, .. })
        ));
        assert!(!config.output.exists());
    }

    #[rstest]
    #[case("2.0.0", "v1.9.0", true)]
    #[case("1.2.3", "v1.3.0", false)]
    #[tokio::test]
    async fn run_warns_only_when_pin_is_ahead_of_upstream(
        #[case] pinned: &str,
        #[case] tag: &'static str,
        #[case] warned: bool,
    ) {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _default = tracing::subscriber::set_default(subscriber);

        let workspace = TempDir::new().unwrap();
        write_package(&workspace, Some(&format!("pkgver = {pinned}\n")));
        let config = config(&workspace);

        let result = run(&config, &source_returning(tag)).await.unwrap();

        assert!(result.outdated);
        assert_eq!(logs.contents().contains("ahead of upstream"), warned);
    }
}

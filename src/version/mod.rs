//! Version comparison between the pinned package and upstream
//!
//! - [`compare`]: Literal outdated check that drives the step outputs
//! - [`semver`]: Semver ordering, used only to annotate the log

pub mod compare;
pub mod semver;

pub use compare::{ComparisonResult, compare, normalize_version};

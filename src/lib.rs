//! Reports whether a vendored package lags behind its upstream GitHub release
//!
//! # Modules
//!
//! - [`config`]: Run inputs from flags/environment and the validated `RunConfig`
//! - [`package`]: Package directory and the version pinned in `.SRCINFO`
//! - [`release`]: Latest upstream release via the GitHub GraphQL API
//! - [`version`]: Pinned vs. latest comparison
//! - [`output`]: Append-only step output writer
//! - [`check`]: The end-to-end check pipeline
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types for every stage

pub mod check;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod package;
pub mod release;
pub mod version;

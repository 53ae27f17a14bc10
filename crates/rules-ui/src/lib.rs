#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Rule table controller for the rules page.
//!
//! Rows of the active and non-active tables toggle selection on click, bulk
//! controls select or move rows between the tables, and the submit control
//! posts both id lists to the server. The table logic is target-independent;
//! browser bindings compile only for wasm32.

pub mod config;
pub mod error;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod services;
#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
pub use app::{mount_rule_tables, run_app};

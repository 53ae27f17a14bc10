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
//! Shared HTTP DTOs for the rule assignment endpoint.
//!
//! The browser controller builds an [`AffectRulesRequest`] from the two rule
//! tables and posts it as JSON. Keeping the type here gives the server side a
//! single definition of the wire shape.

use serde::{Deserialize, Serialize};

/// Header that mirrors the anti-forgery token carried in the request body.
pub const CSRF_HEADER: &str = "Csrf-Token";

/// Content type used for rule submissions.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Request body for reassigning rules between the active and non-active sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectRulesRequest {
    /// Rule identifiers in the active table, in display order.
    pub active_ids: Vec<String>,
    /// Rule identifiers in the non-active table, in display order.
    pub non_active_ids: Vec<String>,
    /// Opaque anti-forgery token issued with the page.
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

impl AffectRulesRequest {
    /// Build a request from both id lists and the page token.
    #[must_use]
    pub fn new(
        active_ids: Vec<String>,
        non_active_ids: Vec<String>,
        csrf_token: impl Into<String>,
    ) -> Self {
        Self {
            active_ids,
            non_active_ids,
            csrf_token: csrf_token.into(),
        }
    }

    /// Total number of rule ids carried by the request.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.active_ids.len() + self.non_active_ids.len()
    }
}

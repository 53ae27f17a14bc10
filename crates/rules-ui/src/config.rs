//! DOM contract and page-injected configuration.
//!
//! # Design
//! - The hosting page owns the markup; the identifiers it uses live in one place.
//! - The endpoint URL and anti-forgery token are opaque strings validated once at mount.

use crate::error::ConfigError;
use crate::features::rules::actions::{RuleAction, TableKind};

/// Meta tag carrying the submission endpoint.
pub const POST_URL_META: &str = "affect-rules-url";
/// Meta tag carrying the anti-forgery token.
pub const CSRF_TOKEN_META: &str = "csrf-token";

/// Element ids and class names the controller binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomContract {
    /// Id of the active rules table.
    pub active_table_id: &'static str,
    /// Id of the non-active rules table.
    pub non_active_table_id: &'static str,
    /// Class marking a selected row.
    pub selected_class: &'static str,
    /// Class of the select-all control for the active table.
    pub select_all_active: &'static str,
    /// Class of the select-all control for the non-active table.
    pub select_all_non_active: &'static str,
    /// Class of the control moving active rows to the non-active table.
    pub move_active: &'static str,
    /// Class of the control moving non-active rows to the active table.
    pub move_non_active: &'static str,
    /// Class of the submit control.
    pub submit: &'static str,
}

impl DomContract {
    /// Identifiers rendered by the rules page.
    pub const DEFAULT: Self = Self {
        active_table_id: "active_rules",
        non_active_table_id: "non_active_rules",
        selected_class: "selected",
        select_all_active: "select_all_active",
        select_all_non_active: "select_all_non_active",
        move_active: "move_active_rules",
        move_non_active: "move_non_active_rules",
        submit: "ok",
    };

    /// Element id of the given table.
    #[must_use]
    pub const fn table_id(&self, kind: TableKind) -> &'static str {
        match kind {
            TableKind::Active => self.active_table_id,
            TableKind::NonActive => self.non_active_table_id,
        }
    }

    /// Class name of the control that triggers `action`.
    #[must_use]
    pub const fn control_class(&self, action: RuleAction) -> &'static str {
        match action {
            RuleAction::SelectAll(TableKind::Active) => self.select_all_active,
            RuleAction::SelectAll(TableKind::NonActive) => self.select_all_non_active,
            RuleAction::MoveSelected {
                from: TableKind::Active,
            } => self.move_active,
            RuleAction::MoveSelected {
                from: TableKind::NonActive,
            } => self.move_non_active,
            RuleAction::Submit => self.submit,
        }
    }
}

impl Default for DomContract {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Values injected by the page at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    post_url: String,
    csrf_token: String,
}

impl PageConfig {
    /// Validate and capture the endpoint URL and anti-forgery token.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] when either value is blank.
    pub fn new(post_url: &str, csrf_token: &str) -> Result<Self, ConfigError> {
        let post_url = required(POST_URL_META, post_url)?;
        let csrf_token = required(CSRF_TOKEN_META, csrf_token)?;
        Ok(Self {
            post_url,
            csrf_token,
        })
    }

    /// Endpoint receiving the rule assignment.
    #[must_use]
    pub fn post_url(&self) -> &str {
        &self.post_url
    }

    /// Anti-forgery token for this page session.
    #[must_use]
    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }
}

fn required(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Missing { name });
    }
    Ok(trimmed.to_string())
}

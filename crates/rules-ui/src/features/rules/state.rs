//! Rule table state.
//!
//! # Design
//! - Tables are explicit references built once and passed around, never re-queried.
//! - Row membership is owned by the backing view; moving a row re-parents it.
//! - Selection lives on the row so it travels with it.

use crate::features::rules::actions::{ActionOutcome, RuleAction, TableKind};
use crate::features::rules::logic;
use rules_api_models::AffectRulesRequest;

/// Ordered view over one rules table.
///
/// Implementations use interior mutability: the browser DOM is shared state
/// reachable from every event handler.
pub trait TableView {
    /// Handle to a row inside the table.
    type Row;

    /// Body rows in display order.
    fn rows(&self) -> Vec<Self::Row>;

    /// Identifier of `row`, unique within its table.
    fn row_id(&self, row: &Self::Row) -> String;

    /// Whether `row` carries the selected marker.
    fn is_selected(&self, row: &Self::Row) -> bool;

    /// Set or clear the selected marker on `row`.
    fn set_selected(&self, row: &Self::Row, selected: bool);

    /// Re-parent `row` after the existing rows of this table.
    fn append_row(&self, row: &Self::Row);
}

/// The active and non-active tables of the rules page.
#[derive(Clone, Debug)]
pub struct RuleTables<T> {
    active: T,
    non_active: T,
}

impl<T: TableView> RuleTables<T> {
    /// Pair the two table views.
    #[must_use]
    pub const fn new(active: T, non_active: T) -> Self {
        Self { active, non_active }
    }

    /// Borrow the view for `kind`.
    pub const fn table(&self, kind: TableKind) -> &T {
        match kind {
            TableKind::Active => &self.active,
            TableKind::NonActive => &self.non_active,
        }
    }

    /// Flip the marker on a row of `kind`; returns the new state.
    pub fn toggle(&self, kind: TableKind, row: &T::Row) -> bool {
        logic::toggle_row(self.table(kind), row)
    }

    /// Select every row of `kind`; the other table is untouched.
    pub fn select_all(&self, kind: TableKind) -> usize {
        logic::select_all(self.table(kind))
    }

    /// Move selected rows out of `from` into the other table.
    pub fn move_selected(&self, from: TableKind) -> usize {
        logic::move_selected(self.table(from), self.table(from.other()))
    }

    /// Current ids of both tables plus the page token.
    #[must_use]
    pub fn snapshot(&self, csrf_token: &str) -> AffectRulesRequest {
        AffectRulesRequest::new(
            logic::row_ids(&self.active),
            logic::row_ids(&self.non_active),
            csrf_token,
        )
    }

    /// Apply a control action. Submission is left to the caller.
    pub fn apply(&self, action: RuleAction) -> ActionOutcome {
        match action {
            RuleAction::SelectAll(kind) => ActionOutcome::Selected(self.select_all(kind)),
            RuleAction::MoveSelected { from } => ActionOutcome::Moved(self.move_selected(from)),
            RuleAction::Submit => ActionOutcome::SubmitRequested,
        }
    }
}

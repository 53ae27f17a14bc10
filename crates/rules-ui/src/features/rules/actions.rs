//! Rule table actions.
//!
//! # Design
//! - Capture control intent separate from the DOM.
//! - Actions are UI-only and never perform side effects.

/// The two partitions a rule row can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Rules currently applied.
    Active,
    /// Rules currently switched off.
    NonActive,
}

impl TableKind {
    /// The opposite partition.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Active => Self::NonActive,
            Self::NonActive => Self::Active,
        }
    }

    /// Short label used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::NonActive => "non-active",
        }
    }
}

/// Commands bound to the page controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleAction {
    /// Mark every row of a table as selected.
    SelectAll(TableKind),
    /// Move selected rows out of `from` into the other table.
    MoveSelected {
        /// Source table.
        from: TableKind,
    },
    /// Send both id lists to the server.
    Submit,
}

impl RuleAction {
    /// Every control-bound action.
    pub const ALL: [Self; 5] = [
        Self::SelectAll(TableKind::Active),
        Self::SelectAll(TableKind::NonActive),
        Self::MoveSelected {
            from: TableKind::Active,
        },
        Self::MoveSelected {
            from: TableKind::NonActive,
        },
        Self::Submit,
    ];
}

/// Result of applying an action to the tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Rows marked by a select-all.
    Selected(usize),
    /// Rows relocated by a move.
    Moved(usize),
    /// The caller should start a submission.
    SubmitRequested,
}

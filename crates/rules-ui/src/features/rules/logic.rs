//! Selection and move helpers over a [`TableView`].
//!
//! # Design
//! - Every helper reads rows through the view, so callers never cache stale lists.
//! - Moves keep the encounter order of the selected rows.

use crate::features::rules::state::TableView;

/// Flip the selected marker on `row`; returns the new state.
pub fn toggle_row<T: TableView>(table: &T, row: &T::Row) -> bool {
    let next = !table.is_selected(row);
    table.set_selected(row, next);
    next
}

/// Mark every row in `table` as selected; returns the row count.
pub fn select_all<T: TableView>(table: &T) -> usize {
    let rows = table.rows();
    for row in &rows {
        table.set_selected(row, true);
    }
    rows.len()
}

/// Number of rows in `table` carrying the selected marker.
pub fn selected_count<T: TableView>(table: &T) -> usize {
    table
        .rows()
        .iter()
        .filter(|row| table.is_selected(row))
        .count()
}

/// Relocate the selected rows of `source` after the rows of `destination`.
///
/// Moved rows keep their relative order and lose the selected marker.
/// Unselected rows stay where they are. Returns how many rows moved.
pub fn move_selected<T: TableView>(source: &T, destination: &T) -> usize {
    let selected: Vec<T::Row> = source
        .rows()
        .into_iter()
        .filter(|row| source.is_selected(row))
        .collect();
    for row in &selected {
        destination.append_row(row);
        destination.set_selected(row, false);
    }
    selected.len()
}

/// Ids of every row in `table`, in display order.
pub fn row_ids<T: TableView>(table: &T) -> Vec<String> {
    table.rows().iter().map(|row| table.row_id(row)).collect()
}

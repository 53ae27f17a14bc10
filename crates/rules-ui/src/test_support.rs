//! In-memory table views for native tests.

use crate::features::rules::state::TableView;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct MemoryRow {
    id: String,
    selected: bool,
    parent: usize,
    position: u64,
}

#[derive(Debug, Default)]
struct Arena {
    rows: Vec<MemoryRow>,
    tables: usize,
    next_position: u64,
}

impl Arena {
    fn bump(&mut self) -> u64 {
        self.next_position += 1;
        self.next_position
    }
}

/// Shared row arena; every row has exactly one parent table, like DOM nodes.
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryDocument {
    arena: Rc<RefCell<Arena>>,
}

impl MemoryDocument {
    /// Create a new table holding `ids` in order.
    pub(crate) fn table(&self, ids: &[&str]) -> MemoryTable {
        let mut arena = self.arena.borrow_mut();
        let index = arena.tables;
        arena.tables += 1;
        for id in ids {
            let position = arena.bump();
            arena.rows.push(MemoryRow {
                id: (*id).to_string(),
                selected: false,
                parent: index,
                position,
            });
        }
        MemoryTable {
            arena: Rc::clone(&self.arena),
            index,
        }
    }

    /// Handle of the row with `id`.
    pub(crate) fn row(&self, id: &str) -> usize {
        self.arena
            .borrow()
            .rows
            .iter()
            .position(|row| row.id == id)
            .expect("row exists")
    }

    /// Ids of all selected rows in creation order.
    pub(crate) fn selected_ids(&self) -> Vec<String> {
        self.arena
            .borrow()
            .rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.id.clone())
            .collect()
    }

    /// Ids of `table` in display order.
    pub(crate) fn ids_of(&self, table: &MemoryTable) -> Vec<String> {
        crate::features::rules::logic::row_ids(table)
    }
}

/// One table inside a [`MemoryDocument`].
#[derive(Clone, Debug)]
pub(crate) struct MemoryTable {
    arena: Rc<RefCell<Arena>>,
    index: usize,
}

impl TableView for MemoryTable {
    type Row = usize;

    fn rows(&self) -> Vec<usize> {
        let arena = self.arena.borrow();
        let mut rows: Vec<(u64, usize)> = arena
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.parent == self.index)
            .map(|(handle, row)| (row.position, handle))
            .collect();
        rows.sort_unstable();
        rows.into_iter().map(|(_, handle)| handle).collect()
    }

    fn row_id(&self, row: &usize) -> String {
        self.arena.borrow().rows[*row].id.clone()
    }

    fn is_selected(&self, row: &usize) -> bool {
        self.arena.borrow().rows[*row].selected
    }

    fn set_selected(&self, row: &usize, selected: bool) {
        self.arena.borrow_mut().rows[*row].selected = selected;
    }

    fn append_row(&self, row: &usize) {
        let mut arena = self.arena.borrow_mut();
        let position = arena.bump();
        let entry = &mut arena.rows[*row];
        entry.parent = self.index;
        entry.position = position;
    }
}

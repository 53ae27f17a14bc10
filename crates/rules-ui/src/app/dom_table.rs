//! [`TableView`] over a live `<table>` element.

use crate::error::MountError;
use crate::features::rules::state::TableView;
use gloo::console;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlTableElement, HtmlTableRowElement, Node};

#[derive(Clone, Debug)]
pub(crate) struct DomTable {
    table: HtmlTableElement,
    selected_class: &'static str,
}

impl DomTable {
    pub(crate) fn lookup(
        document: &Document,
        id: &'static str,
        selected_class: &'static str,
    ) -> Result<Self, MountError> {
        let element = document
            .get_element_by_id(id)
            .ok_or(MountError::MissingTable { id })?;
        let table = element
            .dyn_into::<HtmlTableElement>()
            .map_err(|_| MountError::NotATable { id })?;
        Ok(Self {
            table,
            selected_class,
        })
    }

    pub(crate) const fn element(&self) -> &HtmlTableElement {
        &self.table
    }

    /// Body row of this table the click landed in, if any.
    pub(crate) fn row_for_event(&self, event: &Event) -> Option<HtmlTableRowElement> {
        let target = event.target()?.dyn_into::<Element>().ok()?;
        let row = target.closest("tr").ok()??;
        let row = row.dyn_into::<HtmlTableRowElement>().ok()?;
        self.owns(&row).then_some(row)
    }

    fn owns(&self, row: &HtmlTableRowElement) -> bool {
        let table: &Node = self.table.as_ref();
        let same_table = row
            .closest("table")
            .ok()
            .flatten()
            .is_some_and(|owner| owner.is_same_node(Some(table)));
        same_table && is_body_row(row)
    }

    // Rows land in the first <tbody> so header/footer sections keep their place.
    fn body(&self) -> Node {
        self.table
            .t_bodies()
            .item(0)
            .map_or_else(|| self.table.clone().into(), Into::into)
    }
}

fn is_body_row(row: &HtmlTableRowElement) -> bool {
    row.parent_element().is_none_or(|parent| {
        !matches!(parent.tag_name().as_str(), "THEAD" | "TFOOT")
    })
}

impl TableView for DomTable {
    type Row = HtmlTableRowElement;

    fn rows(&self) -> Vec<HtmlTableRowElement> {
        let rows = self.table.rows();
        (0..rows.length())
            .filter_map(|index| rows.item(index))
            .filter_map(|row| row.dyn_into::<HtmlTableRowElement>().ok())
            .filter(is_body_row)
            .collect()
    }

    fn row_id(&self, row: &HtmlTableRowElement) -> String {
        row.id()
    }

    fn is_selected(&self, row: &HtmlTableRowElement) -> bool {
        row.class_list().contains(self.selected_class)
    }

    fn set_selected(&self, row: &HtmlTableRowElement, selected: bool) {
        if let Err(err) = row
            .class_list()
            .toggle_with_force(self.selected_class, selected)
        {
            console::error!("row selection update failed", row.id(), err);
        }
    }

    fn append_row(&self, row: &HtmlTableRowElement) {
        if let Err(err) = self.body().append_child(row) {
            console::error!("row move failed", row.id(), err);
        }
    }
}

//! Browser entry points and control wiring.
//!
//! # Design
//! - Look up both tables once and hand explicit references to every handler.
//! - Row clicks are delegated to the table so moved rows keep working.
//! - Mount at most once per page; listeners live for the page lifetime.

use crate::config::{DomContract, PageConfig};
use crate::error::MountError;
use crate::features::rules::actions::{ActionOutcome, RuleAction, TableKind};
use crate::features::rules::state::RuleTables;
use crate::features::rules::submit::{SubmissionTracker, submit_rules};
use crate::services::api::ApiClient;
use dom_table::DomTable;
use feedback::AlertFeedback;
use gloo::console;
use gloo::events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

mod dom_table;
mod feedback;
mod page;

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

struct Controller {
    tables: RuleTables<DomTable>,
    tracker: RefCell<SubmissionTracker>,
    config: PageConfig,
    client: ApiClient,
    feedback: AlertFeedback,
}

/// Registered listeners for one mounted rules page.
pub(crate) struct RuleTablesController {
    listeners: Vec<EventListener>,
}

impl RuleTablesController {
    /// Resolve the tables and controls named by `contract` and bind their handlers.
    pub(crate) fn mount(
        document: &Document,
        contract: &DomContract,
        config: PageConfig,
    ) -> Result<Self, MountError> {
        let active =
            DomTable::lookup(document, contract.active_table_id, contract.selected_class)?;
        let non_active =
            DomTable::lookup(document, contract.non_active_table_id, contract.selected_class)?;
        let submit_controls =
            page::elements_by_class(document, contract.control_class(RuleAction::Submit));

        let controller = Rc::new(Controller {
            tables: RuleTables::new(active, non_active),
            tracker: RefCell::new(SubmissionTracker::default()),
            config,
            client: ApiClient,
            feedback: AlertFeedback::new(submit_controls),
        });

        let mut listeners = Vec::new();
        for kind in [TableKind::Active, TableKind::NonActive] {
            let element = controller.tables.table(kind).element().clone();
            let controller = Rc::clone(&controller);
            listeners.push(EventListener::new(&element, "click", move |event| {
                if let Some(row) = controller.tables.table(kind).row_for_event(event) {
                    controller.tables.toggle(kind, &row);
                }
            }));
        }
        for action in RuleAction::ALL {
            let class = contract.control_class(action);
            let controls = page::elements_by_class(document, class);
            if controls.is_empty() {
                console::warn!("no control found for class", class);
            }
            for control in controls {
                let controller = Rc::clone(&controller);
                listeners.push(EventListener::new(&control, "click", move |_event| {
                    dispatch(&controller, action);
                }));
            }
        }

        console::log!(
            "rule tables mounted",
            controller.config.post_url().to_string()
        );
        Ok(Self { listeners })
    }

    /// Keep every listener registered until the page unloads.
    pub(crate) fn persist(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

fn dispatch(controller: &Rc<Controller>, action: RuleAction) {
    match controller.tables.apply(action) {
        ActionOutcome::Selected(_) => {}
        ActionOutcome::Moved(count) => {
            if let RuleAction::MoveSelected { from } = action {
                console::log!(format!("moved {count} {} rule rows", from.label()));
            }
        }
        ActionOutcome::SubmitRequested => {
            let controller = Rc::clone(controller);
            spawn_local(async move {
                let result = submit_rules(
                    &controller.tables,
                    &controller.tracker,
                    &controller.config,
                    &controller.client,
                    &controller.feedback,
                )
                .await;
                match result {
                    Ok(ack) => console::log!("rule submission finished", ack.message()),
                    Err(err) => console::warn!("rule submission skipped", err.to_string()),
                }
            });
        }
    }
}

fn mount_once(document: &Document, config: PageConfig) -> Result<(), MountError> {
    if MOUNTED.with(Cell::get) {
        console::warn!("rule tables already mounted");
        return Ok(());
    }
    RuleTablesController::mount(document, &DomContract::DEFAULT, config)?.persist();
    MOUNTED.with(|mounted| mounted.set(true));
    Ok(())
}

/// Mount using the endpoint and token from the page's `<meta>` tags.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let result = page::document().and_then(|document| {
        let config = page::page_config(&document)?;
        mount_once(&document, config)
    });
    if let Err(err) = result {
        console::error!("rule tables not mounted", err.to_string());
    }
}

/// Mount with values injected by page script.
///
/// # Errors
/// Rejects with a message when the page lacks either table or a value is blank.
#[wasm_bindgen(js_name = mountRuleTables)]
pub fn mount_rule_tables(post_url: &str, csrf_token: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = PageConfig::new(post_url, csrf_token).map_err(MountError::from);
    config
        .and_then(|config| mount_once(&page::document()?, config))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

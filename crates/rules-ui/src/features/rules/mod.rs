//! Rule table feature wiring.
//!
//! # Design
//! - Selection, move and payload assembly are pure over [`state::TableView`].
//! - Browser bindings live in the app layer and only forward typed actions here.
//! - Submission is single-flight with an observable state.

pub mod actions;
pub mod logic;
pub mod state;
pub mod submit;

//! Feature slices for the rules page.

pub mod rules;

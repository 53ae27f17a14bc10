//! Outbound HTTP services.

pub(crate) mod api;

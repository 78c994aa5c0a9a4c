//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the outbound joke fetch; `types` defines its response schema.
//! The roster never touches the network.

pub mod api;
pub mod types;

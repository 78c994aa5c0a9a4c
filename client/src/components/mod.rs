//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Roster components receive the page-owned `RwSignal<RosterState>` as a prop
//! and write through `BrowserStore`; `navbar` is shared by both pages.

pub mod navbar;
pub mod sort_bar;
pub mod user_form;
pub mod user_table;

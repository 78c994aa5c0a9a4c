//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each page owns its own state (`roster`, `jokes`); nothing is shared across
//! routes, so there are no context providers at the app root.

pub mod jokes;
pub mod roster;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signal and delegates rendering details to
//! `components`.

pub mod jokes;
pub mod roster;

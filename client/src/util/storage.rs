//! Durable roster storage behind a small repository trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The roster lives in one `localStorage` slot as a JSON array of
//! `{name, role, gender, age}` objects, overwritten wholesale on every
//! mutation. `BrowserStore` is the hydrate-only web-sys glue; on the server it
//! behaves as an empty, write-ignoring slot so SSR stays deterministic.
//! `MemoryStore` holds the same JSON text in memory for tests.
//!
//! TRADE-OFFS
//! ==========
//! There is no version stamp on the slot. Two tabs writing the same key
//! resolve as last writer wins.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;

use crate::state::roster::User;

/// `localStorage` key holding the roster snapshot.
pub const ROSTER_STORAGE_KEY: &str = "users";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("stored roster is malformed: {0}")]
    Corrupt(String),
    #[error("roster encode failed: {0}")]
    Encode(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Read/write/clear access to the durable roster snapshot.
pub trait RosterStore {
    /// Returns `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// `Corrupt` when the slot holds something other than a roster.
    fn read(&self) -> Result<Option<Vec<User>>, StoreError>;

    /// Replace the whole snapshot.
    ///
    /// # Errors
    ///
    /// `Encode` or `Write` when the snapshot could not be stored.
    fn write(&self, users: &[User]) -> Result<(), StoreError>;

    /// Remove the snapshot.
    ///
    /// # Errors
    ///
    /// `Unavailable` or `Write` when the slot could not be cleared.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Serialize a roster to its stored JSON form.
///
/// # Errors
///
/// Returns `Encode` if serialization fails.
pub fn encode_snapshot(users: &[User]) -> Result<String, StoreError> {
    serde_json::to_string(users).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Parse stored JSON into a roster.
///
/// # Errors
///
/// Returns `Corrupt` if the text is not a JSON array of user records.
pub fn decode_snapshot(raw: &str) -> Result<Vec<User>, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Corrupt(e.to_string()))
}

/// Browser `localStorage` slot.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStore {
    key: &'static str,
}

impl BrowserStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new(ROSTER_STORAGE_KEY)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

impl RosterStore for BrowserStore {
    fn read(&self) -> Result<Option<Vec<User>>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let Some(raw) = storage.get_item(self.key).ok().flatten() else {
                return Ok(None);
            };
            decode_snapshot(&raw).map(Some)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn write(&self, users: &[User]) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let raw = encode_snapshot(users)?;
            storage
                .set_item(self.key, &raw)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = users;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage
                .remove_item(self.key)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

/// In-memory slot holding the same JSON text `BrowserStore` would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with arbitrary slot contents, e.g. a malformed snapshot.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: RefCell::new(Some(raw.into())) }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl RosterStore for MemoryStore {
    fn read(&self) -> Result<Option<Vec<User>>, StoreError> {
        match self.raw.borrow().as_deref() {
            Some(raw) => decode_snapshot(raw).map(Some),
            None => Ok(None),
        }
    }

    fn write(&self, users: &[User]) -> Result<(), StoreError> {
        let raw = encode_snapshot(users)?;
        *self.raw.borrow_mut() = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.raw.borrow_mut().take();
        Ok(())
    }
}

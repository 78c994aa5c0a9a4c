//! Roster state: user records, the create/edit form draft, and sort projection.
//!
//! DESIGN
//! ======
//! The roster is the authoritative in-memory list of users. Every mutation
//! builds the next list, writes it through a `RosterStore`, and only then
//! commits it, so the durable snapshot and the in-memory list never diverge.
//!
//! Records carry a `RecordId` assigned when they enter memory. Table actions
//! resolve by id; the position-based helpers (`begin_edit_at`, `delete_at`)
//! resolve a row of the sorted projection back to its original index first.
//! Ids are not persisted: the stored snapshot is the plain four-field record.
//!
//! Sorting is a projection only. The stored order is insertion order and is
//! never touched by `projection()`.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::cmp::Ordering;
use std::fmt;

use leptos::logging::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::storage::{RosterStore, StoreError};

/// Gender choice offered by the form. Serialized with its Lithuanian label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "Vyras")]
    Male,
    #[serde(rename = "Moteris")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Vyras",
            Gender::Female => "Moteris",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }
}

/// A single roster record as stored in the durable snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: String,
    pub gender: Gender,
    pub age: u32,
}

impl User {
    pub fn new(name: &str, role: &str, gender: Gender, age: u32) -> Self {
        Self { name: name.to_owned(), role: role.to_owned(), gender, age }
    }
}

/// The seed set adopted when storage holds no usable roster.
pub fn default_users() -> Vec<User> {
    vec![
        User::new("Jonas", "Administratorius", Gender::Male, 30),
        User::new("Agnė", "Vadybininkė", Gender::Female, 28),
        User::new("Tomas", "Programuotojas", Gender::Male, 25),
    ]
}

/// In-memory identity for a roster record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: RecordId,
    pub user: User,
}

impl RosterEntry {
    fn new(user: User) -> Self {
        Self { id: RecordId::new(), user }
    }
}

/// One row of the sorted view. `index` points back into stored order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectedEntry {
    pub index: usize,
    pub id: RecordId,
    pub user: User,
}

impl ProjectedEntry {
    /// Key for keyed table rendering. Changes only when this record's
    /// content changes, so draft edits and re-sorts reuse existing rows.
    pub fn render_key(&self) -> (RecordId, User) {
        (self.id, self.user.clone())
    }
}

/// Field the table is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Role,
    Gender,
    Age,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Name, SortKey::Role, SortKey::Gender, SortKey::Age];

    /// Field name, used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Role => "role",
            SortKey::Gender => "gender",
            SortKey::Age => "age",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Vardas (A-Z)",
            SortKey::Role => "Pareigos (A-Z)",
            SortKey::Gender => "Lytis (A-Z)",
            SortKey::Age => "Amžius (žemiausias-aukščiausias)",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }

    /// Ascending comparison: alphabetical text for string fields, numeric for age.
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            SortKey::Name => compare_text(&a.name, &b.name),
            SortKey::Role => compare_text(&a.role, &b.role),
            SortKey::Gender => compare_text(a.gender.label(), b.gender.label()),
            SortKey::Age => a.age.cmp(&b.age),
        }
    }
}

/// Three-level text ordering: base letters first, then diacritics, then case.
/// `Šarūnas` sorts among the `S` names and `Ėglė` right after `Eglė`.
fn compare_text(a: &str, b: &str) -> Ordering {
    let primary = a.chars().map(base_letter).cmp(b.chars().map(base_letter));
    primary
        .then_with(|| a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase)))
        .then_with(|| a.cmp(b))
}

/// Lowercase letter with its diacritic stripped, for the first ordering pass.
fn base_letter(c: char) -> char {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'ą' | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'č' | 'ç' | 'ć' => 'c',
        'ę' | 'ė' | 'è' | 'é' | 'ê' | 'ë' | 'ē' => 'e',
        'į' | 'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'š' | 'ś' => 's',
        'ų' | 'ū' | 'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}

/// Coerce raw age input to an integer. Leading digits are kept; anything
/// unparseable becomes 0.
pub fn parse_age(raw: &str) -> u32 {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Text shown in the age input. Zero renders as an empty field.
pub fn age_input_value(age: u32) -> String {
    if age == 0 { String::new() } else { age.to_string() }
}

/// Required-field failures on submit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Įveskite vardą.")]
    MissingName,
    #[error("Įveskite pareigas.")]
    MissingRole,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no row at position {0}")]
    OutOfRange(usize),
    #[error("record {0} not found")]
    UnknownRecord(RecordId),
}

/// Check required fields and return the record to store.
///
/// # Errors
///
/// Returns `FormError` when name or role is blank.
pub fn validate_draft(draft: &User) -> Result<User, FormError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(FormError::MissingName);
    }
    let role = draft.role.trim();
    if role.is_empty() {
        return Err(FormError::MissingRole);
    }
    Ok(User::new(name, role, draft.gender, draft.age))
}

/// Where the roster came from on initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSource {
    /// Adopted verbatim from storage.
    Stored,
    /// Storage was empty; defaults were written.
    Seeded,
    /// Storage held something unusable; defaults replaced it.
    Recovered,
}

/// Result of a successful form submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submitted {
    Created(RecordId),
    Updated(RecordId),
}

/// Roster page state.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    entries: Vec<RosterEntry>,
    editing: Option<RecordId>,
    loaded: bool,
    pub draft: User,
    pub sort_key: SortKey,
    pub error: Option<String>,
}

impl RosterState {
    /// Load the roster from `store`, seeding defaults when nothing usable is stored.
    pub fn initialize(&mut self, store: &impl RosterStore) -> LoadSource {
        let (users, source) = match store.read() {
            Ok(Some(users)) => (users, LoadSource::Stored),
            Ok(None) => (default_users(), LoadSource::Seeded),
            Err(e) => {
                warn!("stored roster unusable, reseeding: {e}");
                (default_users(), LoadSource::Recovered)
            }
        };
        if source != LoadSource::Stored {
            if let Err(e) = store.write(&users) {
                warn!("failed to persist seed roster: {e}");
                self.error = Some(e.to_string());
            }
        }
        self.entries = users.into_iter().map(RosterEntry::new).collect();
        self.loaded = true;
        self.reset_form();
        source
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Records in stored order.
    pub fn users(&self) -> Vec<User> {
        self.entries.iter().map(|e| e.user.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows ordered by the current sort key.
    pub fn projection(&self) -> Vec<ProjectedEntry> {
        project(&self.entries, self.sort_key)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        self.editing
    }

    /// Stored-order index of the record loaded into the form.
    pub fn edit_target(&self) -> Option<usize> {
        let id = self.editing?;
        self.position_of(id)
    }

    /// Load the record with `id` into the draft and make it the edit target.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRecord` if no record has that id.
    pub fn begin_edit(&mut self, id: RecordId) -> Result<(), RosterError> {
        let index = self.position_of(id).ok_or(RosterError::UnknownRecord(id))?;
        self.draft = self.entries[index].user.clone();
        self.editing = Some(id);
        Ok(())
    }

    /// Enter edit mode for the row at `position` of the sorted projection.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the projection has no such row.
    pub fn begin_edit_at(&mut self, position: usize) -> Result<(), RosterError> {
        let id = self.id_at(position)?;
        self.begin_edit(id)
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Create a record from the draft, or replace the edit target with it.
    ///
    /// # Errors
    ///
    /// Returns `Form` for blank required fields, `Store` if the snapshot
    /// write fails (the roster is left unchanged), and `UnknownRecord` if the
    /// edit target vanished.
    pub fn submit(&mut self, store: &impl RosterStore) -> Result<Submitted, RosterError> {
        let user = validate_draft(&self.draft)?;
        let mut next = self.entries.clone();
        let outcome = match self.editing {
            None => {
                let entry = RosterEntry::new(user);
                let id = entry.id;
                next.push(entry);
                Submitted::Created(id)
            }
            Some(id) => {
                let Some(index) = self.position_of(id) else {
                    self.reset_form();
                    return Err(RosterError::UnknownRecord(id));
                };
                next[index].user = user;
                Submitted::Updated(id)
            }
        };
        self.commit(store, next)?;
        self.reset_form();
        Ok(outcome)
    }

    /// Remove the record with `id`. Clears edit mode if it was the edit target.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRecord` or `Store`; on either the roster is unchanged.
    pub fn delete(&mut self, id: RecordId, store: &impl RosterStore) -> Result<User, RosterError> {
        let index = self.position_of(id).ok_or(RosterError::UnknownRecord(id))?;
        let mut next = self.entries.clone();
        let removed = next.remove(index);
        self.commit(store, next)?;
        if self.editing == Some(id) {
            self.reset_form();
        }
        Ok(removed.user)
    }

    /// Remove the row at `position` of the sorted projection.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the projection has no such row, or `Store`.
    pub fn delete_at(&mut self, position: usize, store: &impl RosterStore) -> Result<User, RosterError> {
        let id = self.id_at(position)?;
        self.delete(id, store)
    }

    /// Start over from the seed set. The seed overwrites the whole slot.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails; roster and slot are then unchanged.
    pub fn reset(&mut self, store: &impl RosterStore) -> Result<(), RosterError> {
        let next = default_users().into_iter().map(RosterEntry::new).collect();
        self.commit(store, next)?;
        self.reset_form();
        Ok(())
    }

    fn commit(&mut self, store: &impl RosterStore, next: Vec<RosterEntry>) -> Result<(), StoreError> {
        let users: Vec<User> = next.iter().map(|e| e.user.clone()).collect();
        store.write(&users)?;
        self.entries = next;
        Ok(())
    }

    fn reset_form(&mut self) {
        self.editing = None;
        self.draft = User::default();
    }

    fn position_of(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn id_at(&self, position: usize) -> Result<RecordId, RosterError> {
        self.projection()
            .get(position)
            .map(|row| row.id)
            .ok_or(RosterError::OutOfRange(position))
    }
}

fn project(entries: &[RosterEntry], key: SortKey) -> Vec<ProjectedEntry> {
    let mut rows: Vec<ProjectedEntry> = entries
        .iter()
        .enumerate()
        .map(|(index, e)| ProjectedEntry { index, id: e.id, user: e.user.clone() })
        .collect();
    rows.sort_by(|a, b| key.compare(&a.user, &b.user));
    rows
}

//! Persisted UI preferences (theme, language).
//!
//! A preference is a small enum stored in a durable key/value slot as
//! `{"state":{"<field>":<value>}}`. [`PreferenceStore`] owns the in-memory
//! value and performs serialize-then-write on every `set`; it never touches
//! the DOM. Instead `set` hands back a [`PreferenceChange`] whose effect the
//! caller applies.

mod slot;
mod storage;
mod store;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::enums::Language;

pub use slot::{decode_slot, encode_slot};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use store::PreferenceStore;

/// A named enum value that lives in its own storage slot.
pub trait Preference:
    Copy + Eq + Default + std::fmt::Debug + Serialize + DeserializeOwned + 'static
{
    /// Storage key of the slot, e.g. `"theme-storage"`.
    const STORAGE_KEY: &'static str;
    /// Field name inside `state`, e.g. `"theme"`.
    const FIELD: &'static str;

    /// Side effect the rendering layer must apply for this value.
    fn effect(self) -> PreferenceEffect;
}

/// Environment mutation requested by a preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceEffect {
    /// Toggle the root-level dark mode flag.
    DarkMode(bool),
    /// Switch the active translation catalog.
    Catalog(Language),
}

/// Result of [`PreferenceStore::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceChange<P> {
    pub value: P,
    pub effect: PreferenceEffect,
}

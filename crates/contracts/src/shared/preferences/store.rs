use super::{
    decode_slot, encode_slot, KeyValueStorage, Preference, PreferenceChange, PreferenceEffect,
};

/// One persisted preference value plus the backend it is written to.
///
/// The in-memory value and the stored slot converge synchronously on every
/// [`set`](Self::set). Loading never writes: a missing or corrupted slot
/// leaves storage untouched until the user picks a value.
#[derive(Debug, Clone)]
pub struct PreferenceStore<P, S> {
    value: P,
    storage: S,
}

impl<P: Preference, S: KeyValueStorage> PreferenceStore<P, S> {
    /// Rehydrates from `storage`, falling back to `P::default()`.
    pub fn load(storage: S) -> Self {
        let value = match storage.read(P::STORAGE_KEY) {
            Some(raw) => decode_slot::<P>(&raw).unwrap_or_else(|| {
                log::debug!(
                    "ignoring unreadable preference slot '{}', using {:?}",
                    P::STORAGE_KEY,
                    P::default()
                );
                P::default()
            }),
            None => P::default(),
        };
        Self { value, storage }
    }

    pub fn get(&self) -> P {
        self.value
    }

    /// Effect of the current value; applied once after rehydration.
    pub fn effect(&self) -> PreferenceEffect {
        self.value.effect()
    }

    /// Stores `value` in memory and in the durable slot.
    ///
    /// A failed write is logged and otherwise ignored: the session keeps the
    /// new value, it just will not survive a reload.
    pub fn set(&mut self, value: P) -> PreferenceChange<P> {
        self.value = value;

        let written = encode_slot(value)
            .and_then(|raw| self.storage.write(P::STORAGE_KEY, &raw));
        if let Err(err) = written {
            log::warn!("could not persist '{}': {}", P::STORAGE_KEY, err);
        }

        PreferenceChange {
            value,
            effect: value.effect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Language, Theme};
    use crate::shared::preferences::{MemoryStorage, StorageError};

    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn empty_storage_yields_defaults_without_writing() {
        let storage = MemoryStorage::new();
        let theme = PreferenceStore::<Theme, _>::load(storage.clone());
        let language = PreferenceStore::<Language, _>::load(storage.clone());

        assert_eq!(theme.get(), Theme::Light);
        assert_eq!(language.get(), Language::Es);
        assert!(storage.is_empty());
    }

    #[test]
    fn set_is_visible_immediately_and_after_reload() {
        let storage = MemoryStorage::new();
        let mut store = PreferenceStore::<Theme, _>::load(storage.clone());

        let change = store.set(Theme::Dark);
        assert_eq!(change.value, Theme::Dark);
        assert_eq!(change.effect, PreferenceEffect::DarkMode(true));
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(store.effect(), PreferenceEffect::DarkMode(true));

        let reloaded = PreferenceStore::<Theme, _>::load(storage);
        assert_eq!(reloaded.get(), Theme::Dark);
    }

    #[test]
    fn corrupted_slot_falls_back_and_is_left_alone() {
        let storage = MemoryStorage::with_entry("language-storage", "{oops");
        let store = PreferenceStore::<Language, _>::load(storage.clone());

        assert_eq!(store.get(), Language::Es);
        assert_eq!(storage.read("language-storage").as_deref(), Some("{oops"));
    }

    #[test]
    fn loading_is_idempotent() {
        let storage =
            MemoryStorage::with_entry("language-storage", r#"{"state":{"language":"en"}}"#);
        let first = PreferenceStore::<Language, _>::load(storage.clone());
        let second = PreferenceStore::<Language, _>::load(storage.clone());
        assert_eq!(first.get(), Language::En);
        assert_eq!(second.get(), Language::En);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn stores_are_independent() {
        let storage = MemoryStorage::new();
        let mut theme = PreferenceStore::<Theme, _>::load(storage.clone());
        let mut language = PreferenceStore::<Language, _>::load(storage.clone());

        theme.set(Theme::Dark);
        language.set(Language::En);
        theme.set(Theme::Light);

        assert_eq!(language.get(), Language::En);
        assert_eq!(
            PreferenceStore::<Language, _>::load(storage.clone()).get(),
            Language::En
        );
        assert_eq!(PreferenceStore::<Theme, _>::load(storage).get(), Theme::Light);
    }

    #[test]
    fn rejected_write_keeps_the_session_value() {
        let mut store = PreferenceStore::<Theme, _>::load(ReadOnlyStorage);
        let change = store.set(Theme::Dark);
        assert_eq!(change.value, Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn works_through_a_borrowed_backend() {
        let storage = MemoryStorage::new();
        let mut store = PreferenceStore::<Theme, _>::load(&storage);
        store.set(Theme::Dark);
        assert!(storage.contains("theme-storage"));
    }
}

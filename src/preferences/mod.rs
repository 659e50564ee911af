//! Shopper preferences: accessibility, language, profile, favorites and saved
//! addresses.
//!
//! [`Preferences`] is the explicit context object handed to the UI root. It
//! loads every namespace once at construction and writes a namespace back
//! whenever it changes. Storage problems are logged and never surface to the
//! caller: a corrupt record falls back to defaults, a failed write keeps the
//! in-memory value.

pub mod storage;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, instrument, warn};

pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

use crate::app_system::{AddressError, ProfileError};
use crate::domain::{
    AccessibilityPatch, AccessibilitySettings, AddressBook, Favorites, Language, UserProfile, UserProfilePatch,
};
use crate::speech::SpeechSynthesizer;

pub const ACCESSIBILITY_KEY: &str = "krave-mart-accessibility-settings";
pub const LANGUAGE_KEY: &str = "krave-mart-language";
pub const USER_KEY: &str = "krave-mart-user-data";
pub const FAVORITES_KEY: &str = "krave-mart-favorites";
pub const ADDRESSES_KEY: &str = "krave-mart-addresses";

pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    accessibility: AccessibilitySettings,
    language: Language,
    profile: UserProfile,
    favorites: Favorites,
    addresses: AddressBook,
}

impl Preferences {
    #[instrument(name = "load_preferences", skip_all)]
    pub fn load(store: Arc<dyn KeyValueStore>, synthesizer: Option<Arc<dyn SpeechSynthesizer>>) -> Self {
        let accessibility = load_json(store.as_ref(), ACCESSIBILITY_KEY);
        let profile = load_json(store.as_ref(), USER_KEY);
        let favorites = load_json(store.as_ref(), FAVORITES_KEY);
        let addresses = load_json(store.as_ref(), ADDRESSES_KEY);
        let language = match store.get(LANGUAGE_KEY) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|e| {
                warn!(key = LANGUAGE_KEY, error = %e, "Ignoring stored language");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!(key = LANGUAGE_KEY, error = %e, "Failed to load language preference");
                Language::default()
            }
        };
        debug!(%language, "Preferences loaded");
        Self {
            store,
            synthesizer,
            accessibility,
            language,
            profile,
            favorites,
            addresses,
        }
    }

    pub fn accessibility(&self) -> &AccessibilitySettings {
        &self.accessibility
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn addresses(&self) -> &AddressBook {
        &self.addresses
    }

    /// Where orders go: the default saved address, else the sign-up address.
    pub fn delivery_address(&self) -> &str {
        self.addresses
            .default_address()
            .map_or(self.profile.address.as_str(), |a| a.address.as_str())
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language.translate(key)
    }

    #[allow(dead_code)]
    pub fn update_accessibility(&mut self, patch: AccessibilityPatch) {
        self.accessibility.apply(patch);
        save_json(self.store.as_ref(), ACCESSIBILITY_KEY, &self.accessibility);
    }

    #[allow(dead_code)]
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        save_raw(self.store.as_ref(), LANGUAGE_KEY, language.code());
    }

    #[allow(dead_code)]
    pub fn update_profile(&mut self, patch: UserProfilePatch) {
        self.profile.apply(patch);
        save_json(self.store.as_ref(), USER_KEY, &self.profile);
    }

    /// Records the profile only when every field is filled in.
    pub fn sign_up(&mut self, profile: UserProfile) -> Result<(), ProfileError> {
        let missing = profile.missing_fields();
        if !missing.is_empty() {
            self.speak(self.t("fillAllFields"));
            return Err(ProfileError::MissingFields(missing));
        }
        self.profile = profile;
        save_json(self.store.as_ref(), USER_KEY, &self.profile);
        self.speak(self.t("startShopping"));
        Ok(())
    }

    /// Returns whether the product is a favorite afterwards.
    pub fn toggle_favorite(&mut self, product_id: &str) -> bool {
        let now_favorite = self.favorites.toggle(product_id);
        save_json(self.store.as_ref(), FAVORITES_KEY, &self.favorites);
        self.speak(self.t(if now_favorite {
            "addedToFavorites"
        } else {
            "removedFromFavorites"
        }));
        now_favorite
    }

    #[allow(dead_code)]
    pub fn remove_favorite(&mut self, product_id: &str) -> bool {
        if !self.favorites.remove(product_id) {
            return false;
        }
        save_json(self.store.as_ref(), FAVORITES_KEY, &self.favorites);
        self.speak(self.t("removedFromFavorites"));
        true
    }

    pub fn add_address(&mut self, label: &str, address: &str) -> Result<u64, AddressError> {
        match self.addresses.add(label, address) {
            Ok(id) => {
                save_json(self.store.as_ref(), ADDRESSES_KEY, &self.addresses);
                self.speak(self.t("addressAdded"));
                Ok(id)
            }
            Err(e) => {
                self.speak(self.t("fillAllFields"));
                Err(e)
            }
        }
    }

    #[allow(dead_code)]
    pub fn edit_address(&mut self, id: u64, address: &str) -> Result<(), AddressError> {
        self.addresses.edit(id, address)?;
        save_json(self.store.as_ref(), ADDRESSES_KEY, &self.addresses);
        self.speak(self.t("addressUpdated"));
        Ok(())
    }

    /// Deletes a saved address. In guided mode `confirm` is asked first and a
    /// `false` answer leaves the book untouched (`Ok(false)`).
    #[allow(dead_code)]
    pub fn delete_address(&mut self, id: u64, confirm: impl FnOnce() -> bool) -> Result<bool, AddressError> {
        if self.addresses.get(id).is_none() {
            return Err(AddressError::NotFound(id));
        }
        if self.accessibility.guided_mode && !confirm() {
            debug!(id, "Address deletion not confirmed");
            return Ok(false);
        }
        self.addresses.delete(id)?;
        save_json(self.store.as_ref(), ADDRESSES_KEY, &self.addresses);
        self.speak(self.t("addressDeleted"));
        Ok(true)
    }

    /// Narrates `text` if voice is enabled and a synthesizer is available,
    /// cutting off anything still being spoken.
    pub fn speak(&self, text: &str) {
        if !self.accessibility.voice_enabled {
            return;
        }
        if let Some(synthesizer) = &self.synthesizer {
            synthesizer.cancel();
            synthesizer.speak(text, self.language);
        }
    }
}

fn load_json<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match store.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key, error = %e, "Ignoring corrupt stored value");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "Failed to load stored value");
            T::default()
        }
    }
}

fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save_raw(store, key, &raw),
        Err(e) => error!(key, error = %e, "Failed to serialize value"),
    }
}

fn save_raw(store: &dyn KeyValueStore, key: &str, raw: &str) {
    if let Err(e) = store.set(key, raw) {
        error!(key, error = %e, "Failed to save value");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextSize;
    use crate::speech::testing::RecordingSynthesizer;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Poisoned)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[test]
    fn empty_store_yields_defaults() {
        let prefs = Preferences::load(Arc::new(MemoryStore::new()), None);
        assert_eq!(prefs.accessibility(), &AccessibilitySettings::default());
        assert_eq!(prefs.language(), Language::En);
        assert_eq!(prefs.profile(), &UserProfile::default());
        assert!(!prefs.is_rtl());
    }

    #[test]
    fn corrupt_values_fall_back_to_defaults() {
        let store = MemoryStore::new()
            .with_entry(ACCESSIBILITY_KEY, "{not json")
            .with_entry(LANGUAGE_KEY, "klingon")
            .with_entry(USER_KEY, "[1,2,3]");
        let prefs = Preferences::load(Arc::new(store), None);
        assert_eq!(prefs.accessibility(), &AccessibilitySettings::default());
        assert_eq!(prefs.language(), Language::En);
        assert_eq!(prefs.profile(), &UserProfile::default());
    }

    #[test]
    fn unreadable_and_unwritable_store_is_not_fatal() {
        let mut prefs = Preferences::load(Arc::new(BrokenStore), None);
        prefs.set_language(Language::Ur);
        assert_eq!(prefs.language(), Language::Ur);
    }

    #[test]
    fn changes_are_written_and_reloaded() {
        let store = Arc::new(MemoryStore::new());
        let mut prefs = Preferences::load(store.clone(), None);
        prefs.set_language(Language::Ur);
        prefs.update_accessibility(AccessibilityPatch {
            text_size: Some(TextSize::Normal),
            dark_mode: Some(true),
            ..Default::default()
        });
        prefs.update_profile(UserProfilePatch {
            name: Some("Bilal".into()),
            ..Default::default()
        });

        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("ur"));

        let reloaded = Preferences::load(store, None);
        assert_eq!(reloaded.language(), Language::Ur);
        assert!(reloaded.is_rtl());
        assert_eq!(reloaded.accessibility().text_size, TextSize::Normal);
        assert!(reloaded.accessibility().dark_mode);
        assert_eq!(reloaded.profile().name, "Bilal");
        assert_eq!(reloaded.t("total"), "کل");
    }

    #[test]
    fn sign_up_requires_every_field() {
        let store = Arc::new(MemoryStore::new());
        let mut prefs = Preferences::load(store.clone(), None);

        let err = prefs.sign_up(UserProfile::new("Sana", "", "Clifton Block 8")).unwrap_err();
        assert_eq!(err, ProfileError::MissingFields(vec!["phone"]));
        assert_eq!(store.get(USER_KEY).unwrap(), None);

        prefs
            .sign_up(UserProfile::new("Sana", "0300 1234567", "Clifton Block 8"))
            .unwrap();
        assert_eq!(prefs.profile().phone, "0300 1234567");
        assert!(store.get(USER_KEY).unwrap().is_some());
    }

    #[test]
    fn speech_respects_voice_setting_and_cancels_first() {
        let synth = Arc::new(RecordingSynthesizer::default());
        let mut prefs = Preferences::load(Arc::new(MemoryStore::new()), Some(synth.clone() as Arc<dyn SpeechSynthesizer>));

        prefs.speak("Voucher SAVE20 applied");
        assert_eq!(synth.calls(), ["<cancel>", "Voucher SAVE20 applied"]);

        prefs.update_accessibility(AccessibilityPatch {
            voice_enabled: Some(false),
            ..Default::default()
        });
        prefs.speak("silent");
        assert_eq!(synth.calls().len(), 2);
    }

    #[test]
    fn favorites_persist_and_are_announced() {
        let store = Arc::new(MemoryStore::new());
        let synth = Arc::new(RecordingSynthesizer::default());
        let mut prefs = Preferences::load(store.clone(), Some(synth.clone() as Arc<dyn SpeechSynthesizer>));

        assert!(prefs.toggle_favorite("p3"));
        assert!(prefs.toggle_favorite("p1"));
        assert!(!prefs.toggle_favorite("p3"));
        assert!(!prefs.remove_favorite("p9"));
        assert_eq!(
            synth.calls(),
            [
                "<cancel>",
                "Added to favorites",
                "<cancel>",
                "Added to favorites",
                "<cancel>",
                "Removed from favorites",
            ]
        );

        let reloaded = Preferences::load(store.clone(), None);
        assert_eq!(reloaded.favorites().product_ids(), ["p1"]);

        prefs.remove_favorite("p1");
        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn saved_addresses_persist_and_drive_the_delivery_address() {
        let store = Arc::new(MemoryStore::new());
        let mut prefs = Preferences::load(store.clone(), None);
        prefs.update_profile(UserProfilePatch {
            address: Some("Clifton Block 8".into()),
            ..Default::default()
        });
        assert_eq!(prefs.delivery_address(), "Clifton Block 8");

        assert_eq!(
            prefs.add_address("", "Somewhere"),
            Err(AddressError::MissingFields(vec!["label"]))
        );
        let home = prefs.add_address("Home", "123 Main Street, Karachi").unwrap();
        let office = prefs.add_address("Office", "456 Business Park, Lahore").unwrap();
        prefs.edit_address(home, "12 Garden Road, Karachi").unwrap();
        assert_eq!(prefs.delivery_address(), "12 Garden Road, Karachi");

        assert_eq!(prefs.delete_address(home, || unreachable!()), Ok(true));
        assert_eq!(prefs.delivery_address(), "456 Business Park, Lahore");

        let reloaded = Preferences::load(store, None);
        assert_eq!(reloaded.addresses().default_address().map(|a| a.id), Some(office));
        assert_eq!(reloaded.addresses().all().len(), 1);
    }

    #[test]
    fn guided_mode_asks_before_deleting_an_address() {
        let mut prefs = Preferences::load(Arc::new(MemoryStore::new()), None);
        prefs.update_accessibility(AccessibilityPatch {
            guided_mode: Some(true),
            ..Default::default()
        });
        let home = prefs.add_address("Home", "123 Main Street, Karachi").unwrap();

        assert_eq!(prefs.delete_address(home, || false), Ok(false));
        assert!(prefs.addresses().get(home).is_some());

        assert_eq!(prefs.delete_address(home, || true), Ok(true));
        assert!(prefs.addresses().is_empty());
        assert_eq!(prefs.delete_address(home, || true), Err(AddressError::NotFound(home)));
    }

    #[test]
    fn speech_without_capability_is_a_no_op() {
        let prefs = Preferences::load(Arc::new(MemoryStore::new()), None);
        prefs.speak("nobody hears this");
    }
}

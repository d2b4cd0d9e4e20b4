use appshell_core::{
    AppSettings, DataUsage, KeyValueStorage, Platform, PlatformError, PlatformResult,
    SettingsStore, SETTINGS_STORAGE_KEY,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Default)]
struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    fn seeded(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> PlatformResult<Option<String>> {
        if self.fail_reads {
            return Err(PlatformError::Backend("storage offline".to_string()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> PlatformResult<()> {
        if self.fail_writes {
            return Err(PlatformError::Backend("storage offline".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PlatformResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

fn store_with(storage: Arc<MemoryStorage>) -> SettingsStore {
    let platform = Platform::detached().with_storage(storage);
    SettingsStore::new(&platform)
}

fn custom_settings() -> AppSettings {
    let mut settings = AppSettings::default();
    settings.dark_mode = true;
    settings.language = "de".to_string();
    settings.auto_sync = false;
    settings.data_usage = DataUsage::High;
    settings
}

#[test]
fn save_then_fresh_load_round_trips() {
    let storage = Arc::new(MemoryStorage::default());

    let mut writer = store_with(Arc::clone(&storage));
    writer.save(custom_settings());

    let mut reader = store_with(storage);
    reader.load();
    assert_eq!(*reader.current(), custom_settings());
}

#[test]
fn save_persists_under_the_settings_key() {
    let storage = Arc::new(MemoryStorage::default());
    let mut store = store_with(Arc::clone(&storage));

    store.save(custom_settings());

    let entries = storage.entries.borrow();
    let raw = entries
        .get(SETTINGS_STORAGE_KEY)
        .expect("settings should be stored under the documented key");
    let decoded: AppSettings = serde_json::from_str(raw).expect("stored payload should decode");
    assert_eq!(decoded, custom_settings());
}

#[test]
fn load_with_corrupted_payload_keeps_prior_state() {
    let storage = Arc::new(MemoryStorage::seeded(SETTINGS_STORAGE_KEY, "{not json"));
    let mut store = store_with(storage);

    store.replace(custom_settings());
    store.load();

    assert_eq!(*store.current(), custom_settings());
}

#[test]
fn load_with_corrupted_payload_keeps_defaults_on_fresh_store() {
    let storage = Arc::new(MemoryStorage::seeded(SETTINGS_STORAGE_KEY, "]["));
    let mut store = store_with(storage);

    store.load();
    assert_eq!(*store.current(), AppSettings::default());
}

#[test]
fn partial_payload_merges_over_defaults() {
    let storage = Arc::new(MemoryStorage::seeded(
        SETTINGS_STORAGE_KEY,
        r#"{"dark_mode":true,"data_usage":"low"}"#,
    ));
    let mut store = store_with(storage);

    store.load();

    let current = store.current();
    assert!(current.dark_mode);
    assert_eq!(current.data_usage, DataUsage::Low);
    assert!(current.notifications_enabled);
    assert_eq!(current.language, "en");
}

#[test]
fn unknown_persisted_fields_are_tolerated() {
    let storage = Arc::new(MemoryStorage::seeded(
        SETTINGS_STORAGE_KEY,
        r#"{"language":"fr","legacy_toolbar":"compact"}"#,
    ));
    let mut store = store_with(storage);

    store.load();
    assert_eq!(store.current().language, "fr");
}

#[test]
fn read_failure_is_absorbed() {
    let storage = Arc::new(MemoryStorage {
        fail_reads: true,
        ..MemoryStorage::default()
    });
    let mut store = store_with(storage);

    store.load();
    assert_eq!(*store.current(), AppSettings::default());
}

#[test]
fn write_failure_still_replaces_memory() {
    let storage = Arc::new(MemoryStorage {
        fail_writes: true,
        ..MemoryStorage::default()
    });
    let mut store = store_with(Arc::clone(&storage));

    store.save(custom_settings());

    assert_eq!(*store.current(), custom_settings());
    assert!(storage.entries.borrow().is_empty());
}

#[test]
fn replace_and_update_do_not_persist() {
    let storage = Arc::new(MemoryStorage::default());
    let mut store = store_with(Arc::clone(&storage));

    store.replace(custom_settings());
    store.update(|settings| settings.offline_mode = false);

    assert!(!store.current().offline_mode);
    assert!(storage.entries.borrow().is_empty());
}

#[test]
fn subscribers_observe_the_saved_record() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut store = SettingsStore::detached();
    store.subscribe(move |settings| sink.borrow_mut().push(settings.language.clone()));

    store.save(custom_settings());
    store.update(|settings| settings.language = "pt".to_string());

    assert_eq!(*seen.borrow(), vec!["de".to_string(), "pt".to_string()]);
}

use bingo_core::{KeyValueStore, NoopStore, StorageError};
use wasm_bindgen::JsValue;

/// `window.localStorage` behind the core's store interface.
///
/// Values are stored as raw strings through `web_sys::Storage`. gloo's
/// `LocalStorage` runs every value through `serde_json`, which would quote the
/// already encoded snapshot a second time.
pub(crate) struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// Returns `None` outside a browser or when storage is disabled.
    pub(crate) fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(err) => {
                log::warn!("localStorage access denied: {:?}", err);
                None
            }
        }
    }
}

fn backend_error(err: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", err))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(backend_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(backend_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(backend_error)
    }
}

/// Picks the persistent store when the browser offers one, otherwise a store
/// that keeps nothing.
pub(crate) fn select_store() -> Box<dyn KeyValueStore> {
    match BrowserStore::open() {
        Some(store) => {
            log::debug!("saving games to localStorage");
            Box::new(store)
        }
        None => {
            log::warn!("localStorage unavailable, games will not be saved");
            Box::new(NoopStore)
        }
    }
}

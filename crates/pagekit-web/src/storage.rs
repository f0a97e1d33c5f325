//! Browser-backed preference storage and the system color-scheme signal.

use pagekit_core::{MemoryStorage, PreferenceStorage, Result, UiError};
use web_sys::{MediaQueryList, Storage, Window};

use crate::dom::JsResultExt;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage` as a [`PreferenceStorage`].
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Result<Self> {
        let storage = window
            .local_storage()
            .op("localStorage")?
            .ok_or_else(|| UiError::unsupported("localStorage"))?;
        Ok(Self { storage })
    }
}

impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).op("localStorage write")
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.storage.remove_item(key).op("localStorage remove") {
            log::debug!("{err}");
        }
    }
}

/// `localStorage` when the browser allows it, otherwise a session-only store.
pub fn preference_storage(window: &Window) -> Box<dyn PreferenceStorage> {
    match LocalStorage::open(window) {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            log::info!("theme preference kept in memory: {err}");
            Box::new(MemoryStorage::new())
        }
    }
}

/// The `prefers-color-scheme: dark` media query.
pub fn dark_scheme_query(window: &Window) -> Result<MediaQueryList> {
    window
        .match_media(DARK_SCHEME_QUERY)
        .op("matchMedia")?
        .ok_or_else(|| UiError::unsupported("matchMedia"))
}

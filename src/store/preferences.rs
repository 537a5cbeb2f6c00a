//! Preferences Store
//!
//! Holds the single backend-owned settings object. `None` until the first
//! successful `get_preferences` round-trip.

use crate::model::Preferences;
use tokio::sync::watch;

pub struct PreferencesStore {
    preferences: watch::Sender<Option<Preferences>>,
}

impl PreferencesStore {
    pub fn new() -> Self {
        Self {
            preferences: watch::channel(None).0,
        }
    }

    pub fn get(&self) -> Option<Preferences> {
        self.preferences.borrow().clone()
    }

    pub fn set(&self, preferences: Preferences) {
        self.preferences.send_replace(Some(preferences));
    }

    pub fn watch(&self) -> watch::Receiver<Option<Preferences>> {
        self.preferences.subscribe()
    }
}

impl Default for PreferencesStore {
    fn default() -> Self {
        Self::new()
    }
}

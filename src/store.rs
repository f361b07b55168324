//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: helpers write
//! through the field they change. The state is the session's only copy of
//! the chore list; nothing is persisted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Chore, TouchedChore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, PartialEq, Store)]
pub struct AppState {
    /// Chores in the order they were loaded or appended
    pub chores: Vec<Chore>,
    /// True only while the initial load is in flight
    pub loading: bool,
    /// Single banner message, last write wins
    pub error: Option<String>,
    /// Whether the creation modal is open
    pub show_create: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            chores: Vec::new(),
            loading: true,
            error: None,
            show_create: false,
        }
    }
}

impl AppState {
    /// Replace the list wholesale with what the server returned
    pub fn replace_chores(&mut self, chores: Vec<Chore>) {
        self.chores = chores;
    }

    pub fn append_chore(&mut self, chore: Chore) {
        self.chores.push(chore);
    }

    /// Remove a chore by ID; returns false when it was not in the list
    pub fn remove_chore(&mut self, id: &str) -> bool {
        remove_chore_from(&mut self.chores, id)
    }

    /// Overlay a touch response; returns false when the chore is gone
    pub fn touch_chore(&mut self, id: &str, touched: TouchedChore) -> bool {
        touch_chore_in(&mut self.chores, id, touched)
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

fn remove_chore_from(chores: &mut Vec<Chore>, id: &str) -> bool {
    let before = chores.len();
    chores.retain(|chore| chore.id != id);
    chores.len() != before
}

fn touch_chore_in(chores: &mut [Chore], id: &str, touched: TouchedChore) -> bool {
    match chores.iter_mut().find(|chore| chore.id == id) {
        Some(chore) => {
            chore.apply_touch(touched);
            true
        }
        None => false,
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the chore list
pub fn store_replace_chores(store: &AppStore, chores: Vec<Chore>) {
    *store.chores().write() = chores;
}

/// Append a chore at the end of the list
pub fn store_append_chore(store: &AppStore, chore: Chore) {
    store.chores().write().push(chore);
}

/// Remove a chore from the store by ID
pub fn store_remove_chore(store: &AppStore, id: &str) -> bool {
    remove_chore_from(&mut store.chores().write(), id)
}

/// Overlay a touch response onto the chore with this ID
pub fn store_touch_chore(store: &AppStore, id: &str, touched: TouchedChore) -> bool {
    touch_chore_in(&mut store.chores().write(), id, touched)
}

pub fn store_set_error(store: &AppStore, message: Option<String>) {
    *store.error().write() = message;
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    *store.loading().write() = loading;
}

pub fn store_set_show_create(store: &AppStore, open: bool) {
    *store.show_create().write() = open;
}

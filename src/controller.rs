//! Chore Controller
//!
//! Orchestrates load/create/delete/touch against the remote API and applies
//! each response to the in-memory state as it arrives. Operations are not
//! serialized against each other and in-flight requests are never cancelled.

use std::rc::Rc;

use crate::api::{ApiError, ChoreApi};
use crate::models::{Chore, NewChore, TouchedChore};
use crate::store::{
    store_append_chore, store_remove_chore, store_replace_chores, store_set_error,
    store_set_loading, store_set_show_create, store_touch_chore, AppStore,
};

pub const LOAD_FAILED: &str = "Failed to load chores";
pub const CREATE_FAILED: &str = "Failed to create chore";
pub const DELETE_FAILED: &str = "Failed to delete chore";
pub const TOUCH_FAILED: &str = "Failed to touch chore";

/// Something the controller can apply state changes to
pub trait StateHandle {
    fn replace_chores(&self, chores: Vec<Chore>);
    fn append_chore(&self, chore: Chore);
    /// Returns false when the chore was not listed
    fn remove_chore(&self, id: &str) -> bool;
    /// Returns false when the chore was not listed
    fn touch_chore(&self, id: &str, touched: TouchedChore) -> bool;
    fn set_error(&self, message: Option<String>);
    fn set_loading(&self, loading: bool);
    fn set_show_create(&self, open: bool);
}

impl StateHandle for AppStore {
    fn replace_chores(&self, chores: Vec<Chore>) {
        store_replace_chores(self, chores);
    }

    fn append_chore(&self, chore: Chore) {
        store_append_chore(self, chore);
    }

    fn remove_chore(&self, id: &str) -> bool {
        store_remove_chore(self, id)
    }

    fn touch_chore(&self, id: &str, touched: TouchedChore) -> bool {
        store_touch_chore(self, id, touched)
    }

    fn set_error(&self, message: Option<String>) {
        store_set_error(self, message);
    }

    fn set_loading(&self, loading: bool) {
        store_set_loading(self, loading);
    }

    fn set_show_create(&self, open: bool) {
        store_set_show_create(self, open);
    }
}

pub struct ChoreController<A, S> {
    api: Rc<A>,
    state: S,
}

impl<A, S: Clone> Clone for ChoreController<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
        }
    }
}

impl<A: ChoreApi, S: StateHandle> ChoreController<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self {
            api: Rc::new(api),
            state,
        }
    }

    /// Initial fetch of every chore
    pub async fn load(&self) {
        match self.api.list_chores().await {
            Ok(chores) => {
                tracing::info!(count = chores.len(), "loaded chores");
                self.state.replace_chores(chores);
            }
            Err(e) => {
                tracing::error!(error = %e, "loading chores failed");
                self.fail(LOAD_FAILED);
            }
        }
        self.state.set_loading(false);
    }

    /// Create, then fetch the stored chore by its new ID and append it
    pub async fn create(&self, payload: NewChore) {
        match self.create_and_fetch(&payload).await {
            Ok(chore) => {
                tracing::info!(id = %chore.id, name = %chore.name, "created chore");
                self.state.append_chore(chore);
                self.state.set_show_create(false);
            }
            Err(e) => {
                tracing::error!(error = %e, name = %payload.name, "creating chore failed");
                self.fail(CREATE_FAILED);
            }
        }
    }

    async fn create_and_fetch(&self, payload: &NewChore) -> Result<Chore, ApiError> {
        let created = self.api.create_chore(payload).await?;
        self.api.get_chore(&created.id).await
    }

    /// Delete a chore and drop it locally
    ///
    /// The response status is not checked: a server-side refusal still
    /// removes the chore from the list. Only a request that never
    /// completed counts as a failure.
    pub async fn delete(&self, id: &str) {
        match self.api.delete_chore(id).await {
            Ok(status) => {
                if !(200..300).contains(&status) {
                    tracing::warn!(%id, status, "delete answered with an error status; removing locally anyway");
                }
                self.state.remove_chore(id);
            }
            Err(e) => {
                tracing::error!(error = %e, %id, "deleting chore failed");
                self.fail(DELETE_FAILED);
            }
        }
    }

    /// Ask the server to recompute a chore's due date
    pub async fn touch(&self, id: &str) {
        match self.api.touch_chore(id).await {
            Ok(touched) => {
                if !self.state.touch_chore(id, touched) {
                    tracing::debug!(%id, "touched chore is no longer listed");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, %id, "touching chore failed");
                self.fail(TOUCH_FAILED);
            }
        }
    }

    pub fn open_create(&self) {
        self.state.set_show_create(true);
    }

    pub fn close_create(&self) {
        self.state.set_show_create(false);
    }

    pub fn dismiss_error(&self) {
        self.state.set_error(None);
    }

    fn fail(&self, message: &str) {
        self.state.set_error(Some(message.to_string()));
    }
}

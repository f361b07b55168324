//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpChoreApi;
use crate::controller::ChoreController;
use crate::countdown::Ticker;
use crate::models::NewChore;
use crate::store::AppStore;

type Controller = ChoreController<HttpChoreApi, AppStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Chore list, loading flag, error banner, modal state
    pub store: AppStore,
    /// Shared countdown tick
    pub ticker: Ticker,
    /// Controller lives on the UI thread only
    controller: StoredValue<Controller, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, ticker: Ticker, controller: Controller) -> Self {
        Self {
            store,
            ticker,
            controller: StoredValue::new_local(controller),
        }
    }

    fn controller(&self) -> Controller {
        self.controller.get_value()
    }

    /// Fetch all chores from the backend
    pub fn load(&self) {
        let controller = self.controller();
        spawn_local(async move { controller.load().await });
    }

    pub fn create(&self, payload: NewChore) {
        let controller = self.controller();
        spawn_local(async move { controller.create(payload).await });
    }

    pub fn delete(&self, id: String) {
        let controller = self.controller();
        spawn_local(async move { controller.delete(&id).await });
    }

    pub fn touch(&self, id: String) {
        let controller = self.controller();
        spawn_local(async move { controller.touch(&id).await });
    }

    pub fn open_create(&self) {
        self.controller.with_value(|c| c.open_create());
    }

    pub fn close_create(&self) {
        self.controller.with_value(|c| c.close_create());
    }

    pub fn dismiss_error(&self) {
        self.controller.with_value(|c| c.dismiss_error());
    }
}

//! Chore App
//!
//! Page layout: title, create button, creation modal, status lines and the
//! chore grid.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpChoreApi;
use crate::components::{chore_card_key, ChoreCard, CreateChoreForm, ErrorBanner};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::ChoreController;
use crate::countdown::Ticker;
use crate::models::NewChore;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let ticker = Ticker::new();
    let controller = ChoreController::new(HttpChoreApi::new(&config), store);
    let ctx = AppContext::new(store, ticker, controller);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Initial load, once on mount
    Effect::new(move |_| ctx.load());

    view! {
        <h1>"Chore App"</h1>

        <button class="create-button" on:click=move |_| ctx.open_create()>
            "+ Create Chore"
        </button>

        <Show when=move || store.show_create().get()>
            <CreateChoreForm
                on_create=move |payload: NewChore| ctx.create(payload)
                on_cancel=move |_: ()| ctx.close_create()
            />
        </Show>

        <Show when=move || store.loading().get()>
            <p>"Loading…"</p>
        </Show>
        <ErrorBanner />
        <Show when=move || !store.loading().get() && store.chores().with(|c| c.is_empty())>
            <p>"No chores yet"</p>
        </Show>

        <div class="chore-grid">
            <For
                each=move || store.chores().get()
                key=chore_card_key
                children=move |chore| view! { <ChoreCard chore=chore /> }
            />
        </div>
    }
}

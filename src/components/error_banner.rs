//! Error Banner Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Single transient error message with a dismiss button
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    move || {
        store.error().get().map(|message| {
            view! {
                <p class="error">
                    {message}
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>"×"</button>
                </p>
            }
        })
    }
}

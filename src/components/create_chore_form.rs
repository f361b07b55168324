//! Create Chore Form Component
//!
//! Modal form collecting a new chore. Performs no I/O itself: a valid
//! draft is handed to `on_create`.

use leptos::prelude::*;

use crate::form::ChoreDraft;
use crate::models::NewChore;

#[component]
pub fn CreateChoreForm(
    #[prop(into)] on_create: Callback<NewChore>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let defaults = ChoreDraft::default();
    let (name, set_name) = signal(defaults.name);
    let (description, set_description) = signal(defaults.description);
    let (frequency, set_frequency) = signal(defaults.frequency);
    let (due_date, set_due_date) = signal(defaults.due_date);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = ChoreDraft {
            name: name.get(),
            description: description.get(),
            frequency: frequency.get(),
            due_date: due_date.get(),
        };

        match draft.to_new_chore() {
            Ok(payload) => {
                set_form_error.set(None);
                on_create.run(payload);
            }
            Err(e) => {
                tracing::debug!(error = %e, "chore draft rejected");
                set_form_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="modal">
            <form class="create-form" on:submit=submit>
                <h2>"Create Chore"</h2>

                <label>
                    "Name"
                    <input
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Frequency (days)"
                    <input
                        type="number"
                        min="1"
                        step="1"
                        required=true
                        prop:value=move || frequency.get()
                        on:input=move |ev| set_frequency.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Due date"
                    <input
                        type="date"
                        required=true
                        prop:value=move || due_date.get()
                        on:input=move |ev| set_due_date.set(event_target_value(&ev))
                    />
                </label>

                {move || form_error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                <div class="buttons">
                    <button type="submit">"Create"</button>
                    <button type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}

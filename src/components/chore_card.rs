//! Chore Card Component
//!
//! One chore in the grid with its live countdown.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::countdown::Countdown;
use crate::models::Chore;
use crate::time::format_local_date_time;

/// Identity of a rendered card
///
/// Includes the dates a touch rewrites, so a touched chore remounts and its
/// countdown re-subscribes against the new due instant.
pub fn chore_card_key(chore: &Chore) -> (String, String, String) {
    (
        chore.id.clone(),
        chore.due_date.clone(),
        chore.updated_date.clone(),
    )
}

/// A single chore card
///
/// The countdown follows the shared ticker for as long as the card is
/// mounted.
#[component]
pub fn ChoreCard(chore: Chore) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ticker = ctx.ticker;

    let due = chore.due_instant();
    ticker.subscribe(&chore.id);
    let subscribed_id = chore.id.clone();
    on_cleanup(move || ticker.unsubscribe(&subscribed_id));

    let now = ticker.now();
    let countdown = Memo::new(move |_| Countdown::until(due, now.get()));

    let touch_id = chore.id.clone();
    let delete_id = chore.id.clone();
    let due_label = format!("Due by {}", format_local_date_time(&chore.due_date));

    view! {
        <div class="chore">
            <h3>{chore.name}</h3>

            {chore.description.filter(|d| !d.is_empty()).map(|d| view! { <p>{d}</p> })}

            <p class="countdown">{move || countdown.get().to_string()}</p>

            <p class="due-date">{due_label}</p>

            <div class="buttons">
                <button class="touch-button" on:click=move |_| ctx.touch(touch_id.clone())>
                    "Touch"
                </button>
                <button class="delete-button" on:click=move |_| ctx.delete(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TouchedChore;
    use crate::store::AppState;

    fn make_chore(id: &str) -> Chore {
        Chore {
            id: id.to_string(),
            name: format!("Chore {}", id),
            description: None,
            frequency: 3,
            due_date: "2024-06-01T23:59:59.999Z".to_string(),
            created_date: "2024-05-01T00:00:00.000Z".to_string(),
            updated_date: "2024-05-01T00:00:00.000Z".to_string(),
        }
    }

    fn keys(state: &AppState) -> Vec<(String, String, String)> {
        state.chores.iter().map(chore_card_key).collect()
    }

    #[test]
    fn test_touch_changes_card_key() {
        let mut state = AppState::default();
        state.replace_chores(vec![make_chore("1"), make_chore("2")]);
        let before = keys(&state);

        state.touch_chore(
            "1",
            TouchedChore {
                due_date: "2024-06-04T23:59:59.999Z".to_string(),
                updated_date: "2024-06-01T09:00:00.000Z".to_string(),
            },
        );
        let after = keys(&state);

        assert_ne!(after[0], before[0]);
        assert_eq!(after[0].0, before[0].0);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn test_remove_and_append_keep_other_keys() {
        let mut state = AppState::default();
        state.replace_chores(vec![make_chore("1"), make_chore("2"), make_chore("3")]);
        let before = keys(&state);

        state.remove_chore("2");
        state.append_chore(make_chore("4"));
        let after = keys(&state);

        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
        assert_eq!(after[2], chore_card_key(&make_chore("4")));
    }
}

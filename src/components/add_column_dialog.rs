//! Add Column Dialog Component
//!
//! Modal asking for a new column title.

use leptos::ev::{KeyboardEvent, MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::store::{store_close_add_column, store_submit_add_column, use_board_store, BoardStateStoreFields};

#[component]
pub fn AddColumnDialog() -> impl IntoView {
    let store = use_board_store();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store_submit_add_column(&store);
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            store_close_add_column(&store);
        }
    };

    let close = move |_: MouseEvent| store_close_add_column(&store);

    // The input mounts each time the dialog opens, long after page load
    let title_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = title_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <Show when=move || store.add_column_open().get()>
            <div class="modal-backdrop" on:click=close>
                <form
                    class="modal"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                    on:submit=on_submit
                    on:keydown=on_keydown
                >
                    <h2 class="modal-title">"Add New Column"</h2>
                    <label class="field-label" for="column-title">"Column Title"</label>
                    <input
                        id="column-title"
                        type="text"
                        node_ref=title_ref
                        prop:value=move || store.new_column_title().get()
                        on:input=move |ev| store.new_column_title().set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close>"Cancel"</button>
                        <button type="submit" class="btn-primary">"Add"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

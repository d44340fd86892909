//! Board Column Component
//!
//! One column: header with delete, new-item input, and its cards.
//! The column body is itself a drop target, so empty columns accept drops.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::components::ItemCard;
use crate::models::{ColumnId, ItemId};
use crate::store::{store_add_item, store_delete_column, use_board_store, BoardStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn BoardColumn(column_id: ColumnId, title: String) -> impl IntoView {
    let store = use_board_store();
    let dnd = expect_context::<DndSignals<ItemId>>();

    let (new_item, set_new_item) = signal(String::new());

    let items = {
        let column_id = column_id.clone();
        move || {
            store.board().with(|board| {
                board
                    .column(&column_id)
                    .map(|col| col.items.clone())
                    .unwrap_or_default()
            })
        }
    };

    let item_count = {
        let column_id = column_id.clone();
        move || store.board().with(|board| board.column(&column_id).map_or(0, |col| col.items.len()))
    };

    let add_item = {
        let column_id = column_id.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let text = new_item.get_untracked();
            if text.trim().is_empty() { return; }
            if store_add_item(&store, &column_id, &text).is_some() {
                set_new_item.set(String::new());
            }
        }
    };

    let delete_column = {
        let column_id = column_id.clone();
        move |_: MouseEvent| store_delete_column(&store, &column_id)
    };

    let on_mouseenter = make_on_target_mouseenter(dnd, column_id.clone());
    let on_mouseleave = make_on_target_mouseleave(dnd, column_id.clone(), None);

    let column_class = {
        let column_id = column_id.clone();
        move || {
            let mut c = String::from("board-column");
            if dnd.over_id().as_deref() == Some(column_id.as_str()) { c.push_str(" drop-target"); }
            c
        }
    };

    view! {
        <section
            class=column_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <header class="column-header">
                <h3>{title}</h3>
                <span class="item-count">{item_count}</span>
                <button class="icon-btn delete-btn" title="Delete column" on:click=delete_column>"🗑"</button>
            </header>

            <form class="new-item-form" on:submit=add_item>
                <input
                    type="text"
                    placeholder="New task"
                    prop:value=move || new_item.get()
                    on:input=move |ev| set_new_item.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">"Add Task"</button>
            </form>

            <div class="column-content">
                <For
                    each=items
                    key=|item| item.id.clone()
                    children=move |item| {
                        view! { <ItemCard item=item column_id=column_id.clone() /> }
                    }
                />
            </div>
        </section>
    }
}

//! Item Card Component
//!
//! A single draggable card with an inline edit toggle.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::edit::EditMode;
use crate::models::{ColumnId, Item, ItemId};
use crate::store::{store_delete_item, store_edit_item, store_item_content, use_board_store, BoardStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn ItemCard(item: Item, column_id: ColumnId) -> impl IntoView {
    let store = use_board_store();
    let dnd = expect_context::<DndSignals<ItemId>>();

    let mode = RwSignal::new(EditMode::Viewing);
    let is_editing = Memo::new(move |_| mode.with(|m| m.is_editing()));

    // Focus the editor as soon as it mounts
    let editor_ref = NodeRef::<leptos::html::Textarea>::new();
    Effect::new(move |_| {
        if let Some(editor) = editor_ref.get() {
            let _ = editor.focus();
        }
    });

    let id = StoredValue::new(item.id);

    // Live content from the store; the prop is only the first render
    let content = Memo::new(move |_| {
        id.with_value(|id| store_item_content(&store, id))
            .unwrap_or_else(|| item.content.clone())
    });

    // DnD handlers: the grip starts a drag (mouse or keyboard), the whole card is a target
    let on_mousedown = make_on_mousedown(dnd, id.get_value());
    let on_handle_keydown = make_on_handle_keydown(dnd, id.get_value(), move || {
        store.board().with_untracked(|board| board.layout())
    });
    let on_mouseenter = make_on_target_mouseenter(dnd, id.get_value());
    let on_mouseleave = make_on_target_mouseleave(dnd, id.get_value(), Some(column_id));
    let is_lifted = move || dnd.active_id().as_ref() == Some(&id.get_value());

    let card_class = move || {
        let mut c = String::from("item-card");
        let current = id.get_value();
        if dnd.active_id().as_ref() == Some(&current) { c.push_str(" dragging"); }
        if dnd.over_id().as_ref() == Some(&current) { c.push_str(" drop-target"); }
        if is_editing.get() { c.push_str(" editing"); }
        c
    };

    let begin_edit = move |_: MouseEvent| content.with_untracked(|text| mode.set(EditMode::begin(text)));
    let cancel_edit = move |_: MouseEvent| mode.update(|m| m.cancel());
    let save_edit = move |_: MouseEvent| {
        let committed = mode.try_update(|m| m.commit()).flatten();
        id.with_value(|id| store_edit_item(&store, id, committed.as_deref()));
    };
    let delete = move |_: MouseEvent| id.with_value(|id| store_delete_item(&store, id));

    view! {
        <div
            class=card_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <span
                class="drag-handle"
                title="Drag to move, or press Space and use the arrow keys"
                tabindex="0"
                role="button"
                aria-pressed=move || is_lifted().to_string()
                on:mousedown=on_mousedown
                on:keydown=on_handle_keydown
            >
                "⠿"
            </span>

            <div class="item-body">
                <Show
                    when=move || is_editing.get()
                    fallback=move || view! { <p class="item-content">{move || content.get()}</p> }
                >
                    <textarea
                        class="item-editor"
                        rows="3"
                        node_ref=editor_ref
                        prop:value=move || mode.with(|m| m.buffer().unwrap_or_default().to_string())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            mode.update(|m| m.set_buffer(text));
                        }
                    />
                </Show>
            </div>

            <div class="item-actions">
                <Show
                    when=move || is_editing.get()
                    fallback=move || view! {
                        <button class="icon-btn" title="Edit" on:click=begin_edit>"✎"</button>
                        <button class="icon-btn delete-btn" title="Delete" on:click=delete>"×"</button>
                    }
                >
                    <button class="icon-btn" title="Save" on:click=save_edit>"✓"</button>
                    <button class="icon-btn" title="Cancel" on:click=cancel_edit>"✗"</button>
                </Show>
            </div>
        </div>
    }
}

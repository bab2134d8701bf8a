use fridge_dashboard::{
    relays::{toggle_relay, RelayBoard},
    Generation, HttpApi, RootState,
};
use sycamore::{futures::spawn_local_scoped, prelude::*};
use web_sys::Event;

use crate::helpers::SignalStore;

#[derive(Prop)]
pub struct RelayPanelProps<'a> {
    pub board: &'a Signal<RelayBoard>,
    pub generation: &'a Generation,
}

/// One button per relay. The buttons are built once; only their class and state
/// follow the board, so a toggle in flight lives as long as the panel does.
#[component]
pub fn RelayPanel<'a>(cx: Scope<'a>, props: RelayPanelProps<'a>) -> View<DomNode> {
    let api = use_context::<HttpApi>(cx);
    let root = use_context::<Signal<RootState>>(cx);
    let RelayPanelProps { board, generation } = props;

    let disabled = create_selector(cx, || root.get().is_loading);

    let buttons = board
        .get_untracked()
        .buttons()
        .into_iter()
        .map(|button| {
            let id = button.id;
            let label = button.label;
            let class = create_selector(cx, move || board.get().button(id).class(*disabled.get()));
            let toggle = move |_e: Event| {
                spawn_local_scoped(cx, async move {
                    toggle_relay(api, &SignalStore(board), generation, id).await;
                });
            };

            view! { cx,
                button(class=class.get().to_string(), disabled=*disabled.get(), on:click=toggle) {
                    (label.clone())
                }
            }
        })
        .collect();
    let buttons = View::new_fragment(buttons);

    view! { cx,
        div(class="relay-panel") {
            (buttons)
        }
    }
}

use fridge_dashboard::{
    mode::{mode_button_label, sync_mode, toggle_mode},
    HttpApi, RootState,
};
use models::Mode;
use sycamore::{futures::spawn_local_scoped, prelude::*};
use web_sys::Event;

use crate::helpers::SignalStore;

#[component]
pub fn ModeSwitcher(cx: Scope) -> View<DomNode> {
    let api = use_context::<HttpApi>(cx);
    let root = use_context::<Signal<RootState>>(cx);
    let switching = create_signal(cx, false);

    // Sync mode from the device on mount
    spawn_local_scoped(cx, async move {
        sync_mode(api, &SignalStore(root)).await;
    });

    let label = create_selector(cx, || mode_button_label(root.get().mode, *switching.get()));
    let class = create_selector(cx, || match root.get().mode {
        Mode::Manual => "mode-button mode-manual",
        Mode::Auto => "mode-button mode-auto",
    });

    let toggle = move |_e: Event| {
        spawn_local_scoped(cx, async move {
            toggle_mode(api, &SignalStore(root), &SignalStore(switching)).await;
        });
    };

    view! { cx,
        div(class="mode-switcher") {
            button(class=*class.get(), disabled=*switching.get(), on:click=toggle) {
                (label.get())
            }
        }
    }
}

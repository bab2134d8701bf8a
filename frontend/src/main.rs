#![allow(non_snake_case)]

use anyhow::Context;
use fridge_dashboard::{
    dashboard::{follow_mode, ModeWatch, Panel, RootState, TITLE},
    relays::RelayBoard,
    DashboardConfig, Generation, HttpApi,
};
use sycamore::{futures::spawn_local_scoped, prelude::*};

use crate::controls::{ModeSwitcher, RelayPanel, SensorDisplay, ThresholdEditor};
use crate::helpers::SignalStore;

mod controls;
mod helpers;

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    if let Err(err) = start() {
        log::error!("Dashboard failed to start: {err:?}");
    }
}

fn start() -> anyhow::Result<()> {
    console_log::init_with_level(log::Level::Debug).context("installing console logger")?;

    let config = DashboardConfig::default();
    log::info!("Using controller at {}", config.device_url);
    let api = HttpApi::new(&config);

    sycamore::render(move |cx| {
        provide_context(cx, api.clone());

        view! { cx,
            App()
        }
    });

    Ok(())
}

#[component]
fn App(cx: Scope) -> View<DomNode> {
    let api = use_context::<HttpApi>(cx);

    let root = create_signal(cx, RootState::default());
    provide_context_ref(cx, root);

    let board = create_signal(cx, RelayBoard::default());
    let generation = create_ref(cx, Generation::default());
    let watch = create_ref(cx, ModeWatch::default());

    let mode = create_selector(cx, || root.get().mode);
    create_effect(cx, move || {
        mode.track();
        spawn_local_scoped(cx, async move {
            follow_mode(api, &SignalStore(root), watch, &SignalStore(board), generation).await;
        });
    });

    let panel = create_selector(cx, || root.get().panel());

    view! { cx,
        div(class="dashboard") {
            h1(class="page-title") { (TITLE) }

            ModeSwitcher()

            SensorDisplay()

            (match *panel.get() {
                Panel::Relays => view! { cx,
                    RelayPanel(board=board, generation=generation)
                },
                Panel::Thresholds => view! { cx,
                    ThresholdEditor()
                },
            })
        }
    }
}

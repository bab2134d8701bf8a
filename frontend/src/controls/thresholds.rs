use fridge_dashboard::{
    thresholds::{load_thresholds, parse_threshold, save_label, save_thresholds, threshold_text},
    HttpApi, Store,
};
use models::AutoConfig;
use sycamore::{futures::spawn_local_scoped, prelude::*};
use web_sys::Event;

use crate::helpers::SignalStore;

/// One number input: the text bound to the box, and its value re-parsed on every edit.
#[derive(Clone, Copy)]
struct ThresholdInput<'a> {
    text: &'a Signal<String>,
    value: &'a Signal<f64>,
}

impl<'a> ThresholdInput<'a> {
    fn new(cx: Scope<'a>, initial: f64) -> Self {
        let input = ThresholdInput {
            text: create_signal(cx, threshold_text(initial)),
            value: create_signal(cx, initial),
        };
        create_effect(cx, move || input.value.set(parse_threshold(&input.text.get())));
        input
    }
}

/// Blank or garbage input reads as NaN and is saved as-is.
struct ThresholdForm<'a> {
    start: ThresholdInput<'a>,
    stop: ThresholdInput<'a>,
}

impl Store<AutoConfig> for ThresholdForm<'_> {
    fn get(&self) -> AutoConfig {
        AutoConfig {
            temp_start_compressor: *self.start.value.get_untracked(),
            temp_stop_compressor: *self.stop.value.get_untracked(),
        }
    }

    fn set(&self, config: AutoConfig) {
        self.start.text.set(threshold_text(config.temp_start_compressor));
        self.stop.text.set(threshold_text(config.temp_stop_compressor));
    }
}

#[component]
pub fn ThresholdEditor(cx: Scope) -> View<DomNode> {
    let api = use_context::<HttpApi>(cx);
    let defaults = AutoConfig::default();
    let start = ThresholdInput::new(cx, defaults.temp_start_compressor);
    let stop = ThresholdInput::new(cx, defaults.temp_stop_compressor);
    let form = create_ref(cx, ThresholdForm { start, stop });
    let saving = create_signal(cx, false);

    spawn_local_scoped(cx, async move {
        load_thresholds(api, form).await;
    });

    let save = move |_e: Event| {
        spawn_local_scoped(cx, async move {
            save_thresholds(api, form, &SignalStore(saving)).await;
        });
    };

    let label = create_selector(cx, || save_label(*saving.get()));
    let start_text = start.text;
    let stop_text = stop.text;

    view! { cx,
        div(class="threshold-editor") {
            h2 { "Automatic Control Settings" }
            div(class="threshold-grid") {
                label {
                    "Start Compressor Above (°C)"
                    input(type="number", step="0.1", bind:value=start_text)
                }
                label {
                    "Stop Compressor Below (°C)"
                    input(type="number", step="0.1", bind:value=stop_text)
                }
            }
            button(class="save-button", disabled=*saving.get(), on:click=save) {
                (*label.get())
            }
        }
    }
}

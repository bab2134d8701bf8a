use fridge_dashboard::{
    sensors::{poll_sensors, sensor_cards, SensorReading},
    HttpApi,
};
use gloo_timers::future::sleep;
use sycamore::{futures::spawn_local_scoped, prelude::*};

use crate::helpers::SignalStore;

#[component]
pub fn SensorDisplay(cx: Scope) -> View<DomNode> {
    let api = use_context::<HttpApi>(cx);
    let reading = create_signal(cx, SensorReading::default());

    // Stops when this component's scope is dropped.
    spawn_local_scoped(cx, async move {
        poll_sensors(api, &SignalStore(reading), sleep).await;
    });

    view! { cx,
        (match (*reading.get()).clone() {
            SensorReading::Loading => view! { cx,
                div { "Loading..." }
            },
            SensorReading::Failed(message) => view! { cx,
                div(class="sensor-error") { (format!("Error: {message}")) }
            },
            SensorReading::Ready(snapshot) => {
                let cards: Vec<View<DomNode>> = sensor_cards(&snapshot)
                    .into_iter()
                    .map(|(title, value)| view! { cx,
                        div(class="sensor-card") {
                            h2 { (title) }
                            p(class="sensor-value") { (value.clone()) }
                        }
                    })
                    .collect();

                view! { cx,
                    div(class="sensor-grid") {
                        (View::new_fragment(cards.clone()))
                    }
                }
            }
        })
    }
}

use dioxus::prelude::*;

use crate::vm::FlowIntent;

#[component]
pub fn LandingStage(on_intent: EventHandler<FlowIntent>) -> Element {
    rsx! {
        div { class: "landing",
            h1 { class: "landing__title", "Are you free?" }
            button {
                class: "btn btn-primary landing__cta",
                id: "landing-start",
                r#type: "button",
                onclick: move |_| on_intent.call(FlowIntent::Start),
                "I am free"
            }
        }
    }
}

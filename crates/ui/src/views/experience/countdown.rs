use dioxus::prelude::*;

#[component]
pub fn CountdownStage(countdown: u32) -> Element {
    rsx! {
        div { class: "countdown",
            h2 { class: "countdown__title", "Get ready" }
            p { class: "countdown__value", aria_live: "polite", "{countdown}" }
        }
    }
}

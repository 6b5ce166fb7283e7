use dioxus::prelude::*;

use crate::vm::{AnswerRowVm, FlowIntent};

#[component]
pub fn FinalStage(
    username: String,
    rows: Vec<AnswerRowVm>,
    on_intent: EventHandler<FlowIntent>,
) -> Element {
    rsx! {
        div { class: "card summary-card",
            h2 { class: "summary-card__title", "Thank you, {username}" }
            p { class: "summary-card__subtitle", "Here is what you shared." }

            ol { class: "summary-card__answers",
                for row in rows {
                    li { key: "{row.number}", class: "summary-answer",
                        p { class: "summary-answer__question", "{row.question}" }
                        p { class: "summary-answer__text", "{row.answer}" }
                    }
                }
            }

            button {
                class: "btn btn-primary summary-card__restart",
                id: "summary-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(FlowIntent::Restart),
                "Start Over"
            }
        }
    }
}

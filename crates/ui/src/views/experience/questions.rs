use dioxus::prelude::*;

use crate::vm::FlowIntent;

#[component]
pub fn QuestionsStage(
    progress_label: String,
    prompt: String,
    draft: String,
    error: Option<&'static str>,
    can_submit: bool,
    submitting: bool,
    is_last: bool,
    on_intent: EventHandler<FlowIntent>,
) -> Element {
    let submit_label = if submitting {
        "Processing..."
    } else if is_last {
        "Finish"
    } else {
        "Next"
    };

    rsx! {
        div { class: "card question-card",
            p { class: "question-card__progress", "{progress_label}" }
            h2 { class: "question-card__prompt", "{prompt}" }

            textarea {
                class: "input question-card__answer",
                id: "question-answer",
                placeholder: "Type your answer",
                disabled: submitting,
                value: "{draft}",
                oninput: move |evt: FormEvent| on_intent.call(FlowIntent::EditAnswer(evt.value())),
                onkeydown: move |evt: KeyboardEvent| {
                    // Enter submits, Shift+Enter keeps a newline.
                    if evt.data.key() == Key::Enter && !evt.data.modifiers().contains(Modifiers::SHIFT) {
                        evt.prevent_default();
                        on_intent.call(FlowIntent::SubmitAnswer);
                    }
                },
            }

            if let Some(message) = error {
                p { class: "form-error", role: "alert", "{message}" }
            }

            button {
                class: "btn btn-primary question-card__submit",
                id: "question-submit",
                r#type: "button",
                disabled: !can_submit || submitting,
                onclick: move |_| on_intent.call(FlowIntent::SubmitAnswer),
                "{submit_label}"
            }
        }
    }
}

use dioxus::prelude::*;

use crate::vm::FlowIntent;

#[component]
pub fn AuthStage(
    heading: &'static str,
    toggle_label: &'static str,
    username: String,
    password: String,
    error: Option<&'static str>,
    on_intent: EventHandler<FlowIntent>,
) -> Element {
    rsx! {
        div { class: "card auth-card",
            h2 { class: "auth-card__title", "{heading}" }

            if let Some(message) = error {
                p { class: "form-error", role: "alert", "{message}" }
            }

            form {
                class: "auth-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_intent.call(FlowIntent::SubmitCredentials);
                },
                input {
                    class: "input",
                    id: "auth-username",
                    placeholder: "Username",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt: FormEvent| on_intent.call(FlowIntent::EditUsername(evt.value())),
                }
                input {
                    class: "input",
                    id: "auth-password",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| on_intent.call(FlowIntent::EditPassword(evt.value())),
                }
                button { class: "btn btn-primary auth-form__submit", r#type: "submit", "Continue" }
            }

            button {
                class: "btn btn-link auth-card__toggle",
                id: "auth-toggle",
                r#type: "button",
                onclick: move |_| on_intent.call(FlowIntent::ToggleAuthMode),
                "{toggle_label}"
            }
        }
    }
}

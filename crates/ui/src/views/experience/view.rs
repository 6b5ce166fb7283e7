use dioxus::core::Task;
use dioxus::prelude::*;
use quiz_core::{Event, Stage};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{FlowIntent, FlowVm};
use super::{AuthStage, CountdownStage, FinalStage, LandingStage, QuestionsStage};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Hosts the whole flow. Exactly one stage view is mounted at a time.
///
/// The countdown runs as a task owned by this component: it is spawned when the
/// session enters `Countdown`, cancelled by the effect below as soon as the stage
/// changes, and dropped with the component on unmount.
#[component]
pub fn ExperienceView() -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.flow();

    let vm = use_signal({
        let flow = flow.clone();
        move || FlowVm::new(flow.start_session())
    });
    let submitting = use_signal(|| false);
    let fault = use_signal(|| None::<ViewError>);
    let countdown_task = use_signal(|| None::<Task>);

    let dispatch_intent = {
        let flow = flow.clone();
        use_callback(move |intent: FlowIntent| {
            let mut vm = vm;
            let mut submitting = submitting;
            let mut fault = fault;

            match intent {
                FlowIntent::SubmitAnswer => {
                    if submitting() {
                        return;
                    }
                    if !vm.read().can_submit_answer() {
                        // Blank drafts are rejected right away so the message shows.
                        let result = vm.write().dispatch(&flow, Event::SubmitAnswer);
                        record_outcome(result, &mut fault);
                        return;
                    }
                    submitting.set(true);
                    let flow = flow.clone();
                    spawn(async move {
                        flow.submission_delay().await;
                        let result = vm.write().dispatch(&flow, Event::SubmitAnswer);
                        record_outcome(result, &mut fault);
                        submitting.set(false);
                    });
                }
                other => {
                    let result = vm.write().dispatch(&flow, other.into_event());
                    record_outcome(result, &mut fault);
                }
            }
        })
    };

    {
        let flow = flow.clone();
        use_effect(move || {
            let counting = vm.read().stage() == Stage::Countdown;
            let mut countdown_task = countdown_task;
            let armed = countdown_task.peek().is_some();

            if counting && !armed {
                let flow = flow.clone();
                let mut vm = vm;
                let task = spawn(async move {
                    let mut timer = flow.arm_countdown();
                    loop {
                        timer.tick().await;
                        let mut guard = vm.write();
                        let applied = guard.dispatch(&flow, Event::Tick).is_ok();
                        if !applied || guard.stage() != Stage::Countdown {
                            break;
                        }
                    }
                });
                countdown_task.set(Some(task));
            } else if !counting && armed {
                if let Some(task) = countdown_task.write().take() {
                    debug!("countdown task released");
                    task.cancel();
                }
            }
        });
    }

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ExperienceTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let bank = flow.bank();
    let vm_guard = vm.read();
    let session = vm_guard.session();
    let error = vm_guard.error_message();

    let body = match vm_guard.stage() {
        Stage::Landing => rsx! {
            LandingStage { on_intent: dispatch_intent }
        },
        Stage::Auth => rsx! {
            AuthStage {
                heading: vm_guard.auth_heading(),
                toggle_label: vm_guard.auth_toggle_label(),
                username: session.credentials().username().to_string(),
                password: session.credentials().password().to_string(),
                error,
                on_intent: dispatch_intent,
            }
        },
        Stage::Questions => rsx! {
            QuestionsStage {
                progress_label: vm_guard.progress_label(bank),
                prompt: vm_guard.prompt_text(bank).unwrap_or_default().to_string(),
                draft: session.answer_draft().to_string(),
                error,
                can_submit: vm_guard.can_submit_answer(),
                submitting: submitting(),
                is_last: session.is_last_question(bank),
                on_intent: dispatch_intent,
            }
        },
        Stage::Countdown => rsx! {
            CountdownStage { countdown: session.countdown() }
        },
        Stage::Final => rsx! {
            FinalStage {
                username: session.credentials().username().to_string(),
                rows: vm_guard.answer_rows(),
                on_intent: dispatch_intent,
            }
        },
    };

    rsx! {
        div { class: "experience", "data-stage": "{vm_guard.stage()}",
            div { class: "experience__frame",
                if let Some(err) = *fault.read() {
                    p { class: "experience__fault", "{err.message()}" }
                }
                {body}
            }
        }
    }
}

/// Validation messages live on the view-model; only unexpected rejections surface here.
fn record_outcome(result: Result<(), ViewError>, fault: &mut Signal<Option<ViewError>>) {
    match result {
        Err(err @ ViewError::Unknown) => {
            warn!("intent ignored by the current stage");
            fault.set(Some(err));
        }
        Ok(()) | Err(ViewError::Validation(_)) => fault.set(None),
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ExperienceTestHandles {
    dispatch: Rc<RefCell<Option<Callback<FlowIntent>>>>,
}

#[cfg(test)]
impl ExperienceTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<FlowIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<FlowIntent> {
        (*self.dispatch.borrow()).expect("experience dispatch registered")
    }
}

use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuestionBank;
use services::{FlowService, FlowSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::ExperienceView;
use crate::views::experience::ExperienceTestHandles;
use crate::vm::FlowIntent;

#[derive(Clone)]
struct TestApp {
    flow: Arc<FlowService>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Are you free? (test)"
    }

    fn flow_service(&self) -> Arc<FlowService> {
        Arc::clone(&self.flow)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: ExperienceTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { ExperienceView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: ExperienceTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: FlowIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Keep driving spawned tasks until `needle` shows up in the rendered HTML.
    pub async fn drive_until(&mut self, needle: &str) -> bool {
        for _ in 0..200 {
            if self.render().contains(needle) {
                return true;
            }
            self.drive_async().await;
        }
        self.render().contains(needle)
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Short periods so timed stages finish quickly under a real clock.
pub fn fast_settings() -> FlowSettings {
    FlowSettings {
        tick_period: Duration::from_millis(5),
        submit_delay: Duration::ZERO,
    }
}

pub fn setup_view_harness(bank: QuestionBank, settings: FlowSettings) -> ViewHarness {
    let flow = Arc::new(FlowService::new(bank).with_settings(settings));
    let handles = ExperienceTestHandles::default();
    let app = Arc::new(TestApp { flow });

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}

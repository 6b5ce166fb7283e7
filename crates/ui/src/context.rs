use std::sync::Arc;

use services::FlowService;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;

    fn flow_service(&self) -> Arc<FlowService>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    flow: Arc<FlowService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            flow: app.flow_service(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn flow(&self) -> Arc<FlowService> {
        Arc::clone(&self.flow)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

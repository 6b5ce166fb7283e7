use quiz_core::{AuthMode, Event, FlowError, QuestionBank, Session, Stage};
use services::FlowService;

use crate::views::ViewError;
use super::{AnswerRowVm, map_answer_rows};

/// Actions the stage views can request. Ticks never come from the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowIntent {
    Start,
    EditUsername(String),
    EditPassword(String),
    ToggleAuthMode,
    SubmitCredentials,
    EditAnswer(String),
    SubmitAnswer,
    Restart,
}

impl FlowIntent {
    #[must_use]
    pub fn into_event(self) -> Event {
        match self {
            FlowIntent::Start => Event::Start,
            FlowIntent::EditUsername(value) => Event::EditUsername(value),
            FlowIntent::EditPassword(value) => Event::EditPassword(value),
            FlowIntent::ToggleAuthMode => Event::ToggleAuthMode,
            FlowIntent::SubmitCredentials => Event::SubmitCredentials,
            FlowIntent::EditAnswer(value) => Event::EditAnswer(value),
            FlowIntent::SubmitAnswer => Event::SubmitAnswer,
            FlowIntent::Restart => Event::Restart,
        }
    }
}

pub struct FlowVm {
    session: Session,
    error: Option<FlowError>,
}

impl FlowVm {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            error: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    /// Message for the last rejected input, cleared by the next accepted event.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(FlowError::message)
    }

    #[must_use]
    pub fn auth_heading(&self) -> &'static str {
        self.session.auth_mode().heading()
    }

    #[must_use]
    pub fn auth_toggle_label(&self) -> &'static str {
        match self.session.auth_mode() {
            AuthMode::SignIn => "New here? Create an account",
            AuthMode::SignUp => "Already have an account? Sign in",
        }
    }

    #[must_use]
    pub fn progress_label(&self, bank: &QuestionBank) -> String {
        self.session.progress_label(bank)
    }

    #[must_use]
    pub fn prompt_text<'a>(&self, bank: &'a QuestionBank) -> Option<&'a str> {
        self.session.current_question(bank)
    }

    #[must_use]
    pub fn can_submit_answer(&self) -> bool {
        self.session.can_submit_answer()
    }

    #[must_use]
    pub fn answer_rows(&self) -> Vec<AnswerRowVm> {
        map_answer_rows(self.session.answers())
    }

    /// # Errors
    ///
    /// Returns `ViewError::Validation` for blank input; the message is also kept for display.
    /// Returns `ViewError::Unknown` for events the current stage does not accept.
    pub fn dispatch(&mut self, flow: &FlowService, event: Event) -> Result<(), ViewError> {
        match flow.dispatch(&self.session, event) {
            Ok(next) => {
                self.session = next;
                self.error = None;
                Ok(())
            }
            Err(err) if err.is_validation() => {
                self.error = Some(err);
                Err(ViewError::Validation(err))
            }
            Err(_) => Err(ViewError::Unknown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm_at_auth(flow: &FlowService) -> FlowVm {
        let mut vm = FlowVm::new(flow.start_session());
        vm.dispatch(flow, Event::Start).unwrap();
        vm
    }

    #[test]
    fn validation_message_clears_on_next_accepted_event() {
        let flow = FlowService::new(QuestionBank::reference());
        let mut vm = vm_at_auth(&flow);

        let err = vm.dispatch(&flow, Event::SubmitCredentials).unwrap_err();
        assert_eq!(err, ViewError::Validation(FlowError::MissingCredentials));
        assert_eq!(vm.error_message(), Some("Please fill in all fields"));

        vm.dispatch(&flow, Event::EditUsername("alex".into())).unwrap();
        assert_eq!(vm.error_message(), None);
    }

    #[test]
    fn illegal_event_maps_to_unknown_and_keeps_state() {
        let flow = FlowService::new(QuestionBank::reference());
        let mut vm = FlowVm::new(flow.start_session());

        let err = vm.dispatch(&flow, Event::Tick).unwrap_err();

        assert_eq!(err, ViewError::Unknown);
        assert_eq!(vm.stage(), Stage::Landing);
        assert_eq!(vm.error_message(), None);
    }

    #[test]
    fn labels_follow_session() {
        let flow = FlowService::new(QuestionBank::reference());
        let mut vm = vm_at_auth(&flow);
        assert_eq!(vm.auth_heading(), "Welcome Back");
        vm.dispatch(&flow, FlowIntent::ToggleAuthMode.into_event())
            .unwrap();
        assert_eq!(vm.auth_heading(), "Create Account");

        for event in [
            Event::EditUsername("alex".into()),
            Event::EditPassword("x".into()),
            Event::SubmitCredentials,
        ] {
            vm.dispatch(&flow, event).unwrap();
        }
        assert_eq!(vm.progress_label(flow.bank()), "Question 1 of 7");
        assert_eq!(
            vm.prompt_text(flow.bank()),
            Some("What makes you feel most alive?")
        );
    }
}

use thiserror::Error;

use crate::model::{Answer, AuthMode, Credentials, Event, QuestionBank, Stage};

/// Value the countdown starts from whenever a session is created or reset.
pub const COUNTDOWN_START: u32 = 5;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("username and password are required")]
    MissingCredentials,

    #[error("answer must not be empty")]
    EmptyAnswer,

    #[error("{event} is not accepted in the {stage} stage")]
    IllegalEvent { stage: Stage, event: &'static str },
}

impl FlowError {
    /// Text shown next to the blocked control.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            FlowError::MissingCredentials => "Please fill in all fields",
            FlowError::EmptyAnswer => "Please enter your answer",
            FlowError::IllegalEvent { .. } => "That action is not available right now",
        }
    }

    /// Input-validation failures are expected and recoverable; the rest are caller bugs.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, FlowError::MissingCredentials | FlowError::EmptyAnswer)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Transient state of one pass through the flow.
///
/// A `Session` is never changed in place by the flow: [`Session::apply`] returns the
/// next value and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    stage: Stage,
    auth_mode: AuthMode,
    credentials: Credentials,
    question_index: usize,
    answer_draft: String,
    answers: Vec<Answer>,
    countdown: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Landing,
            auth_mode: AuthMode::SignIn,
            credentials: Credentials::default(),
            question_index: 0,
            answer_draft: String::new(),
            answers: Vec::new(),
            countdown: COUNTDOWN_START,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn answer_draft(&self) -> &str {
        &self.answer_draft
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Prompt currently awaiting an answer, if the flow is in the questions stage.
    #[must_use]
    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a str> {
        if self.stage == Stage::Questions {
            bank.get(self.question_index)
        } else {
            None
        }
    }

    /// "Question n of N" for the prompt on screen, 1-based and capped at the bank size.
    #[must_use]
    pub fn progress_label(&self, bank: &QuestionBank) -> String {
        let shown = (self.question_index + 1).min(bank.len());
        format!("Question {shown} of {}", bank.len())
    }

    /// The next answer submission closes the question loop.
    #[must_use]
    pub fn is_last_question(&self, bank: &QuestionBank) -> bool {
        self.stage == Stage::Questions && self.question_index + 1 >= bank.len()
    }

    #[must_use]
    pub fn can_submit_credentials(&self) -> bool {
        self.stage == Stage::Auth && self.credentials.is_complete()
    }

    #[must_use]
    pub fn can_submit_answer(&self) -> bool {
        self.stage == Stage::Questions && !self.answer_draft.trim().is_empty()
    }

    /// A fresh session. Resetting any session, including a fresh one, gives the same value.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Apply one event and return the resulting session.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::MissingCredentials` when submitting blank credentials.
    /// Returns `FlowError::EmptyAnswer` when submitting a blank answer.
    /// Returns `FlowError::IllegalEvent` when the event has no transition from the current stage.
    pub fn apply(&self, bank: &QuestionBank, event: Event) -> Result<Self, FlowError> {
        match (self.stage, event) {
            (Stage::Landing, Event::Start) => Ok(self.with_stage(Stage::Auth)),

            (Stage::Auth, Event::EditUsername(username)) => {
                let mut next = self.clone();
                next.credentials = next.credentials.with_username(username);
                Ok(next)
            }
            (Stage::Auth, Event::EditPassword(password)) => {
                let mut next = self.clone();
                next.credentials = next.credentials.with_password(password);
                Ok(next)
            }
            (Stage::Auth, Event::ToggleAuthMode) => {
                let mut next = self.clone();
                next.auth_mode = next.auth_mode.toggled();
                Ok(next)
            }
            (Stage::Auth, Event::SubmitCredentials) => {
                if !self.can_submit_credentials() {
                    return Err(FlowError::MissingCredentials);
                }
                Ok(self.with_stage(Stage::Questions))
            }

            (Stage::Questions, Event::EditAnswer(text)) => {
                let mut next = self.clone();
                next.answer_draft = text;
                Ok(next)
            }
            (Stage::Questions, Event::SubmitAnswer) => self.submit_answer(bank),

            (Stage::Countdown, Event::Tick) => {
                let mut next = self.clone();
                if next.countdown > 0 {
                    next.countdown -= 1;
                } else {
                    next.stage = Stage::Final;
                }
                Ok(next)
            }

            (Stage::Final, Event::Restart) => Ok(self.reset()),

            (stage, event) => Err(FlowError::IllegalEvent {
                stage,
                event: event.name(),
            }),
        }
    }

    fn submit_answer(&self, bank: &QuestionBank) -> Result<Self, FlowError> {
        if self.answer_draft.trim().is_empty() {
            return Err(FlowError::EmptyAnswer);
        }
        // A bank shorter than the index means the session was driven with a different bank.
        let Some(question) = bank.get(self.question_index) else {
            return Err(FlowError::IllegalEvent {
                stage: self.stage,
                event: Event::SubmitAnswer.name(),
            });
        };

        let mut next = self.clone();
        let answer = std::mem::take(&mut next.answer_draft);
        next.answers.push(Answer::new(question, answer));
        next.question_index += 1;
        if next.question_index >= bank.len() {
            next.stage = Stage::Countdown;
        }
        Ok(next)
    }

    fn with_stage(&self, stage: Stage) -> Self {
        let mut next = self.clone();
        next.stage = stage;
        next
    }
}

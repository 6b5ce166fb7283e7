/// Input to the flow reducer. Produced by user actions or by the countdown timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Start,
    EditUsername(String),
    EditPassword(String),
    ToggleAuthMode,
    SubmitCredentials,
    EditAnswer(String),
    SubmitAnswer,
    Tick,
    Restart,
}

impl Event {
    /// Stable name without the payload, safe to log.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::EditUsername(_) => "edit_username",
            Event::EditPassword(_) => "edit_password",
            Event::ToggleAuthMode => "toggle_auth_mode",
            Event::SubmitCredentials => "submit_credentials",
            Event::EditAnswer(_) => "edit_answer",
            Event::SubmitAnswer => "submit_answer",
            Event::Tick => "tick",
            Event::Restart => "restart",
        }
    }
}

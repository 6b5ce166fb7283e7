use serde::{Deserialize, Serialize};
use std::fmt;

/// One screen of the flow. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Landing,
    Auth,
    Questions,
    Countdown,
    Final,
}

impl Stage {
    /// The stage that follows this one on the forward path.
    ///
    /// `Final` has no successor; leaving it is a reset, not a step forward.
    #[must_use]
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Landing => Some(Stage::Auth),
            Stage::Auth => Some(Stage::Questions),
            Stage::Questions => Some(Stage::Countdown),
            Stage::Countdown => Some(Stage::Final),
            Stage::Final => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Landing => "landing",
            Stage::Auth => "auth",
            Stage::Questions => "questions",
            Stage::Countdown => "countdown",
            Stage::Final => "final",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which variant of the auth screen is shown.
///
/// Both modes accept any non-empty username and password.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    /// Heading of the auth screen.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Account",
        }
    }
}

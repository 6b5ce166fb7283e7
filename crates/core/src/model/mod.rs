mod answer;
mod credentials;
mod event;
mod question_bank;
mod session;
mod stage;

pub use answer::Answer;
pub use credentials::Credentials;
pub use event::Event;
pub use question_bank::{QuestionBank, QuestionBankError, REFERENCE_PROMPTS};
pub use session::{COUNTDOWN_START, FlowError, Session};
pub use stage::{AuthMode, Stage};

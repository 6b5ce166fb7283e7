#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Answer, AuthMode, COUNTDOWN_START, Credentials, Event, FlowError, QuestionBank,
    QuestionBankError, Session, Stage,
};

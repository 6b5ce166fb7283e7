#![forbid(unsafe_code)]

pub mod countdown;
pub mod error;
pub mod flow;
pub mod questions;

pub use countdown::CountdownTimer;
pub use error::QuestionSourceError;
pub use flow::{FlowController, FlowService, FlowSettings};
pub use questions::QuestionSource;

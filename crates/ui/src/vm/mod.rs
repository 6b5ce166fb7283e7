mod answer_vm;
mod flow_vm;

pub use answer_vm::{AnswerRowVm, map_answer_rows};
pub use flow_vm::{FlowIntent, FlowVm};

use quiz_core::FlowError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Validation(FlowError),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Validation(err) => err.message(),
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

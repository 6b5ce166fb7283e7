use quiz_core::Answer;

/// One line of the final summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRowVm {
    pub number: usize,
    pub question: String,
    pub answer: String,
}

#[must_use]
pub fn map_answer_rows(answers: &[Answer]) -> Vec<AnswerRowVm> {
    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| AnswerRowVm {
            number: i + 1,
            question: answer.question.clone(),
            answer: answer.answer.clone(),
        })
        .collect()
}

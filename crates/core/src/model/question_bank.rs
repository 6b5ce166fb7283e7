use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question bank has no prompts")]
    Empty,

    #[error("prompt {index} is blank")]
    BlankPrompt { index: usize },
}

/// Prompts shipped with the app.
pub const REFERENCE_PROMPTS: [&str; 7] = [
    "What makes you feel most alive?",
    "If you could have dinner with anyone, who would it be?",
    "What's the most spontaneous thing you've ever done?",
    "What would you do with a completely free day?",
    "Which place makes you feel most at home?",
    "What is something you have always wanted to learn?",
    "What does freedom mean to you?",
];

/// Fixed, ordered list of prompts shown during the questions stage.
///
/// Always holds at least one non-blank prompt. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct QuestionBank {
    prompts: Vec<String>,
}

impl QuestionBank {
    /// Build a bank from an ordered list of prompts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` if no prompts are given.
    /// Returns `QuestionBankError::BlankPrompt` if any prompt is whitespace only.
    pub fn new<I, S>(prompts: I) -> Result<Self, QuestionBankError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompts: Vec<String> = prompts.into_iter().map(Into::into).collect();
        if prompts.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        if let Some(index) = prompts.iter().position(|p| p.trim().is_empty()) {
            return Err(QuestionBankError::BlankPrompt { index });
        }
        Ok(Self { prompts })
    }

    /// The seven built-in prompts.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            prompts: REFERENCE_PROMPTS.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether the bank holds no prompts. A validated bank never does.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.prompts.get(index).map(String::as_str)
    }

}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<String>> for QuestionBank {
    type Error = QuestionBankError;

    fn try_from(prompts: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(prompts)
    }
}

impl From<QuestionBank> for Vec<String> {
    fn from(bank: QuestionBank) -> Self {
        bank.prompts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_bank_has_seven_prompts_in_order() {
        let bank = QuestionBank::reference();
        assert_eq!(bank.len(), 7);
        assert!(!bank.is_empty());
        assert_eq!(bank.get(0), Some("What makes you feel most alive?"));
        assert_eq!(bank.get(6), Some("What does freedom mean to you?"));
        assert_eq!(bank.get(7), None);
    }

    #[test]
    fn rejects_empty_and_blank_prompts() {
        assert_eq!(
            QuestionBank::new(Vec::<String>::new()),
            Err(QuestionBankError::Empty)
        );
        assert_eq!(
            QuestionBank::new(["One?", "   ", "Three?"]),
            Err(QuestionBankError::BlankPrompt { index: 1 })
        );
    }

    #[test]
    fn deserializing_runs_validation() {
        let bank: QuestionBank = serde_json::from_str(r#"["A?", "B?"]"#).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(0), Some("A?"));
        assert_eq!(bank.get(1), Some("B?"));

        let err = serde_json::from_str::<QuestionBank>("[]").unwrap_err();
        assert!(err.to_string().contains("no prompts"), "{err}");
    }
}

use std::path::Path;

use quiz_core::QuestionBank;
use serde::Deserialize;
use tracing::info;

use crate::error::QuestionSourceError;

/// Accepted layouts of a question file.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionFile {
    List(Vec<String>),
    Object { questions: Vec<String> },
}

/// Where the question bank comes from at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuestionSource {
    #[default]
    Reference,
    File(std::path::PathBuf),
}

impl QuestionSource {
    /// Build the bank once; it is not reloaded while the app runs.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` if the file cannot be read, parsed, or validated.
    pub fn load(&self) -> Result<QuestionBank, QuestionSourceError> {
        match self {
            QuestionSource::Reference => Ok(QuestionBank::reference()),
            QuestionSource::File(path) => load_from_path(path),
        }
    }
}

/// Read a JSON question file: either `["..."]` or `{ "questions": ["..."] }`.
///
/// # Errors
///
/// Returns `QuestionSourceError::Io` if the file cannot be read.
/// Returns `QuestionSourceError::Parse` for malformed JSON.
/// Returns `QuestionSourceError::Bank` if the prompts are empty or blank.
pub fn load_from_path(path: &Path) -> Result<QuestionBank, QuestionSourceError> {
    let raw = std::fs::read_to_string(path).map_err(|source| QuestionSourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let bank = parse_json(&raw)?;
    info!(path = %path.display(), count = bank.len(), "loaded question bank");
    Ok(bank)
}

/// # Errors
///
/// Returns `QuestionSourceError::Parse` for malformed JSON.
/// Returns `QuestionSourceError::Bank` if the prompts are empty or blank.
pub fn parse_json(raw: &str) -> Result<QuestionBank, QuestionSourceError> {
    let prompts = match serde_json::from_str::<QuestionFile>(raw)? {
        QuestionFile::List(prompts) | QuestionFile::Object { questions: prompts } => prompts,
    };
    Ok(QuestionBank::new(prompts)?)
}

//! QALD benchmark dataset: one-time load and read-only record access.
//!
//! The dataset file is the multilingual QALD JSON format:
//! `{ "questions": [ { "id", "question": [{"language", "string"}, ...],
//! "query": {"sparql"}, "answers" }, ...] }`. Extra fields carried by the
//! real benchmark files (answertype, aggregation, ...) are ignored.

use crate::error::{HarnessError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One language-tagged rendering of a question.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub language: String,
    pub string: String,
}

/// Reference SPARQL query stored with a record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceQuery {
    #[serde(default)]
    pub sparql: String,
}

/// Immutable benchmark entry: identifier, question texts, reference query
/// and reference answers. The id and answers are kept as raw JSON since the
/// benchmark treats both as opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub id: Value,
    #[serde(default)]
    pub question: Vec<LocalizedText>,
    #[serde(default)]
    pub query: ReferenceQuery,
    #[serde(default)]
    pub answers: Value,
}

impl QuestionRecord {
    /// First question text whose language tag matches `lang`, if any.
    pub fn text_in(&self, lang: &str) -> Option<&str> {
        self.question
            .iter()
            .find(|t| t.language == lang)
            .map(|t| t.string.as_str())
    }

    /// Identifier rendered for display. String ids print bare, anything
    /// else prints as JSON.
    pub fn id_display(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    questions: Vec<QuestionRecord>,
}

/// Ordered, read-only sequence of question records, loaded once at startup.
#[derive(Debug)]
pub struct Dataset {
    questions: Vec<QuestionRecord>,
}

impl Dataset {
    /// Read and parse the dataset file. A missing or malformed file is a
    /// startup-fatal condition for the caller; there is no partial load.
    pub fn load(path: &Path) -> Result<Dataset> {
        let raw = std::fs::read_to_string(path)?;
        let file: DatasetFile = serde_json::from_str(&raw).map_err(|e| {
            HarnessError::Dataset(format!("{}: {}", path.display(), e))
        })?;
        Ok(Dataset {
            questions: file.questions,
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }
}

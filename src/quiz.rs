use crate::error::{QuizError, Result};
use crate::loader::RawSheet;
use crate::navigation::format_link;
use log::debug;
use serde::Serialize;

/// A question and the answers revealed for it.
///
/// Always holds a non-empty question and at least one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionAnswer {
    question: String,
    answers: Vec<String>,
}

impl QuestionAnswer {
    pub fn new(question: impl Into<String>, answers: Vec<String>) -> Result<Self> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuizError::InvalidQuestion("question text is empty".to_string()));
        }
        if answers.is_empty() {
            return Err(QuizError::InvalidQuestion(format!(
                "{:?} has no answers",
                question
            )));
        }
        Ok(QuestionAnswer { question, answers })
    }

    /// Build a record from one row of cells: the first populated cell is the
    /// question, the rest are answers. Rows with fewer than two populated
    /// cells yield `None`.
    pub fn from_cells<C: AsRef<str>>(cells: &[C]) -> Option<Self> {
        let mut populated = cells
            .iter()
            .map(|cell| cell.as_ref().trim())
            .filter(|cell| !cell.is_empty());

        let question = populated.next()?.to_string();
        let answers: Vec<String> = populated.map(str::to_string).collect();
        if answers.is_empty() {
            return None;
        }

        Some(QuestionAnswer { question, answers })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }
}

/// Turn rows of cell texts into question records, skipping short rows.
pub fn extract_questions<R, C>(rows: impl IntoIterator<Item = R>) -> Vec<QuestionAnswer>
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    rows.into_iter()
        .filter_map(|row| QuestionAnswer::from_cells(row.as_ref()))
        .collect()
}

/// One named quiz, taken from one spreadsheet tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    name: String,
    questions: Vec<QuestionAnswer>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, questions: Vec<QuestionAnswer>) -> Self {
        Sheet {
            name: name.into(),
            questions,
        }
    }

    /// Extract the questions of a loaded sheet.
    pub fn from_raw(raw: RawSheet) -> Self {
        let mut questions = Vec::with_capacity(raw.rows.len());
        for row in &raw.rows {
            match QuestionAnswer::from_cells(&row.cells) {
                Some(qa) => questions.push(qa),
                None => debug!(
                    "sheet `{}` row {}: not enough text for question and answer: {:?}",
                    raw.name, row.number, row.cells
                ),
            }
        }

        Sheet {
            name: raw.name,
            questions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[QuestionAnswer] {
        &self.questions
    }

    /// Link to the first screen of this sheet.
    pub fn start_link(&self) -> String {
        format_link(&self.name, 0)
    }
}

//! Flattening of a sheet's questions into an addressable sequence of screens.
//!
//! Every question expands to three [`DisplayState`]s: the question itself, the
//! answer screen with answers still hidden, and the answer screen with answers
//! revealed. Previous/next links saturate at the ends of the sequence instead
//! of wrapping, and requested indices are clamped the same way.

use crate::error::{LookupError, QuizError, Result};
use crate::quiz::Sheet;
use serde::Serialize;
use std::collections::HashMap;
use std::num::IntErrorKind;

/// Which of the three screens of a question a state shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Question,
    AnswerHidden,
    AnswerRevealed,
}

impl Stage {
    /// Stages in display order.
    pub const ALL: [Stage; 3] = [Stage::Question, Stage::AnswerHidden, Stage::AnswerRevealed];

    pub fn header(self, question_number: usize) -> String {
        match self {
            Stage::Question => format!("Question {}", question_number),
            Stage::AnswerHidden | Stage::AnswerRevealed => {
                format!("Question {} Answer", question_number)
            }
        }
    }
}

/// One renderable screen of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// 1-based number of the question this screen belongs to.
    pub question_number: usize,
    pub stage: Stage,
    pub header: String,
    pub body_text: String,
    /// Empty unless `stage` is [`Stage::AnswerRevealed`].
    pub revealed_answers: Vec<String>,
    pub previous_index: usize,
    pub next_index: usize,
}

/// Index of the screen before `index`, stopping at the first one.
pub fn previous_index(index: usize) -> usize {
    index.saturating_sub(1)
}

/// Index of the screen after `index` in a sequence of `len`, stopping at the last one.
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1).min(len.saturating_sub(1))
}

/// Clamp a requested index into `[0, len)`. `None` when the sequence is empty.
pub fn clamp_index(requested: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if requested <= 0 {
        return Some(0);
    }
    Some(usize::try_from(requested).map_or(len - 1, |i| i.min(len - 1)))
}

/// Parse a free-form `index` query value.
///
/// Numbers too large for an `i64` saturate so they still clamp to the last screen.
pub fn parse_index(raw: &str) -> std::result::Result<i64, LookupError> {
    match raw.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(LookupError::InvalidIndex(raw.to_string())),
        },
    }
}

/// Relative link to screen `index` of `sheet_name`.
pub fn format_link(sheet_name: &str, index: usize) -> String {
    format!("?sheet={}&index={}", urlencoding::encode(sheet_name), index)
}

/// Expand a sheet into its screens, with clamped previous/next links.
pub fn build_states(sheet: &Sheet) -> Vec<DisplayState> {
    let len = sheet.questions().len() * Stage::ALL.len();
    let mut states = Vec::with_capacity(len);

    for (i, qa) in sheet.questions().iter().enumerate() {
        let question_number = i + 1;
        for stage in Stage::ALL {
            let index = states.len();
            let revealed_answers = match stage {
                Stage::AnswerRevealed => qa.answers().to_vec(),
                Stage::Question | Stage::AnswerHidden => Vec::new(),
            };
            states.push(DisplayState {
                question_number,
                stage,
                header: stage.header(question_number),
                body_text: qa.question().to_string(),
                revealed_answers,
                previous_index: previous_index(index),
                next_index: next_index(index, len),
            });
        }
    }

    states
}

/// A resolved request: the screen plus where it sits in its sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located<'a> {
    pub sheet: &'a Sheet,
    pub index: usize,
    pub total: usize,
    pub state: &'a DisplayState,
}

/// Every sheet's screens, built once and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIndex {
    sheets: Vec<Sheet>,
    states: HashMap<String, Vec<DisplayState>>,
}

impl NavigationIndex {
    /// Build the index. Sheet names must be unique.
    pub fn build(sheets: Vec<Sheet>) -> Result<Self> {
        let mut states = HashMap::with_capacity(sheets.len());
        for sheet in &sheets {
            if states
                .insert(sheet.name().to_string(), build_states(sheet))
                .is_some()
            {
                return Err(QuizError::DuplicateSheet(sheet.name().to_string()));
            }
        }

        Ok(NavigationIndex { sheets, states })
    }

    /// Sheets in workbook order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name() == name)
    }

    pub fn states(&self, name: &str) -> Option<&[DisplayState]> {
        self.states.get(name).map(Vec::as_slice)
    }

    /// Resolve a sheet name and a raw `index` value to a screen.
    ///
    /// Out-of-range indices clamp; a missing or non-numeric index is an error.
    pub fn locate(
        &self,
        sheet_name: &str,
        raw_index: Option<&str>,
    ) -> std::result::Result<Located<'_>, LookupError> {
        let sheet = self
            .sheet(sheet_name)
            .ok_or_else(|| LookupError::UnknownSheet(sheet_name.to_string()))?;
        let states = self.states(sheet_name).unwrap_or_default();

        let raw_index = raw_index
            .filter(|raw| !raw.trim().is_empty())
            .ok_or(LookupError::MissingIndex)?;
        let requested = parse_index(raw_index)?;

        let index = clamp_index(requested, states.len())
            .ok_or_else(|| LookupError::EmptySheet(sheet_name.to_string()))?;

        Ok(Located {
            sheet,
            index,
            total: states.len(),
            state: &states[index],
        })
    }
}

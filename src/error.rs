//! Error types shared across the quiz server.

use crate::cell_ref::CellRefError;

/// Errors that stop the quiz from being built or served.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// I/O error while reading the workbook or binding the listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook could not be opened.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// A single sheet could not be read; the whole load is abandoned.
    #[error("sheet `{sheet}`: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// A sheet's used area could not be expressed as cell addresses.
    #[error("cell reference: {0}")]
    CellRef(#[from] CellRefError),

    #[error("unsupported workbook format: {0}")]
    UnsupportedFormat(String),

    #[error("CSV line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    #[error("duplicate sheet name `{0}`")]
    DuplicateSheet(String),

    #[cfg(feature = "web")]
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[cfg(feature = "web")]
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuizError>;

/// A request that cannot be resolved to a display state.
///
/// These are shown to the user as page content, never as HTTP errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no sheet given that name")]
    UnknownSheet(String),

    #[error("sheet `{0}` has no questions")]
    EmptySheet(String),

    #[error("no index provided")]
    MissingIndex,

    #[error("provided index did not convert: {0:?}")]
    InvalidIndex(String),
}

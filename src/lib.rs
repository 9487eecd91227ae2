/*!
# Trivia Quiz Server

A small web server that turns a spreadsheet of trivia questions into a
click-through quiz.

## Overview

Each tab of the workbook is one quiz. Each populated row holds a question in
its first cell and one or more answers in the cells after it. The quiz is
served as plain HTML pages that step through every question three screens at a
time: the question, the answer heading with answers still hidden, and the
answers revealed.

## Architecture

Everything is built once at startup and only read while serving:

- **cell_ref**: conversions between `(row, column)` pairs and `A1` addresses
- **loader**: reads `.xlsx`/`.xls`/`.ods` workbooks (calamine) and `.csv` files
  into rows of non-empty cell texts
- **quiz**: question records and the row-to-question extractor
- **navigation**: flattens each sheet into display states with clamped
  previous/next links, and resolves requested indices
- **render**: handlebars templates for the sheet list, a quiz screen and errors
- **app**: the axum router and the startup sequence

## HTTP

A single route, `/`, driven by query parameters:

- no `sheet` - list every sheet with a link to its first screen
- `sheet=<name>&index=<n>` - show screen `n` of that sheet; out-of-range
  indices clamp to the first or last screen
- unknown sheets and missing or non-numeric indices render an error page
  (still `200 OK`)
*/

pub mod cell_ref;
pub mod error;
pub mod loader;
pub mod navigation;
pub mod quiz;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod render;

pub use error::{LookupError, QuizError, Result};
pub use navigation::{DisplayState, NavigationIndex, Stage};
pub use quiz::{QuestionAnswer, Sheet};

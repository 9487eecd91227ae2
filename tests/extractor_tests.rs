use trivia_quiz::loader::{RawRow, RawSheet};
use trivia_quiz::quiz::extract_questions;
use trivia_quiz::{QuestionAnswer, QuizError, Sheet};

#[test]
fn single_cell_row_is_skipped() {
    assert!(extract_questions(vec![vec!["Q1"]]).is_empty());
}

#[test]
fn two_cell_row_yields_one_answer() {
    let questions = extract_questions(vec![vec!["Q1", "A1"]]);
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question(), "Q1");
    assert_eq!(questions[0].answers(), ["A1"]);
}

#[test]
fn remaining_cells_become_answers() {
    let questions = extract_questions(vec![vec!["Q1", "A1", "A2"]]);
    assert_eq!(questions[0].answers(), ["A1", "A2"]);
}

#[test]
fn order_is_preserved_and_short_rows_dropped() {
    let rows = vec![
        vec!["Q1", "A1"],
        vec![],
        vec!["Heading only"],
        vec!["Q2", "A2", "A3"],
    ];
    let questions = extract_questions(&rows);
    let texts: Vec<&str> = questions.iter().map(|qa| qa.question()).collect();
    assert_eq!(texts, vec!["Q1", "Q2"]);
    assert_eq!(questions[1].answers(), ["A2", "A3"]);
}

#[test]
fn blank_cells_do_not_count() {
    assert!(QuestionAnswer::from_cells(&["Q1", "  "]).is_none());
    let qa = QuestionAnswer::from_cells(&["", "Q1", "", "A1"]).unwrap();
    assert_eq!(qa.question(), "Q1");
    assert_eq!(qa.answers(), ["A1"]);
}

#[test]
fn checked_constructor_enforces_shape() {
    assert!(matches!(
        QuestionAnswer::new("", vec!["A".to_string()]),
        Err(QuizError::InvalidQuestion(_))
    ));
    assert!(matches!(
        QuestionAnswer::new("Q", Vec::new()),
        Err(QuizError::InvalidQuestion(_))
    ));
    assert!(QuestionAnswer::new("Q", vec!["A".to_string()]).is_ok());
}

#[test]
fn sheet_from_raw_rows() {
    let raw = RawSheet {
        name: "General".to_string(),
        dimension: Some("A1:C3".to_string()),
        rows: vec![
            RawRow {
                number: 1,
                cells: vec!["Q1".to_string(), "A1".to_string()],
            },
            RawRow {
                number: 2,
                cells: vec!["Lonely".to_string()],
            },
            RawRow {
                number: 3,
                cells: vec!["Q2".to_string(), "A2".to_string(), "A3".to_string()],
            },
        ],
    };

    let sheet = Sheet::from_raw(raw);
    assert_eq!(sheet.name(), "General");
    assert_eq!(sheet.questions().len(), 2);
    assert_eq!(sheet.questions()[1].answers(), ["A2", "A3"]);
}

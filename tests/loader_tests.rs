use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use trivia_quiz::loader::{load_workbook, parse_csv};
use trivia_quiz::{QuizError, Sheet};

fn write_trivia_xlsx(path: &Path) {
    let mut workbook = Workbook::new();

    let general = workbook.add_worksheet();
    general.set_name("General").unwrap();
    general.write_string(0, 0, "What is the capital of France?").unwrap();
    general.write_string(0, 1, "Paris").unwrap();
    general.write_string(1, 0, "Round two").unwrap();
    general.write_string(3, 0, "How many legs does a spider have?").unwrap();
    general.write_number(3, 1, 8).unwrap();
    general.write_string(3, 2, "Eight").unwrap();

    let empty = workbook.add_worksheet();
    empty.set_name("Empty").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn xlsx_sheets_load_in_tab_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trivia.xlsx");
    write_trivia_xlsx(&path);

    let sheets = load_workbook(&path).unwrap();
    let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["General", "Empty"]);

    let general = &sheets[0];
    assert_eq!(general.dimension.as_deref(), Some("A1:C4"));
    assert_eq!(general.rows.len(), 3);
    assert_eq!(general.rows[0].number, 1);
    assert_eq!(general.rows[2].number, 4);
    assert_eq!(
        general.rows[2].cells,
        vec!["How many legs does a spider have?", "8", "Eight"]
    );

    assert_eq!(sheets[1].dimension, None);
    assert!(sheets[1].rows.is_empty());
}

#[test]
fn xlsx_rows_become_questions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trivia.xlsx");
    write_trivia_xlsx(&path);

    let mut sheets = load_workbook(&path).unwrap().into_iter().map(Sheet::from_raw);
    let general = sheets.next().unwrap();

    assert_eq!(general.questions().len(), 2);
    assert_eq!(general.questions()[0].answers(), ["Paris"]);
    assert_eq!(general.questions()[1].answers(), ["8", "Eight"]);
}

#[test]
fn csv_file_loads_as_one_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pub night.csv");
    fs::write(
        &path,
        "Question,Answer\n\"Largest planet, by mass?\",Jupiter\n\n\"Say \"\"hi\"\"\",\"\"\"hi\"\"\"\n",
    )
    .unwrap();

    let sheets = load_workbook(&path).unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].name, "pub night");
    assert_eq!(sheets[0].dimension.as_deref(), Some("A1:B4"));

    let rows: Vec<&Vec<String>> = sheets[0].rows.iter().map(|r| &r.cells).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], &vec!["Largest planet, by mass?", "Jupiter"]);
    assert_eq!(rows[2], &vec!["Say \"hi\"", "\"hi\""]);
}

#[test]
fn csv_blank_fields_are_dropped() {
    let sheet = parse_csv("Quiz".to_string(), &["Q1,,A1,", ",,,"]).unwrap();
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.rows[0].cells, vec!["Q1", "A1"]);
    assert_eq!(sheet.dimension.as_deref(), Some("A1:D1"));
}

#[test]
fn csv_unterminated_quote_is_an_error() {
    let result = parse_csv("Quiz".to_string(), &["Q1,A1", "\"Q2,A2"]);
    assert!(matches!(result, Err(QuizError::Csv { line: 2, .. })));
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(load_workbook(dir.path().join("missing.xlsx")).is_err());
    assert!(matches!(
        load_workbook(dir.path().join("missing.csv")),
        Err(QuizError::Io(_))
    ));
}

#[test]
fn unsupported_extensions_are_rejected() {
    assert!(matches!(
        load_workbook("questions.txt"),
        Err(QuizError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        load_workbook("questions"),
        Err(QuizError::UnsupportedFormat(_))
    ));
}

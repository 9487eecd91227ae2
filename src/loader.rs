use crate::cell_ref;
use crate::error::{QuizError, Result};
use calamine::{Data, Range, Reader, open_workbook_auto};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One populated row of a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based row number in the source sheet.
    pub number: u32,
    /// Non-empty cell texts in column order.
    pub cells: Vec<String>,
}

/// One tab of a workbook, reduced to its cell texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSheet {
    pub name: String,
    /// Used area such as `A1:C12`; `None` for an empty sheet.
    pub dimension: Option<String>,
    pub rows: Vec<RawRow>,
}

/// Load every sheet of an Excel or OpenDocument workbook.
///
/// Sheets come back in tab order. Any sheet that fails to read aborts the
/// whole load.
///
/// # Examples
/// ```no_run
/// use trivia_quiz::loader::from_excel;
///
/// match from_excel("trivia.xlsx") {
///     Ok(sheets) => println!("Loaded {} sheets", sheets.len()),
///     Err(e) => eprintln!("Error loading workbook: {}", e),
/// }
/// ```
pub fn from_excel(filepath: impl AsRef<Path>) -> Result<Vec<RawSheet>> {
    let mut workbook = open_workbook_auto(filepath)?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| QuizError::Sheet {
                sheet: name.clone(),
                source,
            })?;
        sheets.push(sheet_from_range(name, &range)?);
    }

    Ok(sheets)
}

fn sheet_from_range(name: String, range: &Range<Data>) -> Result<RawSheet> {
    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        debug!("sheet `{}` is empty", name);
        return Ok(RawSheet {
            name,
            dimension: None,
            rows: Vec::new(),
        });
    };

    // calamine positions are 0-based (row, column)
    let dimension =
        cell_ref::dimension_address((start.0 + 1, start.1 + 1), (end.0 + 1, end.1 + 1))?;
    debug!("sheet `{}` spans {}", name, dimension);

    let rows = range
        .rows()
        .zip(start.0 + 1..)
        .map(|(row, number)| RawRow {
            number,
            cells: row.iter().filter_map(cell_text).collect(),
        })
        .filter(|row| !row.cells.is_empty())
        .collect();

    Ok(RawSheet {
        name,
        dimension: Some(dimension),
        rows,
    })
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Load a CSV file as a single sheet named after the file stem.
pub fn from_csv(filepath: impl AsRef<Path>) -> Result<Vec<RawSheet>> {
    let path = filepath.as_ref();
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Sheet1")
        .to_string();

    let reader = BufReader::new(File::open(path)?);
    let lines: Vec<String> = reader.lines().collect::<std::result::Result<_, _>>()?;

    Ok(vec![parse_csv(name, &lines)?])
}

/// Build a sheet from CSV lines. Quoted fields may contain commas and `""` escapes.
pub fn parse_csv<S: AsRef<str>>(name: String, lines: &[S]) -> Result<RawSheet> {
    let mut rows = Vec::new();
    let mut last_column = 0;

    for (i, line) in lines.iter().enumerate() {
        let fields = parse_csv_row(line.as_ref()).map_err(|message| QuizError::Csv {
            line: i + 1,
            message,
        })?;
        last_column = last_column.max(fields.len());

        let cells: Vec<String> = fields
            .into_iter()
            .map(|field| field.trim().to_string())
            .filter(|field| !field.is_empty())
            .collect();
        if !cells.is_empty() {
            rows.push(RawRow {
                number: (i + 1) as u32,
                cells,
            });
        }
    }

    let dimension = match rows.last() {
        Some(last) => Some(cell_ref::dimension_address(
            (1, 1),
            (last.number, last_column as u32),
        )?),
        None => None,
    };

    Ok(RawSheet {
        name,
        dimension,
        rows,
    })
}

// Parse a CSV row into a vector of strings
fn parse_csv_row(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut result = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted field
                    current_field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                result.push(std::mem::take(&mut current_field));
            }
            _ => current_field.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }

    result.push(current_field);
    Ok(result)
}

/// Detect the file type and load it with the matching reader.
///
/// # Examples
/// ```no_run
/// use trivia_quiz::loader::load_workbook;
///
/// match load_workbook("trivia.xlsx") {
///     Ok(sheets) => println!("Loaded {} sheets", sheets.len()),
///     Err(e) => eprintln!("Error loading file: {}", e),
/// }
/// ```
pub fn load_workbook(filepath: impl AsRef<Path>) -> Result<Vec<RawSheet>> {
    let path = filepath.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match extension.as_deref() {
        Some("csv") => from_csv(path),
        Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => from_excel(path),
        Some(ext) => Err(QuizError::UnsupportedFormat(format!(
            "unsupported file extension: {}",
            ext
        ))),
        None => Err(QuizError::UnsupportedFormat(
            "file has no extension".to_string(),
        )),
    }
}

//! Conversions between 1-based `(row, column)` pairs and `A1`-style cell addresses.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Largest row number a worksheet can address.
pub const MAX_ROWS: u32 = 1_048_576;

/// Largest column number a worksheet can address (`XFD`).
pub const MAX_COLUMNS: u32 = 16_384;

lazy_static! {
    static ref CELL_ADDRESS_REGEX: Regex = Regex::new(r"^\$?([A-Za-z]+)\$?([0-9]+)$").unwrap();
}

/// Failure to convert between numeric positions and cell addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellRefError {
    #[error("row {0} is outside 1..=1048576")]
    RowOutOfRange(u64),

    #[error("column {0} is outside 1..=16384")]
    ColumnOutOfRange(u64),

    #[error("column letters {0:?} are past XFD")]
    ColumnLettersOutOfRange(String),

    #[error("{0:?} is not a cell address")]
    Malformed(String),
}

/// Convert a 1-based column number to its letters (1 = `A`, 27 = `AA`).
pub fn column_to_letters(column: u32) -> Result<String, CellRefError> {
    if column == 0 || column > MAX_COLUMNS {
        return Err(CellRefError::ColumnOutOfRange(u64::from(column)));
    }

    let mut n = column;
    let mut letters = Vec::with_capacity(3);
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();

    Ok(letters.into_iter().map(char::from).collect())
}

/// Convert column letters (case-insensitive) to a 1-based column number.
pub fn letters_to_column(letters: &str) -> Result<u32, CellRefError> {
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CellRefError::Malformed(letters.to_string()));
    }

    let column = letters.chars().try_fold(0u32, |acc, c| {
        let digit = u32::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
        acc.checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .filter(|v| *v <= MAX_COLUMNS)
    });

    column.ok_or_else(|| CellRefError::ColumnLettersOutOfRange(letters.to_string()))
}

/// Format a 1-based `(row, column)` pair as a cell address such as `C12`.
pub fn row_column_to_cell_address(row: u32, column: u32) -> Result<String, CellRefError> {
    if row == 0 || row > MAX_ROWS {
        return Err(CellRefError::RowOutOfRange(u64::from(row)));
    }
    Ok(format!("{}{}", column_to_letters(column)?, row))
}

/// Parse a cell address such as `C12` (or `$C$12`) into a 1-based `(row, column)` pair.
pub fn cell_address_to_row_column(address: &str) -> Result<(u32, u32), CellRefError> {
    let captures = CELL_ADDRESS_REGEX
        .captures(address.trim())
        .ok_or_else(|| CellRefError::Malformed(address.to_string()))?;

    let column = letters_to_column(&captures[1])?;
    let row: u64 = captures[2]
        .parse()
        .map_err(|_| CellRefError::Malformed(address.to_string()))?;
    if row == 0 || row > u64::from(MAX_ROWS) {
        return Err(CellRefError::RowOutOfRange(row));
    }

    Ok((row as u32, column))
}

/// Format the used area of a sheet as a dimension string (`A1:C12`).
///
/// A single-cell area collapses to one address, as worksheet files write it.
pub fn dimension_address(first: (u32, u32), last: (u32, u32)) -> Result<String, CellRefError> {
    let start = row_column_to_cell_address(first.0, first.1)?;
    if first == last {
        return Ok(start);
    }
    let end = row_column_to_cell_address(last.0, last.1)?;
    Ok(format!("{start}:{end}"))
}

/// Parse a dimension string (`A1:C12` or `B3`) into its first and last `(row, column)`.
pub fn parse_dimension(dimension: &str) -> Result<((u32, u32), (u32, u32)), CellRefError> {
    match dimension.split_once(':') {
        Some((start, end)) => Ok((
            cell_address_to_row_column(start)?,
            cell_address_to_row_column(end)?,
        )),
        None => {
            let cell = cell_address_to_row_column(dimension)?;
            Ok((cell, cell))
        }
    }
}

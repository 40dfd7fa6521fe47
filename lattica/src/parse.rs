//! Text-to-matrix parser
//!
//! Converts raw multi-line text into a rectangular grid. Commas and tabs
//! are treated as spaces, blank lines are skipped, and row indices in
//! errors are 1-based over the original line numbering.

use lattica_core::{Matrix, ParseError};

/// Parse raw text into a Matrix
pub fn parse(text: &str) -> Result<Matrix, ParseError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut expected: Option<usize> = None;

    for (idx, line) in text.lines().enumerate() {
        let row_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let normalized = line.replace([',', '\t'], " ");
        let mut row = Vec::new();
        for token in normalized.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| ParseError::NonNumeric {
                row: row_no,
                raw: line.to_string(),
            })?;
            row.push(value);
        }

        // A line of separators only contributes no row
        if row.is_empty() {
            continue;
        }

        match expected {
            None => expected = Some(row.len()),
            Some(width) if row.len() != width => {
                return Err(ParseError::InconsistentRowLength {
                    row: row_no,
                    found: row.len(),
                    expected: width,
                });
            }
            Some(_) => {}
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParseError::EmptyMatrix);
    }

    Matrix::from_rows(rows)
}

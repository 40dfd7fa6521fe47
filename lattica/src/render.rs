//! Result renderer
//!
//! Renders a successful outcome as human-readable text. Display
//! precision is a parameter of the renderer, never a process-wide
//! setting.

use lattica_core::{Matrix, Outcome};

/// Decimal places used for matrix cells
pub const DEFAULT_MATRIX_PLACES: usize = 4;
/// Decimal places used for scalar results
pub const DEFAULT_SCALAR_PLACES: usize = 6;

/// Outcome renderer with fixed decimal precision
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    matrix_places: usize,
    scalar_places: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            matrix_places: DEFAULT_MATRIX_PLACES,
            scalar_places: DEFAULT_SCALAR_PLACES,
        }
    }

    pub fn with_matrix_places(mut self, places: usize) -> Self {
        self.matrix_places = places;
        self
    }

    pub fn with_scalar_places(mut self, places: usize) -> Self {
        self.scalar_places = places;
        self
    }

    /// Render an outcome as display text
    pub fn render(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Matrix(m) => self.render_matrix(m),
            Outcome::Scalar(x) => self.render_scalar(*x),
        }
    }

    /// Rows of fixed-precision values, right-aligned per column
    pub fn render_matrix(&self, m: &Matrix) -> String {
        let cells: Vec<Vec<String>> = m
            .to_rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| format_value(v, self.matrix_places))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..m.cols())
            .map(|j| cells.iter().map(|row| row[j].len()).max().unwrap_or(0))
            .collect();

        cells
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{:>width$}", cell))
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Fixed-precision scalar, 6 places by default
    pub fn render_scalar(&self, value: f64) -> String {
        format_value(value, self.scalar_places)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-precision rendering; a tiny negative that rounds to "-0.0000"
/// loses its sign
fn format_value(value: f64, places: usize) -> String {
    let s = format!("{:.prec$}", value, prec = places);
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

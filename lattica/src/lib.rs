//! Lattica - Matrix Operations Engine
//!
//! Parses human-typed matrix text, dispatches dimension-validated
//! linear-algebra operations, and renders results for display. The UI
//! shell (window, text boxes, buttons) is an external client of this
//! crate; every button press maps to one `Lattica::compute` call with
//! freshly re-read inputs.

mod ops;
mod parse;
mod render;

pub use ops::dispatch;
pub use parse::parse;
pub use render::{Renderer, DEFAULT_MATRIX_PLACES, DEFAULT_SCALAR_PLACES};

pub use lattica_core::{
    DimensionError, Error, LinAlgError, Matrix, Operation, Outcome, ParseError, Shape,
};

/// Main engine: one call per user action
pub struct Lattica {
    renderer: Renderer,
}

impl Lattica {
    pub fn new() -> Self {
        Self {
            renderer: Renderer::new(),
        }
    }

    /// Override display precision
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Parse operands and dispatch one operation
    ///
    /// `text_b` is read only for binary operations; transpose and
    /// determinant ignore it entirely.
    pub fn evaluate(
        &self,
        op: Operation,
        text_a: &str,
        text_b: Option<&str>,
    ) -> Result<Outcome, Error> {
        let a = parse(text_a)?;
        let b = match text_b {
            Some(text) if op.is_binary() => Some(parse(text)?),
            _ => None,
        };
        dispatch(op, &a, b.as_ref())
    }

    /// Evaluate and render display text in one step
    pub fn compute(
        &self,
        op: Operation,
        text_a: &str,
        text_b: Option<&str>,
    ) -> Result<String, Error> {
        let outcome = self.evaluate(op, text_a, text_b)?;
        Ok(self.renderer.render(&outcome))
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

impl Default for Lattica {
    fn default() -> Self {
        Self::new()
    }
}

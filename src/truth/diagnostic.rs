//! Structured diagnostics for tautology-checking failures.
//!
//! Each [`TautologyError`](super::TautologyError) maps to a diagnostic with
//! a stable machine-readable code and a deterministic single-line
//! rendering suitable for snapshot tests.

use std::fmt;

/// Stable diagnostic classification codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthDiagnosticCode {
    /// A valuation made the formula false.
    Falsified,
    /// The formula has more variables than can be enumerated.
    TooManyVariables,
}

impl TruthDiagnosticCode {
    /// Returns the stable, machine-readable code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Falsified => "truth.falsified",
            Self::TooManyVariables => "truth.too_many_variables",
        }
    }
}

impl fmt::Display for TruthDiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthDiagnostic {
    /// Stable diagnostic code for programmatic handling.
    pub code: TruthDiagnosticCode,
    /// Deterministic human-readable message.
    pub message: String,
}

impl TruthDiagnostic {
    /// Renders the diagnostic as `code | message`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{} | {}", self.code, self.message)
    }
}

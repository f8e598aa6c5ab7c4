//! Error types for tautology checking.

use super::diagnostic::{TruthDiagnostic, TruthDiagnosticCode};
use super::value::Truth;

/// Errors reported by the tautology checker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TautologyError {
    /// The formula evaluated to false under at least one valuation.
    #[error("formula is falsified by the valuation {}", render_valuation(.valuation))]
    Falsified {
        /// The first falsifying valuation, in variable order.
        valuation: Vec<Truth>,
    },

    /// The formula has too many variables to enumerate.
    #[error("cannot enumerate {requested} variables; at most {max} are supported")]
    TooManyVariables {
        /// The number of variables asked for.
        requested: usize,
        /// The supported maximum.
        max: usize,
    },
}

impl TautologyError {
    /// Returns the structured diagnostic for this error.
    #[must_use]
    pub fn diagnostic(&self) -> TruthDiagnostic {
        let code = match self {
            Self::Falsified { .. } => TruthDiagnosticCode::Falsified,
            Self::TooManyVariables { .. } => TruthDiagnosticCode::TooManyVariables,
        };
        TruthDiagnostic {
            code,
            message: self.to_string(),
        }
    }
}

/// Renders a valuation as `[T, F, T]`.
fn render_valuation(valuation: &[Truth]) -> String {
    let cells: Vec<String> = valuation.iter().map(ToString::to_string).collect();
    format!("[{}]", cells.join(", "))
}

use thiserror::Error;

/// Errors raised by the theory core.
///
/// Everything else in the core is total over its inputs; these are the only
/// fail-fast paths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TheoryError {
    #[error("Unknown {kind} type: {key}")]
    UnknownFormula { kind: FormulaKind, key: String },

    #[error("Unknown CAGED shape: {0} (expected one of C, A, G, E, D)")]
    UnknownShape(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Unknown interval label: {0}")]
    UnknownInterval(String),

    #[error("Invalid note name: {0:?}")]
    InvalidNoteName(String),
}

/// Which formula table a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FormulaKind {
    Scale,
    Chord,
}

impl std::fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormulaKind::Scale => write!(f, "scale"),
            FormulaKind::Chord => write!(f, "chord"),
        }
    }
}

impl TheoryError {
    pub(crate) fn unknown_scale(key: &str) -> Self {
        TheoryError::UnknownFormula {
            kind: FormulaKind::Scale,
            key: key.to_string(),
        }
    }

    pub(crate) fn unknown_chord(key: &str) -> Self {
        TheoryError::UnknownFormula {
            kind: FormulaKind::Chord,
            key: key.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TheoryError>;

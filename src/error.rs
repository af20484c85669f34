use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error at line {line_number}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub line_number: usize,
}

impl SyntaxError {
    pub fn new(message: String, line_number: usize) -> Self {
        Self {
            message,
            line_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("key not found: `{key}`")]
    KeyNotFound { key: String },
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("number {value} cannot be represented as {target}")]
    NumericOverflow { value: f64, target: &'static str },
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("cannot interpret {found} as a json value")]
    UnsupportedValueInterpretation { found: String },
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("shape mismatch: expected {expected}, found {found}")]
    Shape { expected: String, found: String },

    #[error("model has not been fitted")]
    NotFitted,

    #[error("least squares has no unique solution")]
    Singular,

    #[error("dataset has no samples")]
    Empty,

    #[error("dataset has no feature columns")]
    NoFeatures,

    #[error("CSV shape error: {0}")]
    ReadCsv(#[from] ndarray_csv::ReadError),
}

impl Error {
    pub fn shape(expected: impl ToString, found: impl ToString) -> Self {
        Self::Shape {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

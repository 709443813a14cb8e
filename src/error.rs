use thiserror::Error;

/// Errors raised by vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Assignment to a field other than `x`, `y`, `length` or `angle`
    /// on a representation that does not accept extra fields.
    #[error("invalid field `{0}` on Vector2D")]
    InvalidField(String),

    /// Division by a zero scalar, or by a vector with a zero component.
    #[error("vector NaN occurred: division by zero")]
    Division,

    #[error("invalid axis order `{0}`, expected \"xy\" or \"yx\"")]
    InvalidAxisOrder(String),
}

pub type Result<T> = std::result::Result<T, VectorError>;

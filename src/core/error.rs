use std::fmt;

/// Failures raised by [`Vector2D`](crate::util::linalg::Vector2D) operations.
///
/// Every variant is a local, recoverable failure: nothing is retried and nothing is fatal to the
/// process. The type implements [`std::error::Error`], so it converts into [`anyhow::Error`]
/// through `?`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// A vector was divided by a zero scalar.
    DivisionByZero,
    /// The operation has no defined result for the zero vector.
    UndefinedOperation { operation: &'static str },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::DivisionByZero => write!(f, "cannot divide by zero"),
            VectorError::UndefinedOperation { operation } => {
                write!(f, "cannot compute {operation} of a zero vector")
            }
        }
    }
}

impl std::error::Error for VectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_operation() {
        assert_eq!(VectorError::DivisionByZero.to_string(), "cannot divide by zero");
        assert_eq!(
            VectorError::UndefinedOperation { operation: "normalize" }.to_string(),
            "cannot compute normalize of a zero vector"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(VectorError::DivisionByZero)?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(
            err.downcast_ref::<VectorError>(),
            Some(&VectorError::DivisionByZero)
        );
    }
}

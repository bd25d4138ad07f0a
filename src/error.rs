use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input to a rotation or reversal. A caller bug, not retryable.
    InvalidArgument,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Rotation offset must be non-negative, got {offset}")]
    NegativeOffset { offset: i64 },

    #[error("Range start {start} is past range end {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("Range end {end} is out of bounds for sequence of length {len}")]
    RangeOutOfBounds { end: usize, len: usize },

    #[error("Failed to parse sequence: {0}")]
    ParseSequence(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NegativeOffset { .. }
            | Error::InvertedRange { .. }
            | Error::RangeOutOfBounds { .. } => ErrorKind::InvalidArgument,
            Error::ParseSequence(_) => ErrorKind::Parse,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(Error::NegativeOffset { offset: -1 } => ErrorKind::InvalidArgument)]
    #[test_case(Error::InvertedRange { start: 3, end: 1 } => ErrorKind::InvalidArgument)]
    #[test_case(Error::RangeOutOfBounds { end: 5, len: 5 } => ErrorKind::InvalidArgument)]
    #[test_case(Error::ParseSequence("x".to_string()) => ErrorKind::Parse)]
    fn error_kind(err: Error) -> ErrorKind {
        err.kind()
    }

    #[test]
    fn display() {
        let err = Error::RangeOutOfBounds { end: 5, len: 5 };

        assert_eq!(
            err.to_string(),
            "Range end 5 is out of bounds for sequence of length 5"
        );
    }
}

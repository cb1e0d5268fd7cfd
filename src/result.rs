use crate::error::{BoxedError, ResultError};

/// Outcome of running a parser
///
/// A failure carries no remainder: callers that want to retry from where
/// they started must hold on to their original input.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<T, I> {
    Success { result: T, rest: I },
    Fail(BoxedError),
}

impl<T, I> ParseResult<T, I> {
    pub fn success(result: T, rest: I) -> Self {
        ParseResult::Success { result, rest }
    }

    pub fn fail(error: impl Into<BoxedError>) -> Self {
        ParseResult::Fail(error.into())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ParseResult::Fail(_))
    }

    pub fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// Take the parsed value
    ///
    /// Returns `ResultError::NotSuccess` with the contained error if the
    /// parse failed.
    pub fn unwrap(self) -> Result<T, ResultError> {
        match self {
            ParseResult::Success { result, .. } => Ok(result),
            ParseResult::Fail(error) => Err(ResultError::NotSuccess(error)),
        }
    }

    /// Borrow the error of a failed parse
    ///
    /// Returns `ResultError::NotFailed` if the parse succeeded.
    pub fn error(&self) -> Result<&BoxedError, ResultError> {
        match self {
            ParseResult::Success { .. } => Err(ResultError::NotFailed),
            ParseResult::Fail(error) => Ok(error),
        }
    }

    /// The unconsumed input of a successful parse
    pub fn rest(&self) -> Option<&I> {
        match self {
            ParseResult::Success { rest, .. } => Some(rest),
            ParseResult::Fail(_) => None,
        }
    }

    pub fn into_result(self) -> Result<(T, I), BoxedError> {
        self.into()
    }
}

impl<T, I> From<ParseResult<T, I>> for Result<(T, I), BoxedError> {
    fn from(result: ParseResult<T, I>) -> Self {
        match result {
            ParseResult::Success { result, rest } => Ok((result, rest)),
            ParseResult::Fail(error) => Err(error),
        }
    }
}

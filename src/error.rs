use std::any::Any;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Access to the concrete type behind a `dyn ParseError`
///
/// Blanket-implemented for every `'static` type, so error authors never
/// implement it by hand.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Capability every error carried by a failed parse must expose
///
/// Errors of different concrete types can flow through the same parser. Two
/// errors are equal when they are the same concrete kind and report the same
/// `code`; fields beyond the code only take part through `same_payload`,
/// which is consulted once kind and code already match.
///
/// # Example
///
/// ```rust
/// use parsel::error::{ParseError, payload_eq};
///
/// #[derive(Debug, PartialEq, thiserror::Error)]
/// #[error("expected a closing delimiter for {0:?}")]
/// struct Unclosed(char);
///
/// impl ParseError for Unclosed {
///     fn code(&self) -> u64 {
///         100
///     }
///
///     fn same_payload(&self, other: &dyn ParseError) -> bool {
///         payload_eq(self, other)
///     }
/// }
/// ```
pub trait ParseError: Error + AsAny + Send + Sync {
    /// Discriminant identifying this error for equality and dispatch
    fn code(&self) -> u64;

    /// Compare kind-specific content with an error of the same kind and code
    ///
    /// The default ignores content, so errors of one kind compare by code
    /// alone.
    fn same_payload(&self, other: &dyn ParseError) -> bool {
        let _ = other;
        true
    }
}

/// `same_payload` implementation for error kinds that derive `PartialEq`
pub fn payload_eq<E>(this: &E, other: &dyn ParseError) -> bool
where
    E: ParseError + PartialEq + 'static,
{
    other
        .as_any()
        .downcast_ref::<E>()
        .is_some_and(|other| this == other)
}

/// Type-erased error stored in a failed `ParseResult`
///
/// Cloning shares the underlying error.
#[derive(Clone)]
pub struct BoxedError(Arc<dyn ParseError>);

impl BoxedError {
    pub fn new(error: impl ParseError + 'static) -> Self {
        BoxedError(Arc::new(error))
    }

    pub fn code(&self) -> u64 {
        self.inner().code()
    }

    /// Borrow the error as its concrete kind, if it is one
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: ParseError + 'static,
    {
        self.inner().as_any().downcast_ref::<E>()
    }

    pub fn is<E>(&self) -> bool
    where
        E: ParseError + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    fn inner(&self) -> &dyn ParseError {
        &*self.0
    }
}

impl<E: ParseError + 'static> From<E> for BoxedError {
    fn from(error: E) -> Self {
        BoxedError::new(error)
    }
}

impl PartialEq for BoxedError {
    fn eq(&self, other: &Self) -> bool {
        let (this, that) = (self.inner(), other.inner());
        this.as_any().type_id() == that.as_any().type_id()
            && this.code() == that.code()
            && this.same_payload(that)
    }
}

impl fmt::Debug for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner(), f)
    }
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl Error for BoxedError {}

/// Message-only failure for ad-hoc cases
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenericError {
    pub message: Cow<'static, str>,
}

impl GenericError {
    pub const CODE: u64 = 0;

    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        GenericError {
            message: message.into(),
        }
    }
}

impl ParseError for GenericError {
    fn code(&self) -> u64 {
        Self::CODE
    }

    fn same_payload(&self, other: &dyn ParseError) -> bool {
        payload_eq(self, other)
    }
}

/// Failure of a primitive matcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("expected {expected}, but reached end of input")]
    EndOfInput { expected: String },
    #[error("expected {expected}, found {found}")]
    Unexpected { expected: String, found: String },
}

impl MatchError {
    pub const END_OF_INPUT: u64 = 1;
    pub const UNEXPECTED: u64 = 2;

    pub fn end_of_input(expected: impl Into<String>) -> Self {
        MatchError::EndOfInput {
            expected: expected.into(),
        }
    }

    pub fn unexpected(expected: impl Into<String>, found: impl fmt::Debug) -> Self {
        MatchError::Unexpected {
            expected: expected.into(),
            found: format!("{:?}", found),
        }
    }
}

impl ParseError for MatchError {
    fn code(&self) -> u64 {
        match self {
            MatchError::EndOfInput { .. } => Self::END_OF_INPUT,
            MatchError::Unexpected { .. } => Self::UNEXPECTED,
        }
    }

    fn same_payload(&self, other: &dyn ParseError) -> bool {
        payload_eq(self, other)
    }
}

/// Exceptional condition raised while parsing
///
/// Unlike a failed `ParseResult`, a fault is not part of the grammar's normal
/// control flow: it signals a bug in a parser or grammar and is returned as
/// the `Err` side of `Parser::parse`.
#[derive(Debug, Error)]
pub enum Fault {
    /// A repeated parser succeeded without consuming input and would loop forever
    #[error("repeated parser succeeded without consuming input after {matches} matches")]
    NoProgress { matches: usize },
    #[error("parser invariant violated: {0}")]
    Invariant(Cow<'static, str>),
    #[error(transparent)]
    Custom(#[from] Box<dyn Error + Send + Sync>),
}

impl Fault {
    pub fn invariant(message: impl Into<Cow<'static, str>>) -> Self {
        Fault::Invariant(message.into())
    }

    pub fn custom(error: impl Error + Send + Sync + 'static) -> Self {
        Fault::Custom(Box::new(error))
    }
}

/// Misuse of a `ParseResult` accessor on the wrong variant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResultError {
    #[error("called `unwrap` on a failed parse result: {0}")]
    NotSuccess(BoxedError),
    #[error("called `error` on a successful parse result")]
    NotFailed,
}

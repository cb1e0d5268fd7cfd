use crate::error::{BoxedError, Fault, GenericError};
use crate::input::Input;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type ParseFn<'code, I, O> =
    dyn Fn(I) -> Result<ParseResult<O, I>, Fault> + Send + Sync + 'code;

/// A parser from input `I` to values of type `O`
///
/// A parser is an immutable wrapper around one pure function. Combinators
/// never modify a parser, they build a new one around it, so parsers can be
/// cloned cheaply and shared between threads.
///
/// Running a parser has two outcomes:
/// - `Ok(ParseResult)`: the grammar matched (`Success`) or didn't (`Fail`)
/// - `Err(Fault)`: something went wrong that is not a grammar mismatch,
///   such as a repetition that stopped making progress
///
/// Each combinator adds a couple of stack frames per nesting level, and
/// repetition loops rather than recursing. On a default 8 MiB main-thread
/// stack a grammar can nest a few thousand levels deep before overflowing.
///
/// # Input lifetime
///
/// For borrowed input such as `&'code str` the borrow is part of the parser's
/// type, so every input a parser sees must outlive the parser itself. A
/// parser can be reused on any number of inputs, from any number of threads,
/// as long as those inputs were created before it. For inputs that come and
/// go, keep the grammar as a function and build the parser per input:
///
/// ```
/// use parsel::Parser;
/// use parsel::text::letter;
///
/// fn word<'code>() -> Parser<'code, &'code str, Vec<char>> {
///     letter().rep1()
/// }
///
/// for line in ["abc def", "xyz"].map(String::from) {
///     let result = word().parse(&line).unwrap();
///     assert!(result.is_success());
/// }
/// ```
///
/// Combinators are inherent methods on this one concrete type rather than
/// extension traits, since every parser has the same representation.
pub struct Parser<'code, I, O> {
    run: Arc<ParseFn<'code, I, O>>,
}

impl<'code, I, O> Clone for Parser<'code, I, O> {
    fn clone(&self) -> Self {
        Parser {
            run: Arc::clone(&self.run),
        }
    }
}

impl<'code, I, O> fmt::Debug for Parser<'code, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("run", &"<function>")
            .finish()
    }
}

impl<'code, I, O> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    /// Wrap a parsing function that never faults
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(I) -> ParseResult<O, I> + Send + Sync + 'code,
    {
        Parser {
            run: Arc::new(move |input: I| -> Result<ParseResult<O, I>, Fault> {
                Ok(f(input))
            }),
        }
    }

    /// Wrap a parsing function that may fault
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<ParseResult<O, I>, Fault> + Send + Sync + 'code,
    {
        Parser { run: Arc::new(f) }
    }

    /// Parser that succeeds with `value` without consuming input
    pub fn just(value: O) -> Self
    where
        O: Clone + Send + Sync,
    {
        Parser::new(move |input| ParseResult::success(value.clone(), input))
    }

    /// Parser that fails with `error` on any input
    pub fn fail(error: impl Into<BoxedError>) -> Self {
        let error = error.into();
        Parser::new(move |_| ParseResult::Fail(error.clone()))
    }

    /// Parser that fails with a `GenericError` carrying `message`
    pub fn fail_message(message: impl Into<Cow<'static, str>>) -> Self {
        Parser::fail(GenericError::new(message))
    }
}

impl<'code, I, O> Parser<'code, I, O> {
    /// Run the parser on `input`
    pub fn parse(&self, input: I) -> Result<ParseResult<O, I>, Fault> {
        (self.run)(input)
    }

    /// Same as [`Parser::parse`]
    pub fn invoke(&self, input: I) -> Result<ParseResult<O, I>, Fault> {
        self.parse(input)
    }
}

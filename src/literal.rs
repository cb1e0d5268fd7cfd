use crate::error::{BoxedError, MatchError};
use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that consumes and returns any single element
pub fn any<'code, I>() -> Parser<'code, I, I::Element>
where
    I: Input + 'code,
{
    satisfy(|_| true, "any element")
}

/// Parser that consumes a single element matching `predicate`
///
/// `expected` describes the element for error messages.
pub fn satisfy<'code, I, F>(
    predicate: F,
    expected: impl Into<Cow<'static, str>>,
) -> Parser<'code, I, I::Element>
where
    I: Input + 'code,
    F: Fn(&I::Element) -> bool + Send + Sync + 'code,
{
    let expected = expected.into();
    Parser::new(move |input: I| match input.first() {
        Some(element) if predicate(&element) => ParseResult::success(element, input.rest()),
        Some(element) => ParseResult::fail(MatchError::unexpected(&*expected, element)),
        None => ParseResult::fail(MatchError::end_of_input(&*expected)),
    })
}

/// Parser that matches one specific element
///
/// Fails with `MatchError::EndOfInput` on empty input and
/// `MatchError::Unexpected` on any other element.
pub fn literal<'code, I>(token: I::Element) -> Parser<'code, I, I::Element>
where
    I: Input + 'code,
    I::Element: Send + Sync,
{
    let expected = format!("{:?}", token);
    satisfy(move |element| *element == token, expected)
}

/// Parser that matches one specific element, failing with `error`
pub fn literal_with<'code, I>(
    token: I::Element,
    error: impl Into<BoxedError>,
) -> Parser<'code, I, I::Element>
where
    I: Input + 'code,
    I::Element: Send + Sync,
{
    let error = error.into();
    Parser::new(move |input: I| match input.first() {
        Some(element) if element == token => ParseResult::success(element, input.rest()),
        _ => ParseResult::Fail(error.clone()),
    })
}

/// Parser that matches a run of elements exactly
///
/// Succeeds with the matched elements when the input starts with `tokens`,
/// consuming exactly `tokens.len()` elements. A partial match is a failure.
pub fn literal_sequence<'code, I>(tokens: Vec<I::Element>) -> Parser<'code, I, Vec<I::Element>>
where
    I: Input + 'code,
    I::Element: Send + Sync,
{
    let expected = format!("{:?}", tokens);
    Parser::new(move |input: I| {
        let error = match match_prefix(&tokens, input) {
            Ok(rest) => return ParseResult::success(tokens.clone(), rest),
            Err(Some(found)) => MatchError::unexpected(expected.as_str(), found),
            Err(None) => MatchError::end_of_input(expected.as_str()),
        };
        ParseResult::fail(error)
    })
}

/// Parser that matches a run of elements exactly, failing with `error`
pub fn literal_sequence_with<'code, I>(
    tokens: Vec<I::Element>,
    error: impl Into<BoxedError>,
) -> Parser<'code, I, Vec<I::Element>>
where
    I: Input + 'code,
    I::Element: Send + Sync,
{
    let error = error.into();
    Parser::new(move |input: I| {
        if let Ok(rest) = match_prefix(&tokens, input) {
            return ParseResult::success(tokens.clone(), rest);
        }
        ParseResult::Fail(error.clone())
    })
}

/// Parser that succeeds only on exhausted input
pub fn end<'code, I>() -> Parser<'code, I, ()>
where
    I: Input + 'code,
{
    Parser::new(|input: I| match input.first() {
        None => ParseResult::success((), input),
        Some(element) => ParseResult::fail(MatchError::unexpected("end of input", element)),
    })
}

/// Walk `tokens` against the front of `input`
///
/// Returns the input after the prefix, or the first mismatching element
/// (`None` when the input ran out).
pub(crate) fn match_prefix<I: Input>(
    tokens: &[I::Element],
    input: I,
) -> Result<I, Option<I::Element>> {
    let mut current = input;
    for token in tokens {
        match current.first() {
            Some(element) if element == *token => current = current.rest(),
            Some(element) => return Err(Some(element)),
            None => return Err(None),
        }
    }
    Ok(current)
}

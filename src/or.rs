use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;
use log::trace;

impl<'code, I, O> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    /// Try this parser, and if it fails, try `other` on the same input
    ///
    /// This is the only combinator that backtracks: `other` starts from the
    /// input `self` was given, whatever `self` consumed before failing. When
    /// both fail the error of `other` is returned.
    pub fn or(&self, other: &Parser<'code, I, O>) -> Parser<'code, I, O> {
        let (first, second) = (self.clone(), other.clone());
        Parser::try_new(move |input: I| match first.parse(input.clone())? {
            ParseResult::Fail(error) => {
                trace!("alternative failed ({}), trying the next one", error);
                second.parse(input)
            }
            success => Ok(success),
        })
    }
}

/// Convenience function to create an Or parser
pub fn or<'code, I, O>(
    first: &Parser<'code, I, O>,
    second: &Parser<'code, I, O>,
) -> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    first.or(second)
}

/// Try each parser in turn, returning the first success
///
/// An empty list of alternatives fails on any input.
pub fn choice<'code, I, O>(alternatives: &[Parser<'code, I, O>]) -> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    alternatives
        .iter()
        .cloned()
        .reduce(|first, second| first.or(&second))
        .unwrap_or_else(|| Parser::fail_message("no alternatives to choose from"))
}

use crate::error::BoxedError;
use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;

impl<'code, I, O> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    /// Transform the error of a failed parse
    ///
    /// Successes and faults pass through unchanged.
    pub fn map_err<E, F>(&self, transform: F) -> Parser<'code, I, O>
    where
        E: Into<BoxedError>,
        F: Fn(BoxedError) -> E + Send + Sync + 'code,
    {
        let parser = self.clone();
        Parser::try_new(move |input| {
            Ok(match parser.parse(input)? {
                ParseResult::Fail(error) => ParseResult::fail(transform(error)),
                success => success,
            })
        })
    }

    /// Replace the error of a failed parse with `error`
    pub fn expect(&self, error: impl Into<BoxedError>) -> Parser<'code, I, O> {
        let error = error.into();
        self.map_err(move |_| error.clone())
    }
}

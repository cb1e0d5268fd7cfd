use crate::error::BoxedError;
use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;

impl<'code, I, O> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    /// Reject successful parses whose value fails validation
    ///
    /// `validate` runs only after `self` succeeds. Returning `Some(error)`
    /// turns the success into a failure with exactly that error; what `self`
    /// consumed is dropped along with it. Returning `None` lets the success
    /// through untouched.
    pub fn filter<E, F>(&self, validate: F) -> Parser<'code, I, O>
    where
        E: Into<BoxedError>,
        F: Fn(&O) -> Option<E> + Send + Sync + 'code,
    {
        let parser = self.clone();
        Parser::try_new(move |input| {
            let result = parser.parse(input)?;
            if let ParseResult::Success { result: value, .. } = &result {
                if let Some(error) = validate(value) {
                    return Ok(ParseResult::fail(error));
                }
            }
            Ok(result)
        })
    }
}

/// Convenience function to create a filtered parser
pub fn filter<'code, I, O, E, F>(
    parser: &Parser<'code, I, O>,
    validate: F,
) -> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
    E: Into<BoxedError>,
    F: Fn(&O) -> Option<E> + Send + Sync + 'code,
{
    parser.filter(validate)
}

use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;

impl<'code, I, O> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    /// Transform the output of this parser
    ///
    /// The remainder is kept as is. On failure `transform` is not called and
    /// the error passes through unchanged.
    pub fn map<U, F>(&self, transform: F) -> Parser<'code, I, U>
    where
        U: 'code,
        F: Fn(O) -> U + Send + Sync + 'code,
    {
        let parser = self.clone();
        Parser::try_new(move |input| {
            Ok(match parser.parse(input)? {
                ParseResult::Success { result, rest } => {
                    ParseResult::success(transform(result), rest)
                }
                ParseResult::Fail(error) => ParseResult::Fail(error),
            })
        })
    }
}

/// Convenience function to create a mapped parser
pub fn map<'code, I, O, U, F>(
    parser: &Parser<'code, I, O>,
    transform: F,
) -> Parser<'code, I, U>
where
    I: Input + 'code,
    O: 'code,
    U: 'code,
    F: Fn(O) -> U + Send + Sync + 'code,
{
    parser.map(transform)
}

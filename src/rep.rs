use crate::error::{Fault, GenericError};
use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;
use log::debug;

impl<'code, I, O> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    /// Match this parser zero or more times
    ///
    /// Applies `self` greedily from left to right, collecting each value,
    /// and stops at the first failure, whose error is discarded. The result
    /// is therefore never a failure: no matches gives an empty vector and the
    /// original input.
    ///
    /// A success that consumes nothing would repeat forever; it is reported
    /// as `Fault::NoProgress` instead.
    pub fn rep(&self) -> Parser<'code, I, Vec<O>> {
        let parser = self.clone();
        Parser::try_new(move |mut input: I| {
            let mut results = Vec::new();

            loop {
                let remaining = input.len();
                match parser.parse(input.clone())? {
                    ParseResult::Success { result, rest } => {
                        if rest.len() >= remaining {
                            debug!(
                                "repetition stopped: zero-width match after {} matches",
                                results.len()
                            );
                            return Err(Fault::NoProgress {
                                matches: results.len(),
                            });
                        }
                        results.push(result);
                        input = rest;
                    }
                    // Zero or more, so the error is not propagated
                    ParseResult::Fail(_) => break,
                }
            }

            Ok(ParseResult::success(results, input))
        })
    }

    /// Match this parser one or more times
    pub fn rep1(&self) -> Parser<'code, I, Vec<O>> {
        self.rep().filter(|results| {
            results
                .is_empty()
                .then(|| GenericError::new("expected at least one match"))
        })
    }
}

/// Convenience function to create a zero-or-more repetition
pub fn rep<'code, I, O>(parser: &Parser<'code, I, O>) -> Parser<'code, I, Vec<O>>
where
    I: Input + 'code,
    O: 'code,
{
    parser.rep()
}

/// Convenience function to create a one-or-more repetition
pub fn rep1<'code, I, O>(parser: &Parser<'code, I, O>) -> Parser<'code, I, Vec<O>>
where
    I: Input + 'code,
    O: 'code,
{
    parser.rep1()
}

use crate::input::Input;
use crate::parser::Parser;

impl<'code, I, O> Parser<'code, I, O>
where
    I: Input + 'code,
    O: Clone + Send + Sync + 'code,
{
    /// Sequence two parsers and return both results as a tuple
    ///
    /// Chaining `.and()` nests tuples: `a.and(&b).and(&c)` produces
    /// `((a, b), c)`.
    ///
    /// ```rust
    /// use parsel::ParseResult;
    /// use parsel::text::{char, digit};
    ///
    /// let parser = digit().and(&char('.')).and(&digit());
    /// assert_eq!(
    ///     parser.parse("1.5").unwrap(),
    ///     ParseResult::success((('1', '.'), '5'), "")
    /// );
    /// ```
    pub fn and<U>(&self, other: &Parser<'code, I, U>) -> Parser<'code, I, (O, U)>
    where
        U: 'code,
    {
        let other = other.clone();
        self.flat_map(move |first| {
            other.map(move |second| (first.clone(), second))
        })
    }

    /// Run `other` after this parser, keeping only this parser's output
    pub fn skip<U>(&self, other: &Parser<'code, I, U>) -> Parser<'code, I, O>
    where
        U: 'code,
    {
        self.and(other).map(|(first, _)| first)
    }
}

impl<'code, I, O> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    /// Run this parser, then `other`, keeping only the output of `other`
    pub fn then<U>(&self, other: &Parser<'code, I, U>) -> Parser<'code, I, U>
    where
        U: 'code,
    {
        let other = other.clone();
        self.flat_map(move |_| other.clone())
    }
}

/// Convenience function to create an And parser
pub fn and<'code, I, O, U>(
    first: &Parser<'code, I, O>,
    second: &Parser<'code, I, U>,
) -> Parser<'code, I, (O, U)>
where
    I: Input + 'code,
    O: Clone + Send + Sync + 'code,
    U: 'code,
{
    first.and(second)
}

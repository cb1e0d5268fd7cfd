use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;

impl<'code, I, O> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
{
    /// Sequence this parser with one chosen from its output
    ///
    /// Runs `self`; on success, `next` receives the value and the parser it
    /// returns is run on the remainder. Its result is returned directly. On
    /// failure `next` is never called.
    ///
    /// ```rust
    /// use parsel::ParseResult;
    /// use parsel::text::char;
    ///
    /// // a character followed by the same character again
    /// let doubled = char('a').flat_map(char);
    /// assert_eq!(doubled.parse("aab").unwrap(), ParseResult::success('a', "b"));
    /// ```
    pub fn flat_map<U, F>(&self, next: F) -> Parser<'code, I, U>
    where
        U: 'code,
        F: Fn(O) -> Parser<'code, I, U> + Send + Sync + 'code,
    {
        let parser = self.clone();
        Parser::try_new(move |input| match parser.parse(input)? {
            ParseResult::Success { result, rest } => next(result).parse(rest),
            ParseResult::Fail(error) => Ok(ParseResult::Fail(error)),
        })
    }
}

/// Convenience function to create a sequenced parser
pub fn flat_map<'code, I, O, U, F>(
    parser: &Parser<'code, I, O>,
    next: F,
) -> Parser<'code, I, U>
where
    I: Input + 'code,
    O: 'code,
    U: 'code,
    F: Fn(O) -> Parser<'code, I, U> + Send + Sync + 'code,
{
    parser.flat_map(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use crate::text::{char, digit};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_flat_map_success() {
        let double_a = char('a').flat_map(char);
        assert_eq!(
            double_a.parse("aab").unwrap(),
            ParseResult::success('a', "b")
        );

        let double_a_then_b = double_a.flat_map(|_| char('b'));
        assert_eq!(
            double_a_then_b.parse("aab").unwrap(),
            ParseResult::success('b', "")
        );
    }

    #[test]
    fn test_flat_map_empty_input() {
        let double_a = char('a').flat_map(char);

        assert_eq!(
            double_a.parse("").unwrap(),
            ParseResult::fail(MatchError::end_of_input("'a'"))
        );
    }

    #[test]
    fn test_flat_map_second_fails() {
        let double_a = char('a').flat_map(char);

        assert_eq!(
            double_a.parse("ab").unwrap(),
            ParseResult::fail(MatchError::unexpected("'a'", 'b'))
        );
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);
        let parser = char('a').flat_map(move |_| {
            flag.store(true, Ordering::SeqCst);
            char('b')
        });

        assert!(parser.parse("xb").unwrap().is_failed());
        assert!(!called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_later_parser_depends_on_value() {
        // a digit n followed by exactly n 'x's
        let counted = digit().flat_map(|d| {
            let n = d.to_digit(10).unwrap_or_default() as usize;
            char('x').rep().filter(move |xs| {
                (xs.len() != n).then(|| crate::error::GenericError::new("wrong count"))
            })
        });

        assert_eq!(
            counted.parse("3xxx;").unwrap(),
            ParseResult::success(vec!['x', 'x', 'x'], ";")
        );
        assert!(counted.parse("3xx;").unwrap().is_failed());
    }

    #[test]
    fn test_function_syntax() {
        let parser = flat_map(&char('('), |_| char(')'));

        assert_eq!(parser.parse("()").unwrap(), ParseResult::success(')', ""));
    }
}

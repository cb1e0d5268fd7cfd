use crate::input::Input;
use crate::parser::Parser;

/// A parser that defers building the actual parser until parse time
///
/// Useful for recursive grammars, where a rule refers to itself and can't be
/// constructed eagerly without recursing forever.
pub fn lazy<'code, I, O, F>(factory: F) -> Parser<'code, I, O>
where
    I: Input + 'code,
    O: 'code,
    F: Fn() -> Parser<'code, I, O> + Send + Sync + 'code,
{
    Parser::try_new(move |input| factory().parse(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ParseResult;
    use crate::text::{char, digit};

    /// nested := '(' nested ')' | digit
    fn nested<'code>() -> Parser<'code, &'code str, char> {
        let parenthesized = char('(')
            .then(&lazy(nested))
            .skip(&char(')'));
        parenthesized.or(&digit())
    }

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| char('a'));

        assert_eq!(parser.parse("aaaa").unwrap(), ParseResult::success('a', "aaa"));
    }

    #[test]
    fn test_lazy_with_rep() {
        let parser = lazy(|| char('a').rep());

        assert_eq!(
            parser.parse("aaaa").unwrap(),
            ParseResult::success(vec!['a'; 4], "")
        );
    }

    #[test]
    fn test_recursive_grammar() {
        let parser = nested();

        assert_eq!(parser.parse("((7))").unwrap(), ParseResult::success('7', ""));
        assert_eq!(parser.parse("3").unwrap(), ParseResult::success('3', ""));
        assert!(parser.parse("((7)").unwrap().is_failed());
    }
}

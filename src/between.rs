use crate::input::Input;
use crate::parser::Parser;

/// Parser that matches `content` surrounded by `open` and `close`
///
/// Only the content's value is kept.
///
/// ```rust
/// use parsel::ParseResult;
/// use parsel::between::between;
/// use parsel::text::{char, letter};
///
/// let parser = between(&char('['), &letter(), &char(']'));
/// assert_eq!(parser.parse("[x]!").unwrap(), ParseResult::success('x', "!"));
/// ```
pub fn between<'code, I, A, O, B>(
    open: &Parser<'code, I, A>,
    content: &Parser<'code, I, O>,
    close: &Parser<'code, I, B>,
) -> Parser<'code, I, O>
where
    I: Input + 'code,
    A: 'code,
    O: Clone + Send + Sync + 'code,
    B: 'code,
{
    open.then(content).skip(close)
}

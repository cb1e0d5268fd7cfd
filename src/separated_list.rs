use crate::input::Input;
use crate::parser::Parser;

/// Parser that matches one or more `item`s separated by `separator`
///
/// Parses one item followed by zero or more (separator, item) pairs and
/// returns the items in order.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
///
/// # Note
/// - Requires at least one item
/// - A trailing separator is left unconsumed
pub fn separated_list<'code, I, O, S>(
    item: &Parser<'code, I, O>,
    separator: &Parser<'code, I, S>,
) -> Parser<'code, I, Vec<O>>
where
    I: Input + 'code,
    O: Clone + Send + Sync + 'code,
    S: 'code,
{
    let tail = separator.then(item).rep();
    item.and(&tail).map(|(head, tail)| {
        let mut items = Vec::with_capacity(tail.len() + 1);
        items.push(head);
        items.extend(tail);
        items
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ParseResult;
    use crate::text::{char, digit, letter, string};

    #[test]
    fn test_single_item() {
        let parser = separated_list(&letter(), &char(','));

        assert_eq!(parser.parse("a").unwrap(), ParseResult::success(vec!['a'], ""));
    }

    #[test]
    fn test_multiple_items() {
        let parser = separated_list(&letter(), &char(','));

        assert_eq!(
            parser.parse("a,b,c;").unwrap(),
            ParseResult::success(vec!['a', 'b', 'c'], ";")
        );
    }

    #[test]
    fn test_trailing_separator_left_over() {
        let parser = separated_list(&digit(), &char(','));

        assert_eq!(
            parser.parse("1,2,").unwrap(),
            ParseResult::success(vec!['1', '2'], ",")
        );
    }

    #[test]
    fn test_requires_one_item() {
        let parser = separated_list(&digit(), &char(','));

        assert!(parser.parse(",1").unwrap().is_failed());
        assert!(parser.parse("").unwrap().is_failed());
    }

    #[test]
    fn test_multi_char_separator() {
        let parser = separated_list(&digit(), &string(", "));

        assert_eq!(
            parser.parse("1, 2, 3").unwrap(),
            ParseResult::success(vec!['1', '2', '3'], "")
        );
    }
}

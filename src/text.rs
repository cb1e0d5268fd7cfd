//! Parsers over `&str` input

use crate::error::MatchError;
use crate::literal::{literal, satisfy};
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that matches a specific character
pub fn char<'code>(expected: char) -> Parser<'code, &'code str, char> {
    literal(expected)
}

/// Parser that consumes and returns any single character
pub fn any_char<'code>() -> Parser<'code, &'code str, char> {
    satisfy(|_| true, "any character")
}

/// Parser that matches an exact string
///
/// The output is the matched slice of the input.
pub fn string<'code>(expected: &'code str) -> Parser<'code, &'code str, &'code str> {
    let description = format!("{:?}", expected);
    Parser::new(move |input: &'code str| match input.strip_prefix(expected) {
        Some(rest) => ParseResult::success(&input[..expected.len()], rest),
        None => {
            let diverged = input
                .chars()
                .zip(expected.chars())
                .find(|(found, wanted)| found != wanted);
            let error = match diverged {
                Some((found, _)) => MatchError::unexpected(&*description, found),
                // input is a strict prefix of `expected`
                None => MatchError::end_of_input(&*description),
            };
            ParseResult::fail(error)
        }
    })
}

/// Parser that matches a Unicode numeric character
pub fn digit<'code>() -> Parser<'code, &'code str, char> {
    satisfy(|c: &char| c.is_numeric(), "digit")
}

/// Parser that matches a Unicode letter
pub fn letter<'code>() -> Parser<'code, &'code str, char> {
    satisfy(|c: &char| c.is_alphabetic(), "letter")
}

/// Parser that matches a Unicode whitespace character
pub fn whitespace<'code>() -> Parser<'code, &'code str, char> {
    satisfy(|c: &char| c.is_whitespace(), "whitespace")
}

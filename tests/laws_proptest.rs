//! Property-based tests for the combinator laws
//!
//! These check that parsing is deterministic and that map, flat_map, filter
//! and rep behave the same on arbitrary input, not just hand-picked cases.

use parsel::error::GenericError;
use parsel::text::{any_char, char, letter};
use parsel::{ParseResult, Parser};
use proptest::prelude::*;

fn small_input() -> impl Strategy<Value = String> {
    "[ab1 ]{0,12}"
}

proptest! {
    #[test]
    fn parse_is_deterministic(input in small_input()) {
        let parser = letter().rep().and(&any_char());

        let first = parser.parse(&input).unwrap();
        let second = parser.parse(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn just_never_consumes(value in any::<i64>(), input in small_input()) {
        let parser = Parser::<&str, i64>::just(value);

        prop_assert_eq!(
            parser.parse(&input).unwrap(),
            ParseResult::success(value, input.as_str())
        );
    }

    #[test]
    fn map_identity(input in small_input()) {
        let parser = char('a');
        let mapped = parser.map(|c| c);

        prop_assert_eq!(mapped.parse(&input).unwrap(), parser.parse(&input).unwrap());
    }

    #[test]
    fn map_composition(input in small_input()) {
        let f = |c: char| c as u32;
        let g = |n: u32| n * 2 + 1;
        let parser = any_char();

        let chained = parser.map(f).map(g);
        let composed = parser.map(move |c| g(f(c)));
        prop_assert_eq!(chained.parse(&input).unwrap(), composed.parse(&input).unwrap());
    }

    #[test]
    fn flat_map_with_just_is_identity(input in small_input()) {
        let parser = letter();
        let bound = parser.flat_map(Parser::just);

        prop_assert_eq!(bound.parse(&input).unwrap(), parser.parse(&input).unwrap());
    }

    #[test]
    fn filter_none_is_identity(input in small_input()) {
        let parser = any_char();
        let filtered = parser.filter(|_| None::<GenericError>);

        prop_assert_eq!(filtered.parse(&input).unwrap(), parser.parse(&input).unwrap());
    }

    #[test]
    fn filter_some_always_fails(input in small_input()) {
        let filtered = any_char().filter(|_| Some(GenericError::new("rejected")));

        let result = filtered.parse(&input).unwrap();
        prop_assert!(result.is_failed());
        if !input.is_empty() {
            prop_assert_eq!(result, ParseResult::fail(GenericError::new("rejected")));
        }
    }

    #[test]
    fn rep_counts_leading_matches(input in small_input()) {
        let expected = input.chars().take_while(|c| *c == 'a').count();

        let result = char('a').rep().parse(&input).unwrap();
        prop_assert_eq!(
            result,
            ParseResult::success(vec!['a'; expected], &input[expected..])
        );
    }

    #[test]
    fn rep_never_fails(input in small_input()) {
        prop_assert!(letter().rep().parse(&input).unwrap().is_success());
    }

    #[test]
    fn rest_is_suffix(input in small_input()) {
        let parser = letter().rep().and(&char(' ').rep());

        if let ParseResult::Success { rest, .. } = parser.parse(&input).unwrap() {
            prop_assert!(input.ends_with(rest));
        }
    }
}

//! # Parsel - Parser Combinator Engine
//!
//! Parsel builds recursive-descent parsers by composing small parsers into
//! larger ones. A [`Parser`] wraps a pure function from input to
//! [`ParseResult`]; combinators such as [`Parser::map`], [`Parser::flat_map`],
//! [`Parser::filter`] and [`Parser::rep`] wrap existing parsers into new ones
//! without touching the originals.
//!
//! - **Generic input**: anything implementing [`Input`], i.e. `&str` or a
//!   slice of tokens
//! - **Two error channels**: grammar mismatches are [`ParseResult::Fail`]
//!   values, while bugs in a grammar surface as [`Fault`]s
//! - **Shareable**: parsers are immutable, cheap to clone, `Send` and `Sync`
//!
//! ```rust
//! use parsel::ParseResult;
//! use parsel::text::{char, digit};
//!
//! let number = digit()
//!     .rep1()
//!     .map(|digits| digits.into_iter().collect::<String>());
//! let pair = number.skip(&char(',')).and(&number);
//!
//! assert_eq!(
//!     pair.parse("12,345;").unwrap(),
//!     ParseResult::success(("12".to_string(), "345".to_string()), ";")
//! );
//! ```

pub mod and;
pub mod between;
pub mod error;
pub mod filter;
pub mod flat_map;
pub mod input;
pub mod lazy;
pub mod literal;
pub mod map;
pub mod map_err;
pub mod or;
pub mod parser;
pub mod rep;
pub mod result;
pub mod separated_list;
pub mod text;

pub use between::between;
pub use error::{BoxedError, Fault, GenericError, MatchError, ParseError, ResultError};
pub use input::Input;
pub use lazy::lazy;
pub use literal::{any, end, literal, literal_sequence, literal_sequence_with, literal_with, satisfy};
pub use or::choice;
pub use parser::Parser;
pub use result::ParseResult;
pub use separated_list::separated_list;

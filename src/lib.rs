//! # strcomb - String Parser Combinators
//!
//! A small parser combinator toolkit over `&str` input, for writing
//! recursive-descent parsers of line-oriented text formats.
//!
//! Parsers are stateless values implementing [`Parser`]; plain functions
//! of the right shape are parsers too, which is how grammars name their
//! rules. The library emphasizes:
//!
//! - **No hidden state**: every parser is a pure function of its input and
//!   may be reused freely, even across threads
//! - **Non-consuming failure**: a failed parse always reports the input it
//!   was given as its remainder
//! - **Borrowed results**: remainders and matched text are slices of the
//!   caller's buffer, never copies
//!
//! Two thresholds differ from the usual conventions and are named for it:
//! [`many1`] requires at least [`MANY1_MIN`] (two) repetitions and
//! [`take_while1`] at least [`TAKE_WHILE1_MIN`] (two) characters.

pub mod alt;
pub mod ascii;
pub mod constant;
pub mod error;
pub mod lazy;
pub mod many;
pub mod map;
pub mod parser;
pub mod pattern;
pub mod result;
pub mod tag;
pub mod take_until;
pub mod take_while;
pub mod tuple;

pub use alt::{AltExt, alt};
pub use ascii::{newline, unumber};
pub use constant::constant;
pub use error::{ParseError, PatternError, ReadablePosition, Report};
pub use lazy::lazy;
pub use many::{MANY1_MIN, many_at_least, many0, many1};
pub use map::{MapExt, map};
pub use parser::Parser;
pub use pattern::regex;
pub use result::{ParseResult, ParseResultExt, is_success};
pub use tag::tag;
pub use take_until::take_until;
pub use take_while::{TAKE_WHILE1_MIN, take_while, take_while_min, take_while1};
pub use tuple::tuple;

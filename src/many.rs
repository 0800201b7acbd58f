use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Minimum number of repetitions required by [`many1`]: at least two.
pub const MANY1_MIN: usize = 2;

/// Parser combinator that applies a parser repeatedly and requires at least
/// `min` successful repetitions
///
/// Repetition stops when the input is exhausted, when the parser fails, or
/// when it succeeds without consuming anything (that last value is dropped,
/// otherwise the loop would never end). A failure consumes nothing.
pub struct Many<P> {
    parser: P,
    min: usize,
}

impl<P> Many<P> {
    pub fn new(parser: P, min: usize) -> Self {
        Many { parser, min }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut cursor = input;

        while !cursor.is_empty() {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    if next_cursor.len() == cursor.len() {
                        break;
                    }
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(_) => break,
            }
        }

        if results.len() < self.min {
            return Err(ParseError::new(
                format!(
                    "expected at least {} repetitions, found {}",
                    self.min,
                    results.len()
                ),
                input,
            ));
        }

        Ok((results, cursor))
    }
}

/// Zero or more repetitions. Never fails.
pub fn many0<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, 0)
}

/// Repetitions of `parser`, failing unless it matches at least
/// [`MANY1_MIN`] (two) times in a row.
///
/// A single match is *not* enough. Use [`many_at_least`]`(1, ..)` for
/// one-or-more.
pub fn many1<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, MANY1_MIN)
}

/// Repetitions of `parser`, failing unless it matches at least `min` times
pub fn many_at_least<'code, P>(min: usize, parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, min)
}

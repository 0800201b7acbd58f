use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Minimum run length required by [`take_while1`]: at least two characters.
pub const TAKE_WHILE1_MIN: usize = 2;

/// Parser that consumes the longest prefix whose characters all satisfy a
/// predicate, and requires that prefix to be at least `min` characters long
pub struct TakeWhileParser<F> {
    predicate: F,
    min: usize,
}

impl<F> TakeWhileParser<F> {
    pub fn new(predicate: F, min: usize) -> Self {
        Self { predicate, min }
    }
}

impl<'code, F> Parser<'code> for TakeWhileParser<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut end = input.len();
        let mut count = 0;

        for (offset, c) in input.char_indices() {
            if !(self.predicate)(c) {
                end = offset;
                break;
            }
            count += 1;
        }

        if count < self.min {
            return Err(ParseError::new(
                format!(
                    "expected at least {} matching characters, found {}",
                    self.min, count
                ),
                input,
            ));
        }

        Ok(input.split_at(end))
    }
}

/// Consume the (possibly empty) run of characters satisfying `predicate`.
/// Never fails.
pub fn take_while<F>(predicate: F) -> TakeWhileParser<F>
where
    F: Fn(char) -> bool,
{
    TakeWhileParser::new(predicate, 0)
}

/// Consume the run of characters satisfying `predicate`, failing unless the
/// run is at least [`TAKE_WHILE1_MIN`] (two) characters long.
///
/// A single matching character is *not* enough. Use
/// [`take_while_min`]`(1, ..)` for a plain non-empty run.
pub fn take_while1<F>(predicate: F) -> TakeWhileParser<F>
where
    F: Fn(char) -> bool,
{
    TakeWhileParser::new(predicate, TAKE_WHILE1_MIN)
}

/// Consume the run of characters satisfying `predicate`, failing unless it
/// is at least `min` characters long. Failure consumes nothing.
pub fn take_while_min<F>(min: usize, predicate: F) -> TakeWhileParser<F>
where
    F: Fn(char) -> bool,
{
    TakeWhileParser::new(predicate, min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_newline(c: char) -> bool {
        c != '\n'
    }

    #[test]
    fn test_take_while_stops_at_predicate() {
        let (value, rest) = take_while(not_newline).parse("0\nepd").unwrap();
        assert_eq!(value, "0");
        assert_eq!(rest, "\nepd");
    }

    #[test]
    fn test_take_while_empty_run_succeeds() {
        let (value, rest) = take_while(not_newline).parse("\nabc").unwrap();
        assert_eq!(value, "");
        assert_eq!(rest, "\nabc");
    }

    #[test]
    fn test_take_while_whole_input() {
        let (value, rest) = take_while(|c: char| c.is_alphabetic()).parse("abc").unwrap();
        assert_eq!(value, "abc");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_take_while_empty_input() {
        let (value, rest) = take_while(not_newline).parse("").unwrap();
        assert_eq!(value, "");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_take_while_unicode() {
        let (value, rest) = take_while(|c| c != '🦀').parse("température🦀world").unwrap();
        assert_eq!(value, "température");
        assert_eq!(rest, "🦀world");
    }

    #[test]
    fn test_take_while1_two_chars_succeeds() {
        let (value, rest) = take_while1(|c: char| c.is_ascii_digit()).parse("21 x").unwrap();
        assert_eq!(value, "21");
        assert_eq!(rest, " x");
    }

    #[test]
    fn test_take_while1_single_char_fails() {
        // One matching character is below the two-character minimum
        let err = take_while1(|c: char| c.is_ascii_digit()).parse("7 x").unwrap_err();
        assert_eq!(err.message(), "expected at least 2 matching characters, found 1");
        assert_eq!(err.rest(), "7 x");
    }

    #[test]
    fn test_take_while1_no_match_fails() {
        let err = take_while1(not_newline).parse("\n").unwrap_err();
        assert_eq!(err.rest(), "\n");
    }

    #[test]
    fn test_take_while1_counts_chars_not_bytes() {
        // 'é' is two bytes but one character
        assert!(take_while1(|c: char| c.is_alphabetic()).parse("é1").is_err());
        assert!(take_while1(|c: char| c.is_alphabetic()).parse("éa1").is_ok());
    }

    #[test]
    fn test_take_while_min_one() {
        let (value, rest) = take_while_min(1, |c: char| c.is_ascii_digit()).parse("7 x").unwrap();
        assert_eq!(value, "7");
        assert_eq!(rest, " x");
    }
}

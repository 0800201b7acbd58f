use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is a stateless, reusable value: `parse` takes `&self`, so the
/// same parser may run any number of times, recursively or from several
/// threads at once. On failure no input is consumed.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse a prefix of `input`
    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output>;
}

/// Plain functions and closures are parsers, which is how grammars refer to
/// rules defined later in the same file (or to themselves).
impl<'code, F, T> Parser<'code> for F
where
    F: Fn(&'code str) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    fn digit(input: &str) -> ParseResult<'_, char> {
        match input.chars().next() {
            Some(c) if c.is_ascii_digit() => Ok((c, &input[1..])),
            _ => Err(ParseError::new("no digit", input)),
        }
    }

    #[test]
    fn test_fn_item_is_parser() {
        let (value, rest) = digit.parse("7up").unwrap();
        assert_eq!(value, '7');
        assert_eq!(rest, "up");
    }

    #[test]
    fn test_closure_is_parser() {
        let parser = |input: &'static str| digit(input).map(|(c, rest)| (c.to_digit(10), rest));
        let (value, rest) = parser.parse("42").unwrap();
        assert_eq!(value, Some(4));
        assert_eq!(rest, "2");
    }

    #[test]
    fn test_parser_is_reusable() {
        assert!(digit.parse("1").is_ok());
        assert!(digit.parse("x").is_err());
        assert!(digit.parse("2").is_ok());
    }
}

use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that matches an exact literal at the start of the input
pub struct TagParser {
    expected: Cow<'static, str>,
}

impl TagParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for TagParser {
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match input.strip_prefix(&*self.expected) {
            Some(rest) => Ok((&input[..self.expected.len()], rest)),
            None => Err(ParseError::new(
                format!("expected '{}'", self.expected),
                input,
            )),
        }
    }
}

/// Convenience function to create a TagParser
pub fn tag(expected: impl Into<Cow<'static, str>>) -> TagParser {
    TagParser::new(expected)
}

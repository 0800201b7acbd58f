use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that consumes input up to, but not including, the first occurrence
/// of a marker string
///
/// This parser never fails. When the marker does not occur the whole input
/// is consumed; an empty marker matches immediately and consumes nothing.
pub struct TakeUntilParser {
    marker: Cow<'static, str>,
}

impl TakeUntilParser {
    pub fn new(marker: impl Into<Cow<'static, str>>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl<'code> Parser<'code> for TakeUntilParser {
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let end = input.find(&*self.marker).unwrap_or(input.len());
        Ok(input.split_at(end))
    }
}

/// Convenience function to create a TakeUntilParser
pub fn take_until(marker: impl Into<Cow<'static, str>>) -> TakeUntilParser {
    TakeUntilParser::new(marker)
}

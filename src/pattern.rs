use crate::error::{ParseError, PatternError};
use crate::parser::Parser;
use crate::result::ParseResult;
use regex::Regex;

/// Parser that matches a regular expression anchored at the start of the input
///
/// Matching follows the `regex` crate's leftmost-first semantics. The
/// pattern is always compiled with a leading `^`, so a failed attempt stops
/// at offset 0 instead of searching the rest of the input.
#[derive(Debug, Clone)]
pub struct RegexParser {
    regex: Regex,
}

impl RegexParser {
    /// Compile `pattern` anchored to the start of the input
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(Self { regex })
    }

    /// The anchored pattern this parser matches with
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Re-anchors a pre-built expression by recompiling its pattern text.
/// Options set through `RegexBuilder` are not carried over; use inline
/// flags such as `(?i)` instead.
impl TryFrom<Regex> for RegexParser {
    type Error = PatternError;

    fn try_from(regex: Regex) -> Result<Self, Self::Error> {
        Self::new(regex.as_str())
    }
}

impl<'code> Parser<'code> for RegexParser {
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self.regex.find(input) {
            Some(m) => Ok((m.as_str(), &input[m.end()..])),
            None => Err(ParseError::new(
                format!("failed to match regex '{}'", self.as_str()),
                input,
            )),
        }
    }
}

/// Convenience function to create a RegexParser from a pattern string
pub fn regex(pattern: &str) -> Result<RegexParser, PatternError> {
    RegexParser::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alt::alt;
    use crate::many::many0;
    use crate::tag::tag;

    #[test]
    fn test_regex_match_at_start() {
        let parser = regex(r"[a-z]+").unwrap();
        let (value, rest) = parser.parse("epd bqnb").unwrap();
        assert_eq!(value, "epd");
        assert_eq!(rest, " bqnb");
    }

    #[test]
    fn test_regex_is_anchored() {
        let parser = regex(r"[0-9]+").unwrap();
        let err = parser.parse("perft 12").unwrap_err();
        assert_eq!(err.rest(), "perft 12");
        assert!(err.message().starts_with("failed to match regex"));
    }

    #[test]
    fn test_regex_alternation_is_grouped() {
        // Without the group, `^a|b` would match a `b` anywhere
        let parser = regex("a|b").unwrap();
        assert!(parser.parse("xb").is_err());
        assert_eq!(parser.parse("ba").unwrap(), ("b", "a"));
    }

    #[test]
    fn test_prebuilt_regex_only_accepts_match_at_start() {
        let parser = RegexParser::try_from(Regex::new(r"\d+").unwrap()).unwrap();
        assert!(parser.parse("id 0").is_err());
        assert_eq!(parser.parse("21 rest").unwrap(), ("21", " rest"));
    }

    #[test]
    fn test_prebuilt_regex_is_reanchored() {
        // Anchoring stops a failed attempt at offset 0 rather than scanning on
        let parser = RegexParser::try_from(Regex::new(r"\d+").unwrap()).unwrap();
        assert_eq!(parser.as_str(), r"^(?:\d+)");

        let err = parser.parse("xxxxxxxx1").unwrap_err();
        assert_eq!(err.message(), r"failed to match regex '^(?:\d+)'");
        assert_eq!(err.rest(), "xxxxxxxx1");
    }

    #[test]
    fn test_prebuilt_regex_in_repetition_over_long_input() {
        let digits = RegexParser::try_from(Regex::new(r"\d+").unwrap()).unwrap();
        let input = "x".repeat(40_000);
        let parser = many0(alt(digits, tag("x")));

        let (values, rest) = parser.parse(&input).unwrap();
        assert_eq!(values.len(), 40_000);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_prebuilt_regex_keeps_inline_flags() {
        let parser = RegexParser::try_from(Regex::new("(?i)epd").unwrap()).unwrap();
        assert_eq!(parser.parse("EPD x").unwrap(), ("EPD", " x"));
    }

    #[test]
    fn test_regex_empty_match() {
        let parser = regex(r"x*").unwrap();
        let (value, rest) = parser.parse("abc").unwrap();
        assert_eq!(value, "");
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(regex("(unclosed"), Err(PatternError::Invalid(_))));
    }
}

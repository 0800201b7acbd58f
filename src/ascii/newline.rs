use crate::error::ParseError;
use crate::result::ParseResult;

/// Parser that matches a single `'\n'`.
///
/// Carriage returns are not special: on `"\r\n"` input this fails, since the
/// first character is `'\r'`.
pub fn newline(input: &str) -> ParseResult<'_, &str> {
    match input.strip_prefix('\n') {
        Some(rest) => Ok((&input[..1], rest)),
        None => Err(ParseError::new("no newline", input)),
    }
}

use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::take_while::take_while_min;

/// Parser that matches one or more ASCII digits and returns them as a u64
pub fn unumber(input: &str) -> ParseResult<'_, u64> {
    let (digits, rest) = take_while_min(1, |c: char| c.is_ascii_digit())
        .parse(input)
        .map_err(|_| ParseError::new("no unsigned number", input))?;

    match digits.parse::<u64>() {
        Ok(value) => Ok((value, rest)),
        Err(_) => Err(ParseError::new(
            format!("number too large: {}", digits),
            input,
        )),
    }
}

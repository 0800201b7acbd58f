use crate::error::ParseError;

/// Outcome of running a parser.
///
/// `Ok((value, rest))` is a success, `Err(error)` a failure. Both variants
/// carry the remainder: for a failure it lives in [`ParseError::rest`] and
/// is the input the failing parser was given.
pub type ParseResult<'code, T> = Result<(T, &'code str), ParseError<'code>>;

/// Returns true if `result` is a success
pub fn is_success<T>(result: &ParseResult<'_, T>) -> bool {
    result.is_ok()
}

/// Accessors shared by both variants of a [`ParseResult`]
pub trait ParseResultExt<'code> {
    fn is_success(&self) -> bool;

    /// The unconsumed input, whichever way the parse went
    fn rest(&self) -> &'code str;
}

impl<'code, T> ParseResultExt<'code> for ParseResult<'code, T> {
    fn is_success(&self) -> bool {
        is_success(self)
    }

    fn rest(&self) -> &'code str {
        match self {
            Ok((_, rest)) => rest,
            Err(error) => error.rest(),
        }
    }
}

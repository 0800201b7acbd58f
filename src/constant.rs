use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that always succeeds without consuming input and returns a fixed value
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    pub fn new(value: T) -> Self {
        Constant { value }
    }
}

impl<'code, T> Parser<'code> for Constant<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        Ok((self.value.clone(), input))
    }
}

/// Convenience function to create a constant parser
pub fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant::new(value)
}

use crate::parser::Parser;
use crate::result::ParseResult;
use std::marker::PhantomData;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    factory: F,
    _phantom: PhantomData<&'code ()>,
}

impl<'code, F, P> Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _phantom: PhantomData,
        }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(input)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

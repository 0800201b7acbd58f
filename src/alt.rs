use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser on the same input
///
/// The choice is ordered: whichever alternative succeeds first wins, no
/// matter how much either would consume. Both alternatives must produce the
/// same output type; map differently-typed alternatives into a shared enum.
/// When both fail the diagnostic is a generic `no alt match`.
pub struct Alt<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Alt<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Alt { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Alt<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parser1
            .parse(input)
            .or_else(|_| self.parser2.parse(input))
            .map_err(|_| ParseError::new("no alt match", input))
    }
}

/// Extension trait to add .alt() method support for parsers
pub trait AltExt<'code>: Parser<'code> + Sized {
    fn alt<P>(self, other: P) -> Alt<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Alt::new(self, other)
    }
}

/// Implement AltExt for all parsers
impl<'code, P> AltExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Alt parser
pub fn alt<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Alt<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Alt::new(parser1, parser2)
}

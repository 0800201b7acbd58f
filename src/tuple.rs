use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that runs a fixed sequence of parsers, each starting
/// where the previous one stopped, and returns all their values as a tuple
///
/// Implemented for tuples of 1 to 8 parsers, which keeps the output flat
/// instead of the `((a, b), c)` nesting that pairwise sequencing produces.
///
/// On the first failing element the whole sequence fails with a generic
/// `not a tuple` diagnostic and the remainder is the input given to the
/// sequence: partial progress is rolled back, and the element's own
/// diagnostic is not kept.
///
/// Example:
/// ```
/// use strcomb::parser::Parser;
/// use strcomb::tag::tag;
/// use strcomb::take_while::take_while;
/// use strcomb::tuple::tuple;
///
/// let parser = tuple((tag("id "), take_while(|c| c != '\n')));
/// let ((id_tag, id), rest) = parser.parse("id 0\nepd").unwrap();
/// assert_eq!(id_tag, "id ");
/// assert_eq!(id, "0");
/// assert_eq!(rest, "\nepd");
/// ```
pub struct Tuple<T> {
    parsers: T,
}

impl<T> Tuple<T> {
    pub fn new(parsers: T) -> Self {
        Tuple { parsers }
    }
}

macro_rules! impl_tuple {
    ($($parser_ty:ident $parser:ident $value:ident),+) => {
        impl<'code, $($parser_ty),+> Parser<'code> for Tuple<($($parser_ty,)+)>
        where
            $($parser_ty: Parser<'code>,)+
        {
            type Output = ($(<$parser_ty as Parser<'code>>::Output,)+);

            fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
                let ($($parser,)+) = &self.parsers;
                let cursor = input;
                $(
                    let ($value, cursor) = $parser
                        .parse(cursor)
                        .map_err(|_| ParseError::new("not a tuple", input))?;
                )+
                Ok((($($value,)+), cursor))
            }
        }
    };
}

impl_tuple!(P1 p1 v1);
impl_tuple!(P1 p1 v1, P2 p2 v2);
impl_tuple!(P1 p1 v1, P2 p2 v2, P3 p3 v3);
impl_tuple!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4);
impl_tuple!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5);
impl_tuple!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6);
impl_tuple!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7);
impl_tuple!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8);

/// Convenience function to create a Tuple parser from a tuple of parsers
pub fn tuple<T>(parsers: T) -> Tuple<T> {
    Tuple::new(parsers)
}

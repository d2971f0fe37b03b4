use std::borrow::Cow;

use nom::combinator::all_consuming;
use nom::error::ErrorKind;
use nom::IResult;

use crate::error::{Grammar, SyntaxError};

// Change this to something else that implements ParseError to get a
// different error type out of nom.
pub type NomError<I> = (I, ErrorKind);

/// Result of a grammar production on a byte slice.
///
/// On success the first element is the unconsumed remainder of the input.
pub type NomResult<'a, O, E=NomError<&'a [u8]>> = IResult<&'a [u8], O, E>;

/// Take a single byte matching `pred`.
pub(crate) fn take1_filter<F>(pred: F) -> impl Fn(&[u8]) -> NomResult<'_, u8>
    where F: Fn(u8) -> bool
{
    move |input| {
        match input.first() {
            Some(&c) if pred(c) => Ok((&input[1..], c)),
            Some(_) => Err(nom::Err::Error((input, ErrorKind::Satisfy))),
            None => Err(nom::Err::Error((input, ErrorKind::Eof))),
        }
    }
}

pub fn ascii_to_string<T: AsRef<[u8]> + ?Sized>(i: &T) -> Cow<'_, str> {
    String::from_utf8_lossy(i.as_ref())
}

/// Ordered choice between a current production and the obsolete
/// production that extends it.
///
/// `modern` is tried first. Its result stands unless `extends` matches
/// right after it and `obsolete` then consumes strictly more input. When
/// `modern` fails, `obsolete` is tried on the same input.
pub(crate) fn modern_or_obsolete<'a, O, XO, M, X, B>(mut modern: M, mut extends: X, mut obsolete: B)
    -> impl FnMut(&'a [u8]) -> NomResult<'a, O>
    where M: FnMut(&'a [u8]) -> NomResult<'a, O>,
          X: FnMut(&'a [u8]) -> NomResult<'a, XO>,
          B: FnMut(&'a [u8]) -> NomResult<'a, O>,
{
    move |input: &'a [u8]| {
        match modern(input) {
            Ok((rem, out)) => {
                if extends(rem).is_ok() {
                    if let Ok((obs_rem, obs_out)) = obsolete(input) {
                        if obs_rem.len() < rem.len() {
                            return Ok((obs_rem, obs_out));
                        }
                    }
                }
                Ok((rem, out))
            }
            Err(nom::Err::Error(_)) => obsolete(input),
            Err(e) => Err(e),
        }
    }
}

/// Run `parser` on `input` starting at byte offset `start`.
///
/// Returns the parsed value and the offset just past the consumed
/// input. A failed attempt reports the offset it started at.
pub fn parse_at<'a, O, F>(grammar: Grammar, mut parser: F, input: &'a [u8], start: usize)
                          -> Result<(O, usize), SyntaxError>
    where F: FnMut(&'a [u8]) -> NomResult<'a, O>
{
    let attempt = input.get(start..).ok_or(())
        .and_then(|i| parser(i).map_err(|_| ()));

    match attempt {
        Ok((rem, out)) => {
            let end = input.len() - rem.len();
            log::trace!("{} matched bytes {}..{}", grammar, start, end);
            Ok((out, end))
        }
        Err(()) => {
            log::debug!("{} did not match at position {}", grammar, start);
            Err(SyntaxError::new(grammar, input, start))
        }
    }
}

/// Run `parser` requiring that it consumes all of `input`.
pub(crate) fn parse_exact<'a, O, F>(grammar: Grammar, parser: F, input: &'a [u8]) -> Result<O, SyntaxError>
    where F: FnMut(&'a [u8]) -> NomResult<'a, O>
{
    parse_at(grammar, all_consuming(parser), input, 0).map(|(out, _)| out)
}

macro_rules! imf_fromstr {
    ( $type:ty, $func:path, $grammar:expr ) => {
        impl std::str::FromStr for $type {
            type Err = crate::error::SyntaxError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                crate::util::parse_exact($grammar, $func, s.as_bytes())
            }
        }
        impl <'a> std::convert::TryFrom<&'a [u8]> for $type {
            type Error = crate::error::SyntaxError;

            fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
                crate::util::parse_exact($grammar, $func, value)
            }
        }
    }
}

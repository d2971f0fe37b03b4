//! Core rules from [RFC 5234] appendix B.1.
//!
//! Each parser recognizes exactly one byte (two for CRLF) by its numeric
//! value. Classes are ASCII only.
//!
//! [RFC 5234]: https://tools.ietf.org/html/rfc5234#appendix-B.1

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::map;

use crate::util::*;

pub fn is_alpha(c: u8) -> bool {
    (0x41..=0x5a).contains(&c) || (0x61..=0x7a).contains(&c)
}

pub fn is_digit(c: u8) -> bool {
    (0x30..=0x39).contains(&c)
}

pub fn is_hexdig(c: u8) -> bool {
    is_digit(c) || (b'A'..=b'F').contains(&c) || (b'a'..=b'f').contains(&c)
}

pub fn is_ctl(c: u8) -> bool {
    c <= 0x1f || c == 0x7f
}

pub fn is_vchar(c: u8) -> bool {
    (0x21..=0x7e).contains(&c)
}

pub fn is_wsp(c: u8) -> bool {
    c == 0x20 || c == 0x09
}

pub fn alpha(input: &[u8]) -> NomResult<'_, u8> {
    take1_filter(is_alpha)(input)
}

/// DIGIT, yielding its weight 0-9.
pub fn digit(input: &[u8]) -> NomResult<'_, u8> {
    map(take1_filter(is_digit), |c| c - b'0')(input)
}

/// HEXDIG, yielding its weight 0-15.
///
/// ABNF literals are case insensitive so lowercase a-f is accepted.
pub fn hexdig(input: &[u8]) -> NomResult<'_, u8> {
    map(take1_filter(is_hexdig), |c| match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        _ => c - b'a' + 10,
    })(input)
}

pub fn ctl(input: &[u8]) -> NomResult<'_, u8> {
    take1_filter(is_ctl)(input)
}

pub fn vchar(input: &[u8]) -> NomResult<'_, u8> {
    take1_filter(|c| (0x21..=0x7e).contains(&c))(input)
}

pub fn sp(input: &[u8]) -> NomResult<'_, u8> {
    take1_filter(|c| c == 0x20)(input)
}

pub fn htab(input: &[u8]) -> NomResult<'_, u8> {
    take1_filter(|c| c == 0x09)(input)
}

pub fn wsp(input: &[u8]) -> NomResult<'_, u8> {
    alt((sp, htab))(input)
}

pub fn cr(input: &[u8]) -> NomResult<'_, u8> {
    take1_filter(|c| c == 0x0d)(input)
}

pub fn lf(input: &[u8]) -> NomResult<'_, u8> {
    take1_filter(|c| c == 0x0a)(input)
}

pub fn crlf(input: &[u8]) -> NomResult<'_, &[u8]> {
    tag("\r\n")(input)
}

pub fn dquote(input: &[u8]) -> NomResult<'_, u8> {
    take1_filter(|c| c == 0x22)(input)
}

//! Date and time specification, RFC 5322 section 3.3 and obsolete date
//! and time from section 4.3.

use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::combinator::{map, opt, peek, value};
use nom::multi::{fold_many_m_n, many0};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};

use super::*;
use crate::error::{Grammar, SyntaxError};
use crate::types::{DateTime, ObsoleteZone, Zone};

fn number<'a>(min: usize, max: usize) -> impl FnMut(&'a [u8]) -> NomResult<'a, u32> {
    fold_many_m_n(min, max, digit, 0u32, |acc, d| acc * 10 + u32::from(d))
}

// Like `number`, also counting the digits.
fn counted_number<'a>(min: usize, max: usize) -> impl FnMut(&'a [u8]) -> NomResult<'a, (u32, u8)> {
    fold_many_m_n(min, max, digit, (0u32, 0u8), |(acc, n), d| (acc * 10 + u32::from(d), n + 1))
}

fn two_digits(input: &[u8]) -> NomResult<'_, u8> {
    map(number(2, 2), |n| n as u8)(input)
}

fn one_or_two_digits(input: &[u8]) -> NomResult<'_, u8> {
    map(number(1, 2), |n| n as u8)(input)
}

fn sign(input: &[u8]) -> NomResult<'_, i16> {
    alt((value(1, tag("+")), value(-1, tag("-"))))(input)
}

// Trailing CFWS of an obsolete time field. White space directly before a
// numeric zone is left for the zone.
fn time_cfws(input: &[u8]) -> NomResult<'_, ()> {
    alt((
        value((), terminated(many0(pair(opt(fws), comment)), peek(pair(fws, sign)))),
        cfws,
    ))(input)
}

fn day_name(input: &[u8]) -> NomResult<'_, u8> {
    alt((
        value(1, tag_no_case("Mon")),
        value(2, tag_no_case("Tue")),
        value(3, tag_no_case("Wed")),
        value(4, tag_no_case("Thu")),
        value(5, tag_no_case("Fri")),
        value(6, tag_no_case("Sat")),
        value(7, tag_no_case("Sun")),
    ))(input)
}

/// Day of the week, 1 for Monday through 7 for Sunday.
pub fn day_of_week(input: &[u8]) -> NomResult<'_, u8> {
    modern_or_obsolete(
        preceded(opt(fws), day_name),
        alt((comment_follows, value((), pair(fws, tag(","))))),
        delimited(opt(cfws), day_name, opt(cfws)),
    )(input)
}

pub fn day(input: &[u8]) -> NomResult<'_, u8> {
    modern_or_obsolete(
        delimited(opt(fws), one_or_two_digits, fws),
        comment_follows,
        delimited(opt(cfws), one_or_two_digits, opt(cfws)),
    )(input)
}

fn month_name(input: &[u8]) -> NomResult<'_, u8> {
    alt((
        value(1, tag_no_case("Jan")),
        value(2, tag_no_case("Feb")),
        value(3, tag_no_case("Mar")),
        value(4, tag_no_case("Apr")),
        value(5, tag_no_case("May")),
        value(6, tag_no_case("Jun")),
        value(7, tag_no_case("Jul")),
        value(8, tag_no_case("Aug")),
        value(9, tag_no_case("Sep")),
        value(10, tag_no_case("Oct")),
        value(11, tag_no_case("Nov")),
        value(12, tag_no_case("Dec")),
    ))(input)
}

/// Month, 1 for January through 12 for December.
pub fn month(input: &[u8]) -> NomResult<'_, u8> {
    modern_or_obsolete(
        month_name,
        comment_follows,
        delimited(opt(cfws), month_name, opt(cfws)),
    )(input)
}

/// Year as written and the number of digits it was written with.
///
/// See [`DateTime::full_year`] for two and three digit years.
pub fn year(input: &[u8]) -> NomResult<'_, (u32, u8)> {
    modern_or_obsolete(
        delimited(fws, counted_number(4, 9), fws),
        comment_follows,
        delimited(opt(cfws), counted_number(2, 9), opt(cfws)),
    )(input)
}

fn colon_follows(input: &[u8]) -> NomResult<'_, ()> {
    alt((value((), preceded(opt(cfws), tag(":"))), comment_follows))(input)
}

pub fn hour(input: &[u8]) -> NomResult<'_, u8> {
    modern_or_obsolete(
        two_digits,
        colon_follows,
        delimited(opt(cfws), one_or_two_digits, opt(cfws)),
    )(input)
}

pub fn minute(input: &[u8]) -> NomResult<'_, u8> {
    modern_or_obsolete(
        two_digits,
        colon_follows,
        delimited(opt(cfws), one_or_two_digits, opt(time_cfws)),
    )(input)
}

pub fn second(input: &[u8]) -> NomResult<'_, u8> {
    modern_or_obsolete(
        two_digits,
        comment_follows,
        delimited(opt(cfws), one_or_two_digits, opt(time_cfws)),
    )(input)
}

/// `hour ":" minute [":" second]`, seconds default to 0.
pub fn time_of_day(input: &[u8]) -> NomResult<'_, (u8, u8, u8)> {
    map(tuple((hour, tag(":"), minute, opt(preceded(tag(":"), second)))),
        |(h, _, m, s)| (h, m, s.unwrap_or(0)))(input)
}

fn numeric_zone(input: &[u8]) -> NomResult<'_, i16> {
    map(tuple((fws, sign, number(4, 4))), |(_, s, n)| s * n as i16)(input)
}

fn military_zone(input: &[u8]) -> NomResult<'_, ObsoleteZone> {
    map(take1_filter(|c| is_alpha(c) && c != b'J' && c != b'j'),
        |c| ObsoleteZone::Military(char::from(c)))(input)
}

fn obs_zone(input: &[u8]) -> NomResult<'_, ObsoleteZone> {
    alt((
        value(ObsoleteZone::UT, tag_no_case("UT")),
        value(ObsoleteZone::GMT, tag_no_case("GMT")),
        value(ObsoleteZone::EST, tag_no_case("EST")),
        value(ObsoleteZone::EDT, tag_no_case("EDT")),
        value(ObsoleteZone::CST, tag_no_case("CST")),
        value(ObsoleteZone::CDT, tag_no_case("CDT")),
        value(ObsoleteZone::MST, tag_no_case("MST")),
        value(ObsoleteZone::MDT, tag_no_case("MDT")),
        value(ObsoleteZone::PST, tag_no_case("PST")),
        value(ObsoleteZone::PDT, tag_no_case("PDT")),
        military_zone,
    ))(input)
}

pub fn zone(input: &[u8]) -> NomResult<'_, Zone> {
    alt((
        map(numeric_zone, Zone::Offset),
        map(preceded(opt(cfws), obs_zone), Zone::Obsolete),
    ))(input)
}

/// A complete `date-time`.
pub fn date_time(input: &[u8]) -> NomResult<'_, DateTime> {
    map(tuple((
        opt(terminated(day_of_week, tag(","))),
        day,
        month,
        year,
        time_of_day,
        zone,
        opt(cfws),
    )), |(day_of_week, day, month, (year, year_digits), (hour, minute, second), zone, _)| DateTime {
        day_of_week,
        year,
        year_digits,
        month,
        day,
        hour,
        minute,
        second,
        zone,
    })(input)
}

/// Parse a date-time starting at byte offset `start`.
///
/// # Examples
/// ```
/// use imf_grammar::rfc5322::parse_date_time;
/// use imf_grammar::Zone;
///
/// let (dt, end) = parse_date_time(b"Fri, 21 Nov 1997 09:55:06 -0600", 0).unwrap();
///
/// assert_eq!((dt.year, dt.month, dt.day), (1997, 11, 21));
/// assert_eq!(dt.day_of_week, Some(5));
/// assert_eq!(dt.zone, Zone::Offset(-600));
/// assert_eq!(end, 31);
/// ```
pub fn parse_date_time(input: &[u8], start: usize) -> Result<(DateTime, usize), SyntaxError> {
    parse_at(Grammar::DateTime, date_time, input, start)
}

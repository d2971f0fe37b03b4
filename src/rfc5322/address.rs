//! Address specification, RFC 5322 section 3.4 and obsolete addressing
//! from section 4.4.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{map, opt, value};
use nom::multi::{many0, many1, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};

use super::*;
use crate::error::{Grammar, SyntaxError};
use crate::types::{Address, Group, Mailbox};

fn current(s: String) -> (Syntax, String) {
    (Syntax::Current, s)
}

fn obsolete(s: String) -> (Syntax, String) {
    (Syntax::Obsolete, s)
}

fn obs_local_part(input: &[u8]) -> NomResult<'_, String> {
    map(pair(word, many0(preceded(tag("."), word))), |(first, rest)| {
        let mut parts = vec![first.text()];
        parts.extend(rest.iter().map(Word::text));
        parts.join(".")
    })(input)
}

/// The part of an address before the `@`.
pub fn local_part(input: &[u8]) -> NomResult<'_, (Syntax, String)> {
    modern_or_obsolete(
        alt((map(dot_atom, current), map(quoted_string, current))),
        tag("."),
        map(obs_local_part, obsolete),
    )(input)
}

fn dtext(input: &[u8]) -> NomResult<'_, u8> {
    alt((take1_filter(is_dtext), take1_filter(is_obs_no_ws_ctl), quoted_pair))(input)
}

/// A bracketed domain literal, yielding the text between the brackets.
pub fn domain_literal(input: &[u8]) -> NomResult<'_, String> {
    map(tuple((
        opt(cfws),
        tag("["),
        many0(pair(ofws, dtext)),
        ofws,
        tag("]"),
        opt(cfws),
    )), |(_, _, content, tail, _, _)| {
        let mut out: Vec<u8> = Vec::with_capacity(content.len() + tail.len());
        for (ws, c) in content {
            out.extend(ws);
            out.push(c);
        }
        out.extend(tail);
        ascii_to_string(&out).into_owned()
    })(input)
}

fn obs_domain(input: &[u8]) -> NomResult<'_, String> {
    map(pair(atom, many0(preceded(tag("."), atom))), |(first, mut rest)| {
        rest.insert(0, first);
        rest.join(".")
    })(input)
}

/// The part of an address after the `@`.
pub fn domain(input: &[u8]) -> NomResult<'_, (Syntax, String)> {
    modern_or_obsolete(
        alt((map(dot_atom, current), map(domain_literal, current))),
        tag("."),
        map(obs_domain, obsolete),
    )(input)
}

/// A bare `local-part "@" domain`.
pub fn addr_spec(input: &[u8]) -> NomResult<'_, Mailbox> {
    map(tuple((local_part, tag("@"), domain)), |((_, local_part), _, (_, domain))| {
        Mailbox { local_part, domain, ..Default::default() }
    })(input)
}

// obs-domain-list = *(CFWS / ",") "@" domain *("," [CFWS] ["@" domain])
fn obs_domain_list(input: &[u8]) -> NomResult<'_, Vec<String>> {
    map(tuple((
        many0(alt((cfws, value((), tag(","))))),
        preceded(tag("@"), domain),
        many0(preceded(pair(tag(","), opt(cfws)), opt(preceded(tag("@"), domain)))),
    )), |(_, (_, first), rest)| {
        let mut out = vec![first];
        out.extend(rest.into_iter().flatten().map(|(_, d)| d));
        out
    })(input)
}

fn obs_route(input: &[u8]) -> NomResult<'_, Vec<String>> {
    terminated(obs_domain_list, tag(":"))(input)
}

fn obs_angle_addr(input: &[u8]) -> NomResult<'_, Mailbox> {
    map(delimited(
        pair(opt(cfws), tag("<")),
        pair(obs_route, addr_spec),
        pair(tag(">"), opt(cfws)),
    ), |(route, mbox)| Mailbox { route, ..mbox })(input)
}

/// An addr-spec in angle brackets, possibly with an obsolete source route.
pub fn angle_addr(input: &[u8]) -> NomResult<'_, Mailbox> {
    alt((
        delimited(pair(opt(cfws), tag("<")), addr_spec, pair(tag(">"), opt(cfws))),
        obs_angle_addr,
    ))(input)
}

pub fn display_name(input: &[u8]) -> NomResult<'_, Vec<String>> {
    phrase(input)
}

pub fn name_addr(input: &[u8]) -> NomResult<'_, Mailbox> {
    map(pair(opt(display_name), angle_addr), |(display_name, mbox)| {
        Mailbox { display_name: display_name.unwrap_or_default(), ..mbox }
    })(input)
}

/// A single mailbox: `name-addr` or a bare `addr-spec`.
pub fn mailbox(input: &[u8]) -> NomResult<'_, Mailbox> {
    alt((name_addr, addr_spec))(input)
}

fn mailbox_list_current(input: &[u8]) -> NomResult<'_, Vec<Mailbox>> {
    separated_list1(tag(","), mailbox)(input)
}

// Empty list elements are skipped.
fn obs_mbox_list(input: &[u8]) -> NomResult<'_, Vec<Mailbox>> {
    map(tuple((
        many0(pair(opt(cfws), tag(","))),
        mailbox,
        many0(preceded(tag(","), opt(alt((map(mailbox, Some), value(None, cfws)))))),
    )), |(_, first, rest)| {
        let mut out = vec![first];
        out.extend(rest.into_iter().flatten().flatten());
        out
    })(input)
}

pub fn mailbox_list(input: &[u8]) -> NomResult<'_, Vec<Mailbox>> {
    modern_or_obsolete(mailbox_list_current, tag(","), obs_mbox_list)(input)
}

fn obs_group_list(input: &[u8]) -> NomResult<'_, Vec<Mailbox>> {
    value(Vec::new(), pair(many1(pair(opt(cfws), tag(","))), opt(cfws)))(input)
}

fn group_list(input: &[u8]) -> NomResult<'_, Vec<Mailbox>> {
    alt((
        mailbox_list,
        modern_or_obsolete(value(Vec::new(), cfws), tag(","), obs_group_list),
    ))(input)
}

pub fn group(input: &[u8]) -> NomResult<'_, Group> {
    map(tuple((display_name, tag(":"), opt(group_list), tag(";"), opt(cfws))),
        |(name, _, members, _, _)| Group { name, members: members.unwrap_or_default() })(input)
}

pub fn address(input: &[u8]) -> NomResult<'_, Address> {
    alt((map(mailbox, Address::Mailbox), map(group, Address::Group)))(input)
}

fn address_list_current(input: &[u8]) -> NomResult<'_, Vec<Address>> {
    separated_list1(tag(","), address)(input)
}

// Empty list elements are skipped.
fn obs_addr_list(input: &[u8]) -> NomResult<'_, Vec<Address>> {
    map(tuple((
        many0(pair(opt(cfws), tag(","))),
        address,
        many0(preceded(tag(","), opt(alt((map(address, Some), value(None, cfws)))))),
    )), |(_, first, rest)| {
        let mut out = vec![first];
        out.extend(rest.into_iter().flatten().flatten());
        out
    })(input)
}

pub fn address_list(input: &[u8]) -> NomResult<'_, Vec<Address>> {
    modern_or_obsolete(address_list_current, tag(","), obs_addr_list)(input)
}

/// Parse a `From:` field body.
///
/// Updated from RFC 6854, any address list is accepted.
pub fn from(input: &[u8]) -> NomResult<'_, Vec<Address>> {
    terminated(address_list, opt(crlf))(input)
}

/// Parse a `Sender:` field body.
pub fn sender(input: &[u8]) -> NomResult<'_, Address> {
    terminated(address, opt(crlf))(input)
}

/// Parse a `Reply-To:` field body.
pub fn reply_to(input: &[u8]) -> NomResult<'_, Vec<Address>> {
    terminated(address_list, opt(crlf))(input)
}

/// Parse a mailbox starting at byte offset `start`.
///
/// Returns the mailbox and the offset just past it.
/// # Examples
/// ```
/// use imf_grammar::rfc5322::parse_mailbox;
///
/// let input = b"To: \"John Doe\" <jdoe@example.com>";
/// let (mbox, end) = parse_mailbox(input, 3).unwrap();
///
/// assert_eq!(mbox.display_name, ["John", "Doe"]);
/// assert_eq!(mbox.local_part, "jdoe");
/// assert_eq!(mbox.domain, "example.com");
/// assert_eq!(end, input.len());
/// ```
pub fn parse_mailbox(input: &[u8], start: usize) -> Result<(Mailbox, usize), SyntaxError> {
    parse_at(Grammar::Mailbox, mailbox, input, start)
}

/// Parse an address (mailbox or group) starting at byte offset `start`.
pub fn parse_address(input: &[u8], start: usize) -> Result<(Address, usize), SyntaxError> {
    parse_at(Grammar::Address, address, input, start)
}

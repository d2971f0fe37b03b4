//! Parsers for the Internet Message Format grammar of [RFC 5322].
//!
//! Every production is a function from a byte slice to the parsed value
//! and the unconsumed remainder. A production that fails leaves the
//! caller's slice untouched, so alternatives are simply tried in order.
//!
//! Obsolete (section 4) productions are alternatives of their current
//! counterparts. The current form is always tried first; the obsolete
//! one is only preferred when the input continues past the current match
//! in a way only the obsolete form accepts.
//!
//! Comments are dropped from all values except [`comment`] itself.
//!
//! [RFC 5322]: https://tools.ietf.org/html/rfc5322

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::combinator::{map, opt, recognize, value};
use nom::multi::{many0, many1};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};

use crate::rfc5234::*;
use crate::util::*;

mod address;
mod datetime;

pub use self::address::*;
pub use self::datetime::*;

/// Which alternative of a production matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syntax {
    Current,
    Obsolete,
}

// obs-NO-WS-CTL: US-ASCII control characters that do not include CR, LF
// and white space.
pub fn is_obs_no_ws_ctl(c: u8) -> bool {
    (1..=8).contains(&c) || c == 11 || c == 12 || (14..=31).contains(&c) || c == 127
}

pub fn is_atext(c: u8) -> bool {
    is_alpha(c) || is_digit(c) || b"!#$%&'*+-/=?^_`{|}~".contains(&c)
}

/// ctext including obs-ctext.
pub fn is_ctext(c: u8) -> bool {
    (33..=39).contains(&c) || (42..=91).contains(&c) || (93..=126).contains(&c) || is_obs_no_ws_ctl(c)
}

/// qtext including obs-qtext.
pub fn is_qtext(c: u8) -> bool {
    c == 33 || (35..=91).contains(&c) || (93..=126).contains(&c) || is_obs_no_ws_ctl(c)
}

/// dtext without obs-dtext, which also admits quoted-pairs.
pub fn is_dtext(c: u8) -> bool {
    (33..=90).contains(&c) || (94..=126).contains(&c)
}

fn obs_qp(input: &[u8]) -> NomResult<'_, u8> {
    preceded(tag("\\"), take1_filter(|c| c == 0 || is_obs_no_ws_ctl(c) || c == b'\n' || c == b'\r'))(input)
}

/// A backslash escape, yielding the escaped byte.
pub fn quoted_pair(input: &[u8]) -> NomResult<'_, u8> {
    alt((preceded(tag("\\"), alt((vchar, wsp))), obs_qp))(input)
}

fn fws_current(input: &[u8]) -> NomResult<'_, Vec<u8>> {
    map(pair(opt(terminated(many0(wsp), crlf)), many1(wsp)), |(a, b)| {
        //CRLF is "semantically invisible"
        a.unwrap_or_default().into_iter().chain(b).collect()
    })(input)
}

fn obs_fws(input: &[u8]) -> NomResult<'_, Vec<u8>> {
    map(pair(many1(wsp), many0(preceded(crlf, many1(wsp)))), |(mut a, b)| {
        a.extend(b.into_iter().flatten());
        a
    })(input)
}

/// Folding white space, yielding the white space with folds removed.
pub fn fws(input: &[u8]) -> NomResult<'_, Vec<u8>> {
    modern_or_obsolete(fws_current, pair(crlf, wsp), obs_fws)(input)
}

pub fn ofws(input: &[u8]) -> NomResult<'_, Vec<u8>> {
    map(opt(fws), Option::unwrap_or_default)(input)
}

/// Content of a comment.
///
/// Adjacent text is merged, including the white space between it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentContent {
    Text(String),
    Comment(Vec<CommentContent>),
}

fn ctext(input: &[u8]) -> NomResult<'_, &[u8]> {
    take_while1(is_ctext)(input)
}

fn ccontent(input: &[u8]) -> NomResult<'_, CommentContent> {
    alt((
        map(ctext, |t| CommentContent::Text(ascii_to_string(t).into_owned())),
        map(quoted_pair, |c| CommentContent::Text(char::from(c).to_string())),
        map(comment, CommentContent::Comment),
    ))(input)
}

fn concat_comment(parts: Vec<CommentContent>) -> Vec<CommentContent> {
    let mut out: Vec<CommentContent> = Vec::with_capacity(parts.len());

    for part in parts {
        if let CommentContent::Text(text) = &part {
            if text.is_empty() {
                continue;
            }
            if let Some(CommentContent::Text(prev)) = out.last_mut() {
                prev.push_str(text);
                continue;
            }
        }
        out.push(part);
    }

    out
}

/// A parenthesized comment. Comments nest.
///
/// Nesting is recursive with no depth limit: stack use grows with the
/// number of unclosed `(`. Callers parsing untrusted input should bound
/// its length.
pub fn comment(input: &[u8]) -> NomResult<'_, Vec<CommentContent>> {
    map(tuple((tag("("), many0(pair(ofws, ccontent)), ofws, tag(")"))), |(_, content, tail, _)| {
        let mut parts = Vec::with_capacity(content.len() * 2 + 1);
        for (ws, cc) in content {
            parts.push(CommentContent::Text(ascii_to_string(&ws).into_owned()));
            parts.push(cc);
        }
        parts.push(CommentContent::Text(ascii_to_string(&tail).into_owned()));
        concat_comment(parts)
    })(input)
}

/// Comments and folding white space.
pub fn cfws(input: &[u8]) -> NomResult<'_, ()> {
    alt((
        value((), pair(many1(pair(opt(fws), comment)), opt(fws))),
        value((), fws),
    ))(input)
}

// True when a comment, possibly after white space, comes next.
pub(crate) fn comment_follows(input: &[u8]) -> NomResult<'_, ()> {
    value((), pair(opt(fws), tag("(")))(input)
}

fn atext(input: &[u8]) -> NomResult<'_, &[u8]> {
    take_while1(is_atext)(input)
}

pub fn atom(input: &[u8]) -> NomResult<'_, String> {
    delimited(opt(cfws), map(atext, |a| ascii_to_string(a).into_owned()), opt(cfws))(input)
}

fn dot_atom_text(input: &[u8]) -> NomResult<'_, &[u8]> {
    recognize(pair(atext, many0(pair(tag("."), atext))))(input)
}

pub fn dot_atom(input: &[u8]) -> NomResult<'_, String> {
    delimited(opt(cfws), map(dot_atom_text, |a| ascii_to_string(a).into_owned()), opt(cfws))(input)
}

#[derive(Clone, Debug)]
pub(crate) enum QContent {
    Fws(Vec<u8>),
    Text(u8),
}

fn qcontent(input: &[u8]) -> NomResult<'_, u8> {
    alt((take1_filter(is_qtext), quoted_pair))(input)
}

fn quoted_content(input: &[u8]) -> NomResult<'_, Vec<QContent>> {
    map(tuple((
        opt(cfws),
        dquote,
        many0(pair(ofws, qcontent)),
        ofws,
        dquote,
        opt(cfws),
    )), |(_, _, content, tail, _, _)| {
        let mut out = Vec::with_capacity(content.len() + 1);
        for (ws, c) in content {
            if !ws.is_empty() {
                out.push(QContent::Fws(ws));
            }
            out.push(QContent::Text(c));
        }
        if !tail.is_empty() {
            out.push(QContent::Fws(tail));
        }
        out
    })(input)
}

/// A quoted string, yielding its unescaped content.
///
/// Folded white space inside the quotes is kept, minus the line breaks.
pub fn quoted_string(input: &[u8]) -> NomResult<'_, String> {
    map(quoted_content, |q| Word::QS(q).text())(input)
}

#[derive(Clone, Debug)]
pub(crate) enum Word {
    Atom(String),
    QS(Vec<QContent>),
}

impl Word {
    /// The word as a single piece of text.
    pub(crate) fn text(&self) -> String {
        match self {
            Word::Atom(a) => a.clone(),
            Word::QS(content) => {
                let bytes: Vec<u8> = content.iter().flat_map(|c| match c {
                    QContent::Fws(ws) => ws.clone(),
                    QContent::Text(c) => vec![*c],
                }).collect();
                ascii_to_string(&bytes).into_owned()
            }
        }
    }

    /// The word as it contributes to a phrase.
    ///
    /// Folding white space inside a quoted string separates words there
    /// too. An empty quoted string is one empty word.
    pub(crate) fn phrase_words(&self) -> Vec<String> {
        match self {
            Word::Atom(a) => vec![a.clone()],
            Word::QS(content) => {
                let mut words = Vec::new();
                let mut current = Vec::new();
                for c in content {
                    match c {
                        QContent::Fws(_) => {
                            if !current.is_empty() {
                                words.push(ascii_to_string(&current).into_owned());
                                current.clear();
                            }
                        }
                        QContent::Text(c) => current.push(*c),
                    }
                }
                if !current.is_empty() || words.is_empty() {
                    words.push(ascii_to_string(&current).into_owned());
                }
                words
            }
        }
    }
}

pub(crate) fn word(input: &[u8]) -> NomResult<'_, Word> {
    alt((map(atom, Word::Atom), map(quoted_content, Word::QS)))(input)
}

fn phrase_current(input: &[u8]) -> NomResult<'_, Vec<String>> {
    map(many1(word), |words| words.iter().flat_map(Word::phrase_words).collect())(input)
}

fn obs_phrase(input: &[u8]) -> NomResult<'_, Vec<String>> {
    map(pair(word, many0(alt((
        map(word, |w| w.phrase_words()),
        map(tag("."), |_| vec![".".to_string()]),
        map(cfws, |_| Vec::new()),
    )))), |(first, rest)| {
        let mut out = first.phrase_words();
        out.extend(rest.into_iter().flatten());
        out
    })(input)
}

/// A sequence of words, as used for display names.
pub fn phrase(input: &[u8]) -> NomResult<'_, Vec<String>> {
    modern_or_obsolete(phrase_current, tag("."), obs_phrase)(input)
}

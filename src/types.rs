//! Values produced by the Internet Message Format grammar.
//!
//! All of these are plain data with value equality. Text fields hold the
//! decoded form: comments and folding whitespace are gone, quoted-pairs
//! are unescaped.
//!
//! `Display` renders the RFC 5322 syntax for a value; parsing that
//! rendering yields an equal value.

use std::fmt::{self, Display};

use crate::error::Grammar;
use crate::rfc5322::{self as imf, is_atext, is_dtext};

/// A single address, optionally named and routed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mailbox {
    /// Words of the display name, empty when absent.
    pub display_name: Vec<String>,
    /// Domains of an obsolete source route, empty when absent.
    pub route: Vec<String>,
    pub local_part: String,
    pub domain: String,
}
imf_fromstr!(Mailbox, imf::mailbox, Grammar::Mailbox);

impl Mailbox {
    /// Returns the `local-part "@" domain` form.
    ///
    /// The local part is quoted unless it is a dot-atom. The domain is
    /// bracketed as a domain literal unless it is a dot-atom, so a literal
    /// such as `[10.0.0.1]` comes back unbracketed as `10.0.0.1`. Both
    /// forms parse to the same `domain`.
    pub fn addr_spec(&self) -> String {
        let mut out = String::with_capacity(self.local_part.len() + self.domain.len() + 5);

        if is_dot_atom_text(&self.local_part) {
            out.push_str(&self.local_part);
        } else {
            push_quoted(&mut out, &self.local_part, |c| c == b' ' || c == b'\t');
        }
        out.push('@');
        if is_dot_atom_text(&self.domain) {
            out.push_str(&self.domain);
        } else {
            out.push('[');
            for c in self.domain.chars() {
                if c.is_ascii() && !(is_dtext(c as u8) || c == ' ' || c == '\t') {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push(']');
        }

        out
    }
}

impl Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_name.is_empty() && self.route.is_empty() {
            return write!(f, "{}", self.addr_spec());
        }
        if !self.display_name.is_empty() {
            write_phrase(f, &self.display_name)?;
            f.write_str(" ")?;
        }
        f.write_str("<")?;
        if !self.route.is_empty() {
            let route: Vec<_> = self.route.iter().map(|d| format!("@{}", d)).collect();
            write!(f, "{}:", route.join(","))?;
        }
        write!(f, "{}>", self.addr_spec())
    }
}

/// A named list of mailboxes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub name: Vec<String>,
    pub members: Vec<Mailbox>,
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_phrase(f, &self.name)?;
        f.write_str(":")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {}", member)?;
        }
        f.write_str(";")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Address {
    Mailbox(Mailbox),
    Group(Group),
}
imf_fromstr!(Address, imf::address, Grammar::Address);

impl From<Mailbox> for Address {
    fn from(value: Mailbox) -> Address {
        Address::Mailbox(value)
    }
}

impl From<Group> for Address {
    fn from(value: Group) -> Address {
        Address::Group(value)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Mailbox(m) => write!(f, "{}", m),
            Address::Group(g) => write!(f, "{}", g),
        }
    }
}

/// Obsolete time zone names.
///
/// Military zone letters are kept as given: their offsets were never
/// reliably defined so none is assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObsoleteZone {
    UT,
    GMT,
    EST,
    EDT,
    CST,
    CDT,
    MST,
    MDT,
    PST,
    PDT,
    Military(char),
}

impl ObsoleteZone {
    pub fn label(self) -> &'static str {
        match self {
            ObsoleteZone::UT => "Universal",
            ObsoleteZone::GMT => "Greenwich",
            ObsoleteZone::EST | ObsoleteZone::EDT => "Eastern",
            ObsoleteZone::CST | ObsoleteZone::CDT => "Central",
            ObsoleteZone::MST | ObsoleteZone::MDT => "Mountain",
            ObsoleteZone::PST | ObsoleteZone::PDT => "Pacific",
            ObsoleteZone::Military(_) => "Military",
        }
    }

    /// Offset in the same `+hhmm` encoding as [`Zone::Offset`].
    ///
    /// `None` for military zones.
    pub fn offset(self) -> Option<i16> {
        match self {
            ObsoleteZone::UT | ObsoleteZone::GMT => Some(0),
            ObsoleteZone::EDT => Some(-400),
            ObsoleteZone::EST | ObsoleteZone::CDT => Some(-500),
            ObsoleteZone::CST | ObsoleteZone::MDT => Some(-600),
            ObsoleteZone::MST | ObsoleteZone::PDT => Some(-700),
            ObsoleteZone::PST => Some(-800),
            ObsoleteZone::Military(_) => None,
        }
    }
}

impl Display for ObsoleteZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObsoleteZone::Military(c) => write!(f, "{}", c),
            other => write!(f, "{:?}", other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    /// Signed `hhmm` as written, `-0600` is `-600`.
    Offset(i16),
    Obsolete(ObsoleteZone),
}

impl Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Offset(n) if *n < 0 => write!(f, "-{:04}", -n),
            Zone::Offset(n) => write!(f, "+{:04}", n),
            Zone::Obsolete(z) => write!(f, "{}", z),
        }
    }
}

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTH_NAMES: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun",
                                 "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// A date and time as written in a message.
///
/// Fields are syntactic: `day` 31 in February or `hour` 99 are kept as
/// written. Calendar checks happen only in conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    /// 1 (Monday) to 7 (Sunday).
    pub day_of_week: Option<u8>,
    pub year: u32,
    /// Digits the year was written with, leading zeros included.
    pub year_digits: u8,
    /// 1 to 12.
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// 0 when the seconds were omitted.
    pub second: u8,
    pub zone: Zone,
}
imf_fromstr!(DateTime, imf::date_time, Grammar::DateTime);

impl DateTime {
    /// The year with obsolete two and three digit years expanded.
    ///
    /// A two digit year below 50 gets 2000 added, any other two or three
    /// digit year gets 1900. Years written with four or more digits are
    /// taken as is, `0049` is the year 49.
    pub fn full_year(&self) -> u32 {
        match (self.year_digits, self.year) {
            (2, y) if y < 50 => y + 2000,
            (2, y) | (3, y) => y + 1900,
            (_, y) => y,
        }
    }

    /// Convert to a calendar-checked chrono value.
    ///
    /// `None` when the fields do not name a real instant or the zone is a
    /// military letter.
    #[cfg(feature = "chrono")]
    pub fn to_chrono(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        use std::convert::TryFrom;

        use chrono::TimeZone;

        let raw = match self.zone {
            Zone::Offset(n) => n,
            Zone::Obsolete(z) => z.offset()?,
        };
        let raw = i32::from(raw);
        let seconds = (raw / 100) * 3600 + (raw % 100) * 60;
        let offset = chrono::FixedOffset::east_opt(seconds)?;
        let year = i32::try_from(self.full_year()).ok()?;
        let naive = chrono::NaiveDate::from_ymd_opt(year, u32::from(self.month), u32::from(self.day))?
            .and_hms_opt(u32::from(self.hour), u32::from(self.minute), u32::from(self.second))?;

        offset.from_local_datetime(&naive).single()
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.day_of_week.and_then(|d| DAY_NAMES.get(usize::from(d).wrapping_sub(1))) {
            write!(f, "{}, ", name)?;
        }
        let month = MONTH_NAMES.get(usize::from(self.month).wrapping_sub(1)).ok_or(fmt::Error)?;
        write!(f, "{} {} {:0width$} {:02}:{:02}:{:02} {}",
               self.day, month, self.year, self.hour, self.minute, self.second, self.zone,
               width = usize::from(self.year_digits))
    }
}

fn is_dot_atom_text(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(|a| !a.is_empty() && a.bytes().all(is_atext))
}

// Backslash-escape everything that is not qtext or `literal`.
fn push_quoted<F: Fn(u8) -> bool>(out: &mut String, s: &str, literal: F) {
    out.push('"');
    for c in s.chars() {
        if c.is_ascii() && (!(imf::is_qtext(c as u8) || literal(c as u8)) || c == '"' || c == '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

fn write_phrase(f: &mut fmt::Formatter<'_>, words: &[String]) -> fmt::Result {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if word == "." || (!word.is_empty() && word.bytes().all(is_atext)) {
            out.push_str(word);
        } else {
            push_quoted(&mut out, word, |_| false);
        }
    }
    f.write_str(&out)
}

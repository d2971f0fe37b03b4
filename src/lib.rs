//! Parse email addresses and dates the hard way.
//!
//! Backtracking nom parsers for the address and date-time grammar of
//! RFC 5322, including every obsolete form.
//!
//! Each production in [`rfc5322`] takes a byte slice and returns the
//! parsed value with the unconsumed remainder. The `parse_*` entry points
//! work on byte offsets instead and report failures as [`SyntaxError`].
//!
//! ```
//! use imf_grammar::{Address, DateTime, Mailbox};
//!
//! let mbox: Mailbox = "Pete(A nice \\) chap) <pete(his account)@silly.test(his host)>".parse().unwrap();
//! assert_eq!(mbox.display_name, ["Pete"]);
//! assert_eq!(mbox.addr_spec(), "pete@silly.test");
//!
//! let group: Address = "undisclosed-recipients:;".parse().unwrap();
//! assert!(matches!(group, Address::Group(g) if g.members.is_empty()));
//!
//! let dt: DateTime = "21 Nov 97 09:55:06 GMT".parse().unwrap();
//! assert_eq!(dt.full_year(), 1997);
//! ```

#![warn(rust_2018_idioms)]

#[macro_use]
mod util;
pub mod error;
pub mod rfc5234;
pub mod rfc5322;
pub mod types;

pub use self::error::{Grammar, SyntaxError};
pub use self::rfc5322::{parse_address, parse_date_time, parse_mailbox};
pub use self::types::*;
pub use self::util::{parse_at, NomError, NomResult};

#[cfg(test)]
mod tests;

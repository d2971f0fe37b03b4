#[macro_use]
extern crate afl;

use imf_grammar::rfc5322::{date_time, mailbox};

// Comment nesting recurses once per `(`.
const MAX_INPUT: usize = 1024;

fn main() {
    fuzz!(|data: &[u8]| {
        if data.len() > MAX_INPUT {
            return;
        }
        let _ = mailbox(data);
        let _ = date_time(data);
    });
}

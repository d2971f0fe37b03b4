use std::env;
use std::os::unix::ffi::OsStrExt;

use imf_grammar::rfc5322::{address, address_list, date_time, mailbox};
use imf_grammar::{parse_at, Grammar, SyntaxError};

fn usage() -> String {
    "usage: imf-grammar <mailbox|address|address-list|date-time> <input>...".into()
}

fn parse(grammar: Grammar, input: &[u8]) -> Result<(String, usize), SyntaxError> {
    match grammar {
        Grammar::Mailbox => parse_at(grammar, mailbox, input, 0).map(|(v, end)| (format!("{:?}", v), end)),
        Grammar::Address => parse_at(grammar, address, input, 0).map(|(v, end)| (format!("{:?}", v), end)),
        Grammar::AddressList => parse_at(grammar, address_list, input, 0).map(|(v, end)| (format!("{:?}", v), end)),
        Grammar::DateTime => parse_at(grammar, date_time, input, 0).map(|(v, end)| (format!("{:?}", v), end)),
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut args = env::args_os().skip(1);
    let grammar = match args.next().as_ref().and_then(|g| g.to_str()) {
        Some("mailbox") => Grammar::Mailbox,
        Some("address") => Grammar::Address,
        Some("address-list") => Grammar::AddressList,
        Some("date-time") => Grammar::DateTime,
        _ => return Err(usage()),
    };

    let mut failed = 0;
    for arg in args {
        let input = arg.as_bytes();
        println!("input: {:?}", String::from_utf8_lossy(input));

        match parse(grammar, input) {
            Ok((parsed, end)) => {
                println!("{}", parsed);
                println!("remainder: {:?}\n", String::from_utf8_lossy(&input[end..]));
            }
            Err(e) => {
                println!("{}\n", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} input(s) did not parse", failed));
    }

    Ok(())
}

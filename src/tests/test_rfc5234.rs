use crate::rfc5234::*;

#[test]
fn digit_weight() {
    assert_eq!(digit(b"7x"), Ok((&b"x"[..], 7)));
    assert!(digit(b"a").is_err());
    assert!(digit(b"").is_err());
}

#[test]
fn hexdig_weight() {
    assert_eq!(hexdig(b"F").unwrap().1, 15);
    assert_eq!(hexdig(b"a").unwrap().1, 10);
    assert_eq!(hexdig(b"9").unwrap().1, 9);
    assert!(hexdig(b"g").is_err());
}

#[test]
fn class_boundaries() {
    assert!(is_vchar(0x21) && is_vchar(0x7e));
    assert!(!is_vchar(0x20) && !is_vchar(0x7f));
    assert!(is_ctl(0x00) && is_ctl(0x1f) && is_ctl(0x7f));
    assert!(!is_ctl(0x20));
    assert!(is_wsp(b' ') && is_wsp(b'\t'));
    assert!(!is_wsp(b'\r'));
    assert!(!is_alpha(b'@') && !is_alpha(b'[') && is_alpha(b'z'));
    assert!(!is_alpha(0xe9));
}

#[test]
fn single_bytes() {
    assert_eq!(wsp(b"\tx").unwrap(), (&b"x"[..], b'\t'));
    assert_eq!(dquote(b"\"").unwrap().1, b'"');
    assert_eq!(crlf(b"\r\nx").unwrap(), (&b"x"[..], &b"\r\n"[..]));
    assert!(crlf(b"\n").is_err());
    assert!(cr(b"\n").is_err());
    assert_eq!(lf(b"\n").unwrap().1, b'\n');
}

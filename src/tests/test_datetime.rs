use crate::rfc5322::*;
use crate::types::*;

#[test]
fn modern_date_time() {
    let (rem, parsed) = date_time(b"Fri, 21 Nov 1997 09:55:06 -0600").unwrap();
    assert_eq!(rem.len(), 0);
    assert_eq!(parsed, DateTime {
        day_of_week: Some(5),
        year: 1997,
        year_digits: 4,
        month: 11,
        day: 21,
        hour: 9,
        minute: 55,
        second: 6,
        zone: Zone::Offset(-600),
    });
}

#[test]
fn seconds_default_to_zero() {
    let (_, parsed) = date_time(b"21 Nov 1997 09:55 +0100").unwrap();
    assert_eq!(parsed.day_of_week, None);
    assert_eq!(parsed.second, 0);
    assert_eq!(parsed.zone, Zone::Offset(100));
}

#[test]
fn folded_date_time() {
    let (rem, parsed) = date_time(b"Thu,\r\n      13\r\n        Feb\r\n          1969\r\n      23:32\r\n               -0330 (Newfoundland Time)").unwrap();
    assert_eq!(rem.len(), 0);
    assert_eq!((parsed.year, parsed.month, parsed.day), (1969, 2, 13));
    assert_eq!((parsed.hour, parsed.minute), (23, 32));
    assert_eq!(parsed.zone, Zone::Offset(-330));
}

#[test]
fn obsolete_fields() {
    let (rem, parsed) = date_time(b"Fri, 21 Nov 97 9:5:6 EST").unwrap();
    assert_eq!(rem.len(), 0);
    assert_eq!(parsed.year, 97);
    assert_eq!(parsed.full_year(), 1997);
    assert_eq!((parsed.hour, parsed.minute, parsed.second), (9, 5, 6));
    assert_eq!(parsed.zone, Zone::Obsolete(ObsoleteZone::EST));
}

#[test]
fn obsolete_second_before_numeric_zone() {
    let (rem, parsed) = date_time(b"21 Nov 1997 09:55:6 -0600").unwrap();
    assert_eq!(rem.len(), 0);
    assert_eq!(parsed.second, 6);
    assert_eq!(parsed.zone, Zone::Offset(-600));
}

#[test]
fn comments_between_fields() {
    let (rem, parsed) = date_time(b"Fri(day), 21 (the) Nov (month) 1997 (year) 09 : 55 : 06(secs) -0600").unwrap();
    assert_eq!(rem.len(), 0);
    assert_eq!(parsed.day_of_week, Some(5));
    assert_eq!((parsed.year, parsed.month, parsed.day), (1997, 11, 21));
    assert_eq!((parsed.hour, parsed.minute, parsed.second), (9, 55, 6));
}

#[test]
fn names_ignore_case() {
    let (_, parsed) = date_time(b"fri, 21 nOV 1997 09:55:06 gmt").unwrap();
    assert_eq!(parsed.month, 11);
    assert_eq!(parsed.zone, Zone::Obsolete(ObsoleteZone::GMT));
}

#[test]
fn military_zone_has_no_offset() {
    let (_, parsed) = date_time(b"21 Nov 1997 09:55:06 z").unwrap();
    assert_eq!(parsed.zone, Zone::Obsolete(ObsoleteZone::Military('z')));
    assert_eq!(ObsoleteZone::Military('z').label(), "Military");
    assert_eq!(ObsoleteZone::Military('z').offset(), None);
}

#[test]
#[should_panic]
fn no_j_zone() {
    date_time(b"21 Nov 1997 09:55:06 J").unwrap();
}

#[test]
#[should_panic]
fn three_digit_hour() {
    date_time(b"21 Nov 1997 123:55:06 -0600").unwrap();
}

#[test]
fn hour_takes_two_digits() {
    let (rem, parsed) = hour(b"123").unwrap();
    assert_eq!(rem, b"3");
    assert_eq!(parsed, 12);
}

#[test]
#[should_panic]
fn ten_digit_year() {
    date_time(b"21 Nov 1997000000 09:55:06 -0600").unwrap();
}

#[test]
fn wide_year() {
    let (_, parsed) = date_time(b"21 Nov 19970 09:55:06 -0600").unwrap();
    assert_eq!(parsed.year, 19970);
}

#[test]
fn no_calendar_check() {
    let (_, parsed) = date_time(b"31 Feb 1997 99:99:99 +9999").unwrap();
    assert_eq!((parsed.day, parsed.hour, parsed.second), (31, 99, 99));
    assert_eq!(parsed.zone, Zone::Offset(9999));
}

#[test]
fn full_year() {
    let year = |input: &[u8]| date_time(input).unwrap().1;

    let dt = year(b"1 Jan 49 00:00 +0000");
    assert_eq!((dt.year, dt.year_digits, dt.full_year()), (49, 2, 2049));
    assert_eq!(year(b"1 Jan 50 00:00 +0000").full_year(), 1950);

    let dt = year(b"1 Jan 049 00:00 +0000");
    assert_eq!((dt.year, dt.year_digits, dt.full_year()), (49, 3, 1949));
    assert_eq!(year(b"1 Jan 101 00:00 +0000").full_year(), 2001);

    let dt = year(b"1 Jan 0049 00:00 +0000");
    assert_eq!((dt.year, dt.year_digits, dt.full_year()), (49, 4, 49));
    assert_eq!(year(b"1 Jan 2024 00:00 +0000").full_year(), 2024);
}

#[test]
fn obsolete_day_of_week() {
    let (rem, parsed) = date_time(b"Fri , 21 Nov 1997 09:55:06 -0600").unwrap();
    assert_eq!(rem.len(), 0);
    assert_eq!(parsed.day_of_week, Some(5));
    assert_eq!(parsed.day, 21);

    let (rem, parsed) = date_time(b"Fri\r\n , 21 Nov 1997 09:55:06 -0600").unwrap();
    assert_eq!(rem.len(), 0);
    assert_eq!(parsed.day_of_week, Some(5));
}

#[test]
fn named_obsolete_zones() {
    let zones = [
        ("UT", ObsoleteZone::UT, "Universal", 0),
        ("GMT", ObsoleteZone::GMT, "Greenwich", 0),
        ("EST", ObsoleteZone::EST, "Eastern", -500),
        ("EDT", ObsoleteZone::EDT, "Eastern", -400),
        ("CST", ObsoleteZone::CST, "Central", -600),
        ("CDT", ObsoleteZone::CDT, "Central", -500),
        ("MST", ObsoleteZone::MST, "Mountain", -700),
        ("MDT", ObsoleteZone::MDT, "Mountain", -600),
        ("PST", ObsoleteZone::PST, "Pacific", -800),
        ("PDT", ObsoleteZone::PDT, "Pacific", -700),
    ];

    for &(name, expected, label, offset) in zones.iter() {
        let input = format!("21 Nov 1997 09:55:06 {}", name);
        let (rem, parsed) = date_time(input.as_bytes()).unwrap();
        assert_eq!(rem.len(), 0, "{}", name);
        assert_eq!(parsed.zone, Zone::Obsolete(expected), "{}", name);
        assert_eq!(expected.label(), label);
        assert_eq!(expected.offset(), Some(offset));
    }
}

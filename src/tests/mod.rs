mod test_rfc5234;
mod test_datetime;

//! Tests for size parsing and display.

use locyst::{format_size, parse_size};

#[test]
fn parse_size_units() {
    assert_eq!(parse_size("100"), Some(100));
    assert_eq!(parse_size("100B"), Some(100));
    assert_eq!(parse_size("20560"), Some(20_560));
    assert_eq!(parse_size("1K"), Some(1024));
    assert_eq!(parse_size("20kb"), Some(20 * 1024));
    assert_eq!(parse_size("1M"), Some(1024 * 1024));
    assert_eq!(parse_size("1.5M"), Some(1024 * 1024 * 3 / 2));
    assert_eq!(parse_size("1G"), Some(1024 * 1024 * 1024));
}

#[test]
fn parse_size_rejects_garbage() {
    assert_eq!(parse_size("lots"), None);
    assert_eq!(parse_size(""), None);
    assert_eq!(parse_size("-5K"), None);
}

#[test]
fn format_size_bytes() {
    assert_eq!(format_size(100), "100 B");
    assert_eq!(format_size(1024), "1.00 KB");
    assert_eq!(format_size(1024 * 1024), "1.00 MB");
    assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
}

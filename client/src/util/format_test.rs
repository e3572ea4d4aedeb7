use super::*;

#[test]
fn format_money_groups_thousands() {
    assert_eq!(format_money(0.0), "$0.00");
    assert_eq!(format_money(5.5), "$5.50");
    assert_eq!(format_money(999.999), "$1,000.00");
    assert_eq!(format_money(1_234_567.8), "$1,234,567.80");
}

#[test]
fn format_money_negative() {
    assert_eq!(format_money(-42.0), "-$42.00");
}

#[test]
fn format_date_takes_date_part() {
    assert_eq!(format_date(Some("2024-05-01T10:20:30Z")), "2024-05-01");
    assert_eq!(format_date(Some("2024-05-01")), "2024-05-01");
    assert_eq!(format_date(None), "\u{2014}");
    assert_eq!(format_date(Some("  ")), "\u{2014}");
}

#[test]
fn truncate_adds_ellipsis() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("hello world", 6), "hello\u{2026}");
}

#[test]
fn fund_badge_complete_is_success() {
    assert_eq!(fund_badge_class(FundRequestStatus::Complete), "badge badge--success");
}

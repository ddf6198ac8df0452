use coinbar::format_usd;

#[test]
fn format_usd_small_amount_has_no_separator() {
    assert_eq!(format_usd(0), "$ 0");
    assert_eq!(format_usd(7), "$ 7");
    assert_eq!(format_usd(999), "$ 999");
}

#[test]
fn format_usd_groups_thousands() {
    assert_eq!(format_usd(1000), "$ 1,000");
    assert_eq!(format_usd(65432), "$ 65,432");
}

#[test]
fn format_usd_groups_millions() {
    assert_eq!(format_usd(1234567), "$ 1,234,567");
    assert_eq!(format_usd(100000000), "$ 100,000,000");
}

#[test]
fn format_usd_exact_group_boundaries() {
    assert_eq!(format_usd(100), "$ 100");
    assert_eq!(format_usd(1000000), "$ 1,000,000");
}

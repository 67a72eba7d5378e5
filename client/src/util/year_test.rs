use super::*;

#[test]
fn copyright_line_formats_year_and_name() {
    assert_eq!(copyright_line(2025, "Saurabh Kumar"), "© 2025 Saurabh Kumar. Made with");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_year_matches_system_clock() {
    let year = current_year();
    assert_eq!(year, time::OffsetDateTime::now_utc().year());
    assert!(year >= 2024);
}

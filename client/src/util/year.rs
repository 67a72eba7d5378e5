//! Copyright year for the footer.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// Current calendar year: browser clock when hydrated, UTC system clock on the
/// server. The crate is built with `ssr` or `hydrate`; native tests get `time`
/// as a dev-dependency.
#[cfg_attr(feature = "hydrate", allow(clippy::cast_possible_wrap))]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// `© 2025 Name. Made with`; the footer appends the heart glyph and tagline.
#[must_use]
pub fn copyright_line(year: i32, name: &str) -> String {
    format!("© {year} {name}. Made with")
}

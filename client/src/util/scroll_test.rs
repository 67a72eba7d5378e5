use super::*;

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
}

#[test]
fn anchor_id_accepts_bare_id() {
    assert_eq!(anchor_id("contact"), Some("contact"));
}

#[test]
fn anchor_id_rejects_empty() {
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id(""), None);
    assert_eq!(anchor_id("#  "), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_anchor_is_noop_outside_browser() {
    assert!(!scroll_to_anchor("#projects"));
    assert!(!scroll_to_anchor("#"));
    assert_eq!(scroll_offset(), 0.0);
}

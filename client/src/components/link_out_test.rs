use super::*;

#[test]
fn external_links_open_in_new_tab() {
    assert_eq!(
        link_attrs("https://github.com/saurabh2226"),
        (Some("_blank"), Some("noopener noreferrer"))
    );
}

#[test]
fn handler_and_anchor_links_stay_in_tab() {
    assert_eq!(link_attrs("mailto:a@b.c"), (None, None));
    assert_eq!(link_attrs("tel:+1"), (None, None));
    assert_eq!(link_attrs("#about"), (None, None));
}

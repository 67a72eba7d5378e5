use super::*;
use crate::content::profile::PROFILE;

#[test]
fn person_carries_identity_fields() {
    let value = person_json_ld(&PROFILE);
    assert_eq!(value["@type"], "Person");
    assert_eq!(value["name"], PROFILE.name);
    assert_eq!(value["email"], "mailto:saurabhccs10@gmail.com");
    assert_eq!(value["alumniOf"]["name"], PROFILE.institution);
}

#[test]
fn same_as_lists_every_profile() {
    let value = person_json_ld(&PROFILE);
    let same_as = value["sameAs"].as_array().map(Vec::len);
    assert_eq!(same_as, Some(2 + CODING_PROFILES.len()));
    assert_eq!(value["sameAs"][0], PROFILE.github_url);
}

#[test]
fn script_body_cannot_close_the_tag() {
    let mut profile = PROFILE;
    profile.summary = "</script><b>";
    let body = person_script(&profile);
    assert!(!body.contains("</script>"));
    assert!(body.contains("<\\/script>"));
}

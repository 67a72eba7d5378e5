//! schema.org `Person` JSON-LD for the document head.

#[cfg(test)]
#[path = "structured_data_test.rs"]
mod structured_data_test;

use serde_json::{Value, json};

use crate::content::profile::Profile;
use crate::content::stats::CODING_PROFILES;

#[must_use]
pub fn person_json_ld(profile: &Profile) -> Value {
    let mut same_as = vec![profile.github_url, profile.linkedin_url];
    same_as.extend(CODING_PROFILES.iter().map(|p| p.url));
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": profile.name,
        "jobTitle": profile.headline,
        "description": profile.summary,
        "email": profile.mailto(),
        "telephone": profile.phone,
        "url": profile.portfolio_url,
        "sameAs": same_as,
        "alumniOf": {
            "@type": "CollegeOrUniversity",
            "name": profile.institution,
        },
    })
}

/// Serialized JSON-LD safe to embed in a `<script>` element.
#[must_use]
pub fn person_script(profile: &Profile) -> String {
    person_json_ld(profile).to_string().replace("</", "<\\/")
}

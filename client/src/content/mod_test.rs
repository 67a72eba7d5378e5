use std::collections::HashSet;

use super::achievements::ACHIEVEMENTS;
use super::contact::{CONTACT_CHANNELS, EMAIL_HREF, FOOTER_LINKS, HERO_LINKS, SOCIAL_LINKS};
use super::education::EDUCATION;
use super::experience::EXPERIENCES;
use super::profile::{FOOTER_FACTS, PROFILE};
use super::projects::PROJECTS;
use super::skills::SKILL_CATEGORIES;
use super::stats::{ABOUT_STATS, ACHIEVEMENT_STATS, CODING_PROFILES};
use super::*;

fn assert_filled(what: &str, values: &[&str]) {
    for value in values {
        assert!(!value.trim().is_empty(), "{what} has an empty field");
    }
}

fn assert_unique<'a>(what: &str, values: impl IntoIterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for value in values {
        assert!(seen.insert(value), "{what} repeats {value:?}");
    }
}

fn assert_valid_href(href: &str) {
    let ok = href == PLACEHOLDER_HREF
        || href.starts_with("https://")
        || href.starts_with("mailto:")
        || href.starts_with("tel:");
    assert!(ok, "unexpected href scheme: {href}");
}

// =============================================================
// Sections and links
// =============================================================

#[test]
fn section_anchors_are_unique() {
    assert_unique("section ids", Section::ALL.iter().map(|s| s.id()));
}

#[test]
fn section_href_targets_its_own_id() {
    for section in Section::ALL {
        assert_eq!(section.href(), format!("#{}", section.id()));
    }
}

#[test]
fn quick_links_skip_home() {
    assert!(!QUICK_LINK_SECTIONS.contains(&Section::Home));
    assert_eq!(QUICK_LINK_SECTIONS.len(), 4);
    assert_eq!(NAV_SECTIONS.first(), Some(&Section::Home));
}

#[test]
fn link_kind_classifies_hrefs() {
    assert_eq!(LinkKind::of("#"), LinkKind::Placeholder);
    assert_eq!(LinkKind::of(""), LinkKind::Placeholder);
    assert_eq!(LinkKind::of("#about"), LinkKind::Anchor);
    assert_eq!(LinkKind::of("mailto:a@b.c"), LinkKind::Handler);
    assert_eq!(LinkKind::of("tel:+1"), LinkKind::Handler);
    assert_eq!(LinkKind::of("https://example.com"), LinkKind::External);
}

#[test]
fn accent_classes_carry_the_accent_name() {
    for accent in [Accent::Purple, Accent::Cyan, Accent::Blue, Accent::Green] {
        assert!(accent.text_class().ends_with(accent.name()));
        assert!(accent.chip_class().ends_with(accent.name()));
    }
    assert_eq!(Accent::default(), Accent::Purple);
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_fields_are_filled() {
    let p = PROFILE;
    assert_filled(
        "profile",
        &[
            p.name,
            p.monogram,
            p.greeting,
            p.headline,
            p.summary,
            p.about_intro,
            p.footer_bio,
            p.email,
            p.phone,
            p.location,
            p.github_handle,
            p.linkedin_handle,
            p.portfolio_handle,
            p.institution,
        ],
    );
    for url in [p.github_url, p.linkedin_url, p.portfolio_url] {
        assert!(url.starts_with("https://"));
    }
}

#[test]
fn profile_tel_strips_separators() {
    assert_eq!(PROFILE.tel(), "tel:+919835180230");
    assert_eq!(PROFILE.mailto(), "mailto:saurabhccs10@gmail.com");
}

#[test]
fn contact_channels_agree_with_profile() {
    let hrefs: Vec<_> = CONTACT_CHANNELS.iter().map(|c| c.href).collect();
    assert!(hrefs.contains(&PROFILE.mailto().as_str()));
    assert!(hrefs.contains(&PROFILE.tel().as_str()));
    assert_eq!(EMAIL_HREF, PROFILE.mailto());
    let location = CONTACT_CHANNELS.iter().find(|c| c.label == "Location");
    assert_eq!(location.map(|c| c.href), Some(PLACEHOLDER_HREF));
}

#[test]
fn footer_facts_are_filled() {
    assert_eq!(FOOTER_FACTS.len(), 3);
    for fact in FOOTER_FACTS {
        assert_filled("footer fact", &[fact.label, fact.value]);
    }
}

// =============================================================
// Tables
// =============================================================

#[test]
fn skill_categories_are_filled_and_unique() {
    assert_eq!(SKILL_CATEGORIES.len(), 5);
    assert_unique("skill categories", SKILL_CATEGORIES.iter().map(|c| c.name));
    for category in SKILL_CATEGORIES {
        assert!(!category.skills.is_empty());
        assert_filled(category.name, category.skills);
        assert_unique(category.name, category.skills.iter().copied());
    }
}

#[test]
fn experiences_are_filled() {
    assert_eq!(EXPERIENCES.len(), 2);
    assert_unique("experience", EXPERIENCES.iter().map(|e| e.company));
    for e in EXPERIENCES {
        assert_filled("experience", &[e.company, e.role, e.period, e.work_mode]);
        assert_eq!(e.achievements.len(), 3);
        assert_filled(e.company, e.achievements);
    }
}

#[test]
fn education_detail_line_joins_period_and_score() {
    assert_eq!(EDUCATION.len(), 2);
    assert_eq!(EDUCATION[0].detail_line(), "2022 - 2026 • CGPA: 7.0");
    for e in EDUCATION {
        assert_filled("education", &[e.degree, e.institution, e.period, e.score]);
    }
}

#[test]
fn stats_tables_have_four_entries() {
    for table in [ABOUT_STATS, ACHIEVEMENT_STATS] {
        assert_eq!(table.len(), 4);
        assert_unique("stat labels", table.iter().map(|s| s.label));
        for stat in table {
            assert_filled("stat", &[stat.label, stat.value]);
        }
    }
}

#[test]
fn coding_profiles_link_out() {
    assert_eq!(CODING_PROFILES.len(), 2);
    for profile in CODING_PROFILES {
        assert_filled("coding profile", &[profile.platform, profile.summary]);
        assert_eq!(LinkKind::of(profile.url), LinkKind::External);
    }
}

#[test]
fn projects_are_filled_and_unique() {
    assert_unique("projects", PROJECTS.iter().map(|p| p.title));
    for p in PROJECTS {
        assert_filled("project", &[p.title, p.description, p.long_description]);
        assert_filled(p.title, p.tech);
        assert_filled(p.title, p.achievements);
        assert_valid_href(p.source_url);
        assert_valid_href(p.demo_url);
    }
}

#[test]
fn project_blurb_follows_featured_flag() {
    for p in PROJECTS {
        let expected = if p.featured { p.long_description } else { p.description };
        assert_eq!(p.blurb(), expected);
    }
}

#[test]
fn project_demo_only_when_real() {
    let with_demo: Vec<_> = PROJECTS.iter().filter(|p| p.has_demo()).map(|p| p.title).collect();
    assert_eq!(with_demo, ["Algo-Scheduler"]);
    let without_source: Vec<_> = PROJECTS.iter().filter(|p| !p.has_source()).map(|p| p.title).collect();
    assert_eq!(without_source, ["E-Commerce Platform"]);
}

#[test]
fn achievements_are_filled_and_unique() {
    assert_eq!(ACHIEVEMENTS.len(), 6);
    assert_unique("achievements", ACHIEVEMENTS.iter().map(|a| a.title));
    for a in ACHIEVEMENTS {
        assert_filled("achievement", &[a.title, a.description, a.category, a.rank, a.participants]);
        assert_valid_href(a.link);
    }
}

#[test]
fn achievement_certificate_hidden_for_placeholder() {
    let jee = ACHIEVEMENTS.iter().find(|a| a.title == "JEE Main 2022");
    assert_eq!(jee.map(|a| a.has_certificate()), Some(false));
    assert_eq!(ACHIEVEMENTS.iter().filter(|a| a.has_certificate()).count(), 5);
}

#[test]
fn contact_and_social_links_are_valid() {
    for c in CONTACT_CHANNELS {
        assert_filled("contact channel", &[c.label, c.value]);
        assert_valid_href(c.href);
    }
    for link in SOCIAL_LINKS.iter().chain(FOOTER_LINKS).chain(HERO_LINKS) {
        assert_filled("social link", &[link.label, link.handle]);
        assert_valid_href(link.href);
        assert!(!is_placeholder(link.href));
    }
    assert_unique("social links", SOCIAL_LINKS.iter().map(|l| l.label));
    assert_unique("footer links", FOOTER_LINKS.iter().map(|l| l.label));
    assert_unique("hero links", HERO_LINKS.iter().map(|l| l.label));
}

#[test]
fn project_serializes_category_tag() {
    let json = serde_json::to_value(PROJECTS[0]).unwrap_or_default();
    assert_eq!(json["category"], "algo");
    assert_eq!(json["featured"], true);
}

#[test]
fn project_category_tags_are_known() {
    for p in PROJECTS {
        assert_eq!(p.scene_category().tag(), p.category, "{} has an unknown tag", p.title);
    }
}

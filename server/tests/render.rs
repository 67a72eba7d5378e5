//! Server-side render of the whole page.

use client::content::achievements::ACHIEVEMENTS;
use client::content::experience::EXPERIENCES;
use client::content::profile::PROFILE;
use client::content::projects::PROJECTS;
use client::content::skills::SKILL_CATEGORIES;
use client::content::{NAV_SECTIONS, QUICK_LINK_SECTIONS};
use client::pages::home::HomePage;
use client::state::toast::ToastState;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

fn render_home() -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(ToastState::default()));
        view! { <HomePage/> }.to_html()
    })
}

fn escaped(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn assert_contains(html: &str, text: &str) {
    let needle = escaped(text);
    assert!(html.contains(&needle), "page is missing {needle:?}");
}

#[test]
fn renders_every_section_anchor() {
    let html = render_home();
    for section in NAV_SECTIONS {
        assert!(html.contains(&format!("id=\"{}\"", section.id())), "missing section {}", section.id());
        assert!(html.contains(&format!("href=\"{}\"", section.href())));
    }
    assert_eq!(QUICK_LINK_SECTIONS.len() + 1, NAV_SECTIONS.len());
}

#[test]
fn renders_profile_copy() {
    let html = render_home();
    assert_contains(&html, PROFILE.name);
    assert_contains(&html, PROFILE.summary);
}

#[test]
fn renders_content_tables() {
    let html = render_home();
    for project in PROJECTS {
        assert_contains(&html, project.title);
        assert_contains(&html, project.blurb());
    }
    for achievement in ACHIEVEMENTS {
        assert_contains(&html, achievement.title);
    }
    for experience in EXPERIENCES {
        assert_contains(&html, experience.company);
        assert_contains(&html, experience.role);
    }
    for category in SKILL_CATEGORIES {
        assert_contains(&html, category.name);
        for skill in category.skills {
            assert_contains(&html, skill);
        }
    }
}

#[test]
fn hides_placeholder_links() {
    let html = render_home();
    assert!(!html.contains("href=\"#\""), "placeholder href rendered");
    let demos = html.matches("Live Demo").count();
    assert_eq!(demos, PROJECTS.iter().filter(|p| p.has_demo()).count());
}

#[test]
fn external_links_open_in_new_tab() {
    let html = render_home();
    assert!(html.contains("rel=\"noopener noreferrer\""));
    assert!(html.contains("target=\"_blank\""));
}

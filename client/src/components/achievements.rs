//! `#achievements`: stats strip, award cards, coding profiles.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::link_out::LinkOut;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::components::stat_grid::StatGrid;
use crate::content::achievements::{ACHIEVEMENTS, Achievement};
use crate::content::stats::{ACHIEVEMENT_STATS, CODING_PROFILES};
use crate::content::{Accent, Section};
use crate::util::reveal::stagger;

#[component]
fn AchievementCard(achievement: Achievement, index: usize) -> impl IntoView {
    let accent = achievement.accent;
    view! {
        <Reveal delay_ms=stagger(0, 100, index) class="card award">
            <div class="award__header">
                <span class=accent.chip_class()>
                    <IconGlyph icon=achievement.icon/>
                </span>
                <span class="badge">{achievement.category}</span>
            </div>
            <h3 class="award__title">{achievement.title}</h3>
            <p class="muted">{achievement.description}</p>
            <div class="award__figures">
                <div class="award__figure">
                    <div class=format!("award__value {}", accent.text_class())>{achievement.rank}</div>
                    <div class="award__label">"Rank"</div>
                </div>
                <div class="award__figure">
                    <div class="award__value">{achievement.participants}</div>
                    <div class="award__label">"Participants"</div>
                </div>
            </div>
            <Show when=move || achievement.has_certificate()>
                <span class=accent.text_class()>
                    <LinkOut href=achievement.link class="award__link">
                        "View Certificate →"
                    </LinkOut>
                </span>
            </Show>
        </Reveal>
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section id=Section::Achievements.id() class="section section--achievements">
            <div class="container">
                <SectionHeading
                    lead="Awards &"
                    highlight="Achievements"
                    accent=Accent::Green
                    summary="Recognition for excellence in competitive programming, hackathons, and technical \
                             competitions."
                />

                <Reveal class="achievements__stats">
                    <StatGrid stats=ACHIEVEMENT_STATS class="stat-grid--wide"/>
                </Reveal>

                <div class="achievements__grid">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(index, achievement)| {
                            view! { <AchievementCard achievement=*achievement index=index/> }
                        })
                        .collect_view()}
                </div>

                <div class="profiles">
                    <h3 class="subsection-title subsection-title--center">"Coding Profiles"</h3>
                    <div class="profiles__grid">
                        {CODING_PROFILES
                            .iter()
                            .enumerate()
                            .map(|(index, profile)| {
                                view! {
                                    <Reveal delay_ms=stagger(0, 200, index) class="card profile-card">
                                        <span class=profile.accent.chip_class()>
                                            <IconGlyph icon=profile.icon/>
                                        </span>
                                        <h4 class="profile-card__platform">{profile.platform}</h4>
                                        <p class="muted">{profile.summary}</p>
                                        <LinkOut href=profile.url class="button button--outline">
                                            "Visit Profile →"
                                        </LinkOut>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

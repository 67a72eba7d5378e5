//! `#about`: education, competitive-programming stats, experience and skills.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::components::stat_grid::StatGrid;
use crate::content::education::EDUCATION;
use crate::content::experience::EXPERIENCES;
use crate::content::profile::PROFILE;
use crate::content::skills::SKILL_CATEGORIES;
use crate::content::stats::ABOUT_STATS;
use crate::content::{Accent, Icon, Section};
use crate::util::reveal::{Direction, stagger};

#[component]
fn CardHeader(icon: Icon, accent: Accent, title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="card__header">
            <span class=accent.chip_class()>
                <IconGlyph icon=icon/>
            </span>
            <div>
                <h3 class="card__title">{title}</h3>
                <p class="card__subtitle">{subtitle}</p>
            </div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section section--about">
            <div class="container">
                <SectionHeading lead="About" highlight="Me" accent=Accent::Purple summary=PROFILE.about_intro/>

                <div class="about__grid">
                    <Reveal direction=Direction::Left class="card">
                        <CardHeader
                            icon=Icon::Brain
                            accent=Accent::Purple
                            title="Education"
                            subtitle="Academic Background"
                        />
                        {EDUCATION
                            .iter()
                            .map(|entry| {
                                view! {
                                    <div class="education">
                                        <h4 class="education__degree">{entry.degree}</h4>
                                        <p class=entry.accent.text_class()>{entry.institution}</p>
                                        <p class="muted">{entry.detail_line()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Reveal>

                    <Reveal direction=Direction::Right class="card">
                        <CardHeader
                            icon=Icon::Trophy
                            accent=Accent::Cyan
                            title="Competitive Programming"
                            subtitle="Problem Solving Stats"
                        />
                        <StatGrid stats=ABOUT_STATS/>
                    </Reveal>
                </div>

                <div class="about__experience">
                    <h3 class="subsection-title">"Professional Experience"</h3>
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            view! {
                                <Reveal delay_ms=stagger(0, 200, i) class="card experience">
                                    <div class="experience__header">
                                        <span class=Accent::Blue.chip_class()>
                                            <IconGlyph icon=exp.icon/>
                                        </span>
                                        <div class="experience__title">
                                            <h4>{exp.role}</h4>
                                            <p class="text-accent-purple">{exp.company}</p>
                                        </div>
                                        <div class="experience__meta">
                                            <p>{exp.period}</p>
                                            <p class="muted">{exp.work_mode}</p>
                                        </div>
                                    </div>
                                    <ul class="bullets">
                                        {exp
                                            .achievements
                                            .iter()
                                            .map(|line| view! { <li>{*line}</li> })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="about__skills">
                    <h3 class="subsection-title subsection-title--center">"Technical Skills"</h3>
                    <div class="skills__grid">
                        {SKILL_CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(i, category)| {
                                view! {
                                    <Reveal delay_ms=stagger(0, 100, i) class="card skills__category">
                                        <h4 class="skills__name">{category.name}</h4>
                                        <div class="tags">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| view! { <span class="tag">{*skill}</span> })
                                                .collect_view()}
                                        </div>
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

//! `#projects`: project cards with their category scenes.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use scene::preset::SceneKind;

use crate::components::icon::IconGlyph;
use crate::components::link_out::LinkOut;
use crate::components::reveal::Reveal;
use crate::components::scene_host::SceneHost;
use crate::components::section_heading::SectionHeading;
use crate::content::profile::PROFILE;
use crate::content::projects::{PROJECTS, Project};
use crate::content::{Accent, Icon, Section};
use crate::util::reveal::{Direction, stagger};

/// Cards alternate which side the scene sits on.
#[must_use]
pub fn card_class(index: usize) -> &'static str {
    if index % 2 == 0 { "card project-card" } else { "card project-card project-card--reversed" }
}

/// Odd cards slide in from the right, even ones from the left.
#[must_use]
pub fn card_direction(index: usize) -> Direction {
    if index % 2 == 0 { Direction::Left } else { Direction::Right }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <Reveal direction=card_direction(index) delay_ms=stagger(0, 200, index) class=card_class(index)>
            <div class="project-card__scene">
                <SceneHost kind=SceneKind::Project(project.scene_category())/>
            </div>
            <div class="project-card__body">
                <div class="project-card__header">
                    <span class=Accent::Purple.chip_class()>
                        <IconGlyph icon=project.icon/>
                    </span>
                    <h3 class="project-card__title">{project.title}</h3>
                    <Show when=move || project.featured>
                        <span class="badge badge--featured">"Featured"</span>
                    </Show>
                </div>
                <p class="project-card__blurb">{project.blurb()}</p>

                <h4 class="text-accent-purple">"Key Achievements:"</h4>
                <ul class="bullets">
                    {project.achievements.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                </ul>

                <h4 class="text-accent-green">"Technologies Used:"</h4>
                <div class="tags">
                    {project.tech.iter().map(|tech| view! { <span class="tag">{*tech}</span> }).collect_view()}
                </div>

                <div class="project-card__actions">
                    <Show when=move || project.has_source()>
                        <LinkOut href=project.source_url class="button button--outline">
                            <IconGlyph icon=Icon::Github/>
                            "Source Code"
                        </LinkOut>
                    </Show>
                    <Show when=move || project.has_demo()>
                        <LinkOut href=project.demo_url class="button button--primary">
                            <IconGlyph icon=Icon::ExternalLink/>
                            "Live Demo"
                        </LinkOut>
                    </Show>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="section section--projects">
            <div class="container">
                <SectionHeading
                    lead="Featured"
                    highlight="Projects"
                    accent=Accent::Cyan
                    summary="A collection of projects showcasing my expertise in full-stack development, \
                             algorithm implementation, and system design."
                />

                <div class="projects__list">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=*project index=index/> })
                        .collect_view()}
                </div>

                <Reveal class="projects__more">
                    <p class="muted">"Interested in seeing more of my work?"</p>
                    <LinkOut href=PROFILE.github_url class="button button--outline">
                        <IconGlyph icon=Icon::Github/>
                        "View All Projects on GitHub"
                    </LinkOut>
                </Reveal>
            </div>
        </section>
    }
}

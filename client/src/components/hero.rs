use leptos::prelude::*;
use scene::preset::SceneKind;

use crate::components::icon::IconGlyph;
use crate::components::link_out::{AnchorLink, LinkOut};
use crate::components::reveal::Reveal;
use crate::components::scene_host::SceneHost;
use crate::content::contact::HERO_LINKS;
use crate::content::profile::PROFILE;
use crate::content::{Accent, Icon, Section};
use crate::util::reveal::Direction;

/// Full-height intro panel at `#home`.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="hero">
            <div class="hero__glow hero__glow--purple"></div>
            <div class="hero__glow hero__glow--cyan"></div>
            <div class="hero__glow hero__glow--blue"></div>

            <div class="container hero__grid">
                <div class="hero__copy">
                    <Reveal direction=Direction::Left class="hero__intro">
                        <p class="hero__greeting">{PROFILE.greeting}</p>
                        <h1 class="hero__name">{PROFILE.name}</h1>
                        <p class="hero__headline">{PROFILE.headline}</p>
                        <p class="hero__summary">{PROFILE.summary}</p>
                    </Reveal>

                    <Reveal delay_ms=600 class="hero__actions">
                        <AnchorLink href=Section::Projects.href() class="button button--primary">
                            <IconGlyph icon=Icon::ExternalLink/>
                            "View Projects"
                        </AnchorLink>
                        <AnchorLink href=Section::Contact.href() class="button button--outline">
                            <IconGlyph icon=Icon::Mail/>
                            "Contact Me"
                        </AnchorLink>
                    </Reveal>

                    <Reveal delay_ms=800 class="hero__social">
                        {HERO_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <LinkOut
                                        href=link.href
                                        class=round_link_class(link.accent)
                                        label=link.label
                                    >
                                        <IconGlyph icon=link.icon/>
                                    </LinkOut>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                </div>

                <Reveal direction=Direction::Right delay_ms=300 class="hero__scene">
                    <SceneHost kind=SceneKind::Hero caption=PROFILE.monogram/>
                </Reveal>
            </div>

            <div class="hero__scroll">
                <div class="hero__scroll-track">
                    <div class="hero__scroll-dot"></div>
                </div>
                <p>"Scroll to explore"</p>
            </div>
        </section>
    }
}

fn round_link_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Purple => "round-link round-link--purple",
        Accent::Cyan => "round-link round-link--cyan",
        Accent::Blue => "round-link round-link--blue",
        Accent::Green => "round-link round-link--green",
    }
}

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::link_out::{AnchorLink, LinkOut};
use crate::content::contact::FOOTER_LINKS;
use crate::content::profile::{BUILT_WITH, FOOTER_FACTS, PROFILE};
use crate::content::{Icon, QUICK_LINK_SECTIONS};
use crate::util::year::{copyright_line, current_year};

/// Page footer: bio, quick links, connect links and the copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(current_year(), PROFILE.name);

    view! {
        <footer class="site-footer">
            <div class="container site-footer__grid">
                <div class="site-footer__about">
                    <h3 class="site-footer__brand">{PROFILE.name}</h3>
                    <p class="muted">{PROFILE.footer_bio}</p>
                    <div class="site-footer__facts">
                        {FOOTER_FACTS
                            .iter()
                            .map(|fact| {
                                view! {
                                    <p>
                                        <span class="site-footer__fact-label">{fact.label} ":"</span>
                                        " "
                                        {fact.value}
                                    </p>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="site-footer__links">
                    <h4>"Quick Links"</h4>
                    {QUICK_LINK_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <AnchorLink href=section.href() class="site-footer__link">
                                    {section.label()}
                                </AnchorLink>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="site-footer__links">
                    <h4>"Connect"</h4>
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <LinkOut href=link.href class="site-footer__link">
                                    <IconGlyph icon=link.icon/>
                                    <span>{link.label}</span>
                                </LinkOut>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="container site-footer__bottom">
                <p class="site-footer__copyright">
                    {copyright}
                    " "
                    <IconGlyph icon=Icon::Heart class="site-footer__heart"/>
                    " "
                    {BUILT_WITH}
                </p>
                <LinkOut href=PROFILE.github_url class="site-footer__link">
                    <IconGlyph icon=Icon::ExternalLink/>
                    "Open Source on GitHub"
                </LinkOut>
            </div>
        </footer>
    }
}

//! Static portfolio content.
//!
//! DESIGN
//! ======
//! Every table here is a `'static` literal: the page renders them in order and
//! nothing mutates them. Presentation choices (accent colour, icon glyph,
//! scene category) travel with the record so components stay generic.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod achievements;
pub mod contact;
pub mod education;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod stats;

use serde::Serialize;

/// Href used by the content tables for "no real target yet".
pub const PLACEHOLDER_HREF: &str = "#";

/// Theme accent used for card highlights and icon chips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Purple,
    Cyan,
    Blue,
    Green,
}

impl Accent {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Text colour class, e.g. `text-accent-cyan`.
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Purple => "text-accent-purple",
            Self::Cyan => "text-accent-cyan",
            Self::Blue => "text-accent-blue",
            Self::Green => "text-accent-green",
        }
    }

    /// Tinted chip background class, e.g. `chip-accent-cyan`.
    #[must_use]
    pub fn chip_class(self) -> &'static str {
        match self {
            Self::Purple => "chip chip-accent-purple",
            Self::Cyan => "chip chip-accent-cyan",
            Self::Blue => "chip chip-accent-blue",
            Self::Green => "chip chip-accent-green",
        }
    }
}

/// Icon glyphs used across the page. Rendered by `components::icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Award,
    Brain,
    Close,
    Code,
    Code2,
    Cpu,
    ExternalLink,
    Github,
    GraduationCap,
    Heart,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Phone,
    Send,
    Star,
    Target,
    Trophy,
    Users,
    Video,
}

/// Page sections, in document order. Each owns one anchor id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Achievements,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::Home, Self::About, Self::Projects, Self::Achievements, Self::Contact];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Projects => "#projects",
            Self::Achievements => "#achievements",
            Self::Contact => "#contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Contact => "Contact",
        }
    }
}

/// Sections listed in the navigation bar.
pub const NAV_SECTIONS: &[Section] = &Section::ALL;

/// Sections listed under the footer's "Quick Links".
pub const QUICK_LINK_SECTIONS: &[Section] =
    &[Section::About, Section::Projects, Section::Achievements, Section::Contact];

/// How a link should be opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// `#`: no target; not rendered as a link.
    Placeholder,
    /// `#id`: in-page anchor.
    Anchor,
    /// `mailto:` / `tel:`: handed to the OS.
    Handler,
    /// `http(s)://`: opened in a new tab.
    External,
}

impl LinkKind {
    #[must_use]
    pub fn of(href: &str) -> Self {
        if href == PLACEHOLDER_HREF || href.is_empty() {
            Self::Placeholder
        } else if href.starts_with('#') {
            Self::Anchor
        } else if href.starts_with("mailto:") || href.starts_with("tel:") {
            Self::Handler
        } else {
            Self::External
        }
    }
}

/// True when `href` is the "no real target" placeholder.
#[must_use]
pub fn is_placeholder(href: &str) -> bool {
    LinkKind::of(href) == LinkKind::Placeholder
}

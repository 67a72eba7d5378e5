//! Contact channels and social links.
//!
//! Hrefs that depend on the profile (`mailto:`/`tel:`) are spelled out here so
//! the tables stay `const`; tests check they agree with [`super::profile::PROFILE`].

use serde::Serialize;

use super::{Accent, Icon};

/// `mailto:` href for the author's address.
pub const EMAIL_HREF: &str = "mailto:saurabhccs10@gmail.com";

/// A way to reach the author directly (email, phone, location).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub accent: Accent,
    #[serde(skip)]
    pub icon: Icon,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "saurabhccs10@gmail.com",
        href: EMAIL_HREF,
        accent: Accent::Cyan,
        icon: Icon::Mail,
    },
    ContactChannel {
        label: "Phone",
        value: "+91-9835180230",
        href: "tel:+919835180230",
        accent: Accent::Green,
        icon: Icon::Phone,
    },
    ContactChannel {
        label: "Location",
        value: "NIT Agartala, Tripura, India",
        href: "#",
        accent: Accent::Blue,
        icon: Icon::MapPin,
    },
];

/// A profile on another site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
    pub accent: Accent,
    #[serde(skip)]
    pub icon: Icon,
}

/// "Connect with me" cards in the Contact section.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        handle: "saurabh2226",
        href: "https://github.com/saurabh2226",
        accent: Accent::Purple,
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        handle: "saurabh-kumar-3ab422255",
        href: "https://www.linkedin.com/in/saurabh-kumar-3ab422255",
        accent: Accent::Blue,
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Portfolio",
        handle: "saurabhportfolio-pi.vercel.app",
        href: "https://saurabhportfolio-pi.vercel.app/",
        accent: Accent::Cyan,
        icon: Icon::ExternalLink,
    },
];

/// "Connect" column in the footer.
pub const FOOTER_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        handle: "saurabh2226",
        href: "https://github.com/saurabh2226",
        accent: Accent::Purple,
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        handle: "saurabh-kumar-3ab422255",
        href: "https://www.linkedin.com/in/saurabh-kumar-3ab422255",
        accent: Accent::Blue,
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Email",
        handle: "saurabhccs10@gmail.com",
        href: EMAIL_HREF,
        accent: Accent::Cyan,
        icon: Icon::Mail,
    },
    SocialLink {
        label: "Portfolio",
        handle: "saurabhportfolio-pi.vercel.app",
        href: "https://saurabhportfolio-pi.vercel.app/",
        accent: Accent::Green,
        icon: Icon::ExternalLink,
    },
];

/// Round icon buttons under the hero copy.
pub const HERO_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        handle: "saurabh2226",
        href: "https://github.com/saurabh2226",
        accent: Accent::Purple,
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        handle: "saurabh-kumar-3ab422255",
        href: "https://www.linkedin.com/in/saurabh-kumar-3ab422255",
        accent: Accent::Blue,
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Email",
        handle: "saurabhccs10@gmail.com",
        href: EMAIL_HREF,
        accent: Accent::Cyan,
        icon: Icon::Mail,
    },
];

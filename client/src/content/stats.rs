//! Competitive-programming numbers and coding-profile cards.

use serde::Serialize;

use super::{Accent, Icon};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub accent: Accent,
}

/// "Problem Solving Stats" card in the About section.
pub const ABOUT_STATS: &[Stat] = &[
    Stat { label: "LeetCode Max Rating", value: "1823", accent: Accent::Purple },
    Stat { label: "Problems Solved", value: "500+", accent: Accent::Cyan },
    Stat { label: "Codeforces Rating", value: "1500+", accent: Accent::Blue },
    Stat { label: "CP Problems", value: "450+", accent: Accent::Green },
];

/// Overview strip at the top of the Achievements section.
pub const ACHIEVEMENT_STATS: &[Stat] = &[
    Stat { label: "LeetCode Max Rating", value: "1823", accent: Accent::Purple },
    Stat { label: "Problems Solved", value: "500+", accent: Accent::Cyan },
    Stat { label: "Codeforces Rating", value: "1500+", accent: Accent::Blue },
    Stat { label: "Contest Participations", value: "50+", accent: Accent::Green },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CodingProfile {
    pub platform: &'static str,
    pub summary: &'static str,
    pub url: &'static str,
    pub accent: Accent,
    #[serde(skip)]
    pub icon: Icon,
}

pub const CODING_PROFILES: &[CodingProfile] = &[
    CodingProfile {
        platform: "LeetCode",
        summary: "Max Rating: 1823 • 500+ Problems Solved",
        url: "https://leetcode.com/u/saurabh0202/",
        accent: Accent::Purple,
        icon: Icon::Code2,
    },
    CodingProfile {
        platform: "Codeforces",
        summary: "Max Rating: 1500+ • 450+ Problems Solved",
        url: "https://codeforces.com/profile/saurabh_codes",
        accent: Accent::Blue,
        icon: Icon::Trophy,
    },
];

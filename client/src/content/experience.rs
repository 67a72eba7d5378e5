use serde::Serialize;

use super::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub work_mode: &'static str,
    pub achievements: &'static [&'static str],
    #[serde(skip)]
    pub icon: Icon,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Newton School",
        role: "Technical Intern",
        period: "May 2025 - July 2025",
        work_mode: "Remote",
        achievements: &[
            "Instructed 100+ junior students in DSA (C++) and web development",
            "30% average improvement in coding assessment scores",
            "Conducted 25+ live sessions and technical doubt-solving hours",
        ],
        icon: Icon::Users,
    },
    Experience {
        company: "WeekendSync",
        role: "Full Stack Developer Intern",
        period: "Nov 2024 - Jan 2025",
        work_mode: "Remote",
        achievements: &[
            "Engineered end-to-end features in modular monorepo architecture",
            "Boosted internal productivity tooling speed by 30%",
            "Reduced API response times by 45% with Redis caching",
        ],
        icon: Icon::Code,
    },
];

use serde::Serialize;

use super::Accent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub score: &'static str,
    pub accent: Accent,
}

impl Education {
    /// "2022 - 2026 • CGPA: 7.0"
    #[must_use]
    pub fn detail_line(&self) -> String {
        format!("{} • {}", self.period, self.score)
    }
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Tech Electronics & Instrumentation",
        institution: "National Institute of Technology, Agartala",
        period: "2022 - 2026",
        score: "CGPA: 7.0",
        accent: Accent::Purple,
    },
    Education {
        degree: "Senior Secondary (XII)",
        institution: "JD Public School, Chapra",
        period: "2019 - 2021",
        score: "76%",
        accent: Accent::Blue,
    },
];

use serde::Serialize;

use super::{Accent, Icon, is_placeholder};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub rank: &'static str,
    pub participants: &'static str,
    pub link: &'static str,
    pub accent: Accent,
    #[serde(skip)]
    pub icon: Icon,
}

impl Achievement {
    #[must_use]
    pub fn has_certificate(&self) -> bool {
        !is_placeholder(self.link)
    }
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Meta Hacker Cup 2024",
        description: "Global Rank 2827 out of 22K+ participants in Round 1",
        category: "Competition",
        rank: "#2827",
        participants: "22K+",
        link: "https://drive.google.com/file/d/1U793Yd3V-FEAyL_rIurxNdzYUe-YdjIF/view?usp=sharing",
        accent: Accent::Cyan,
        icon: Icon::Trophy,
    },
    Achievement {
        title: "Flipkart Grid 6.0",
        description: "Qualified for Level 3 of Software Development Track",
        category: "Hackathon",
        rank: "Level 3",
        participants: "10K+",
        link: "https://drive.google.com/file/d/1yeo53W5Jfu8a22xutdbmLLi17LkuFE93/view?usp=sharing",
        accent: Accent::Blue,
        icon: Icon::Code2,
    },
    Achievement {
        title: "TATA ElXSI GenAI Hackathon",
        description: "Achieved 3rd Rank in GenAI Hackathon 2024",
        category: "Hackathon",
        rank: "3rd Place",
        participants: "5K+",
        link: "https://drive.google.com/file/d/1NvWeQSCwr1wNZlNT0A5DVuNkiBklfm1K/view?usp=sharing",
        accent: Accent::Green,
        icon: Icon::Award,
    },
    Achievement {
        title: "Smart India Hackathon 2023",
        description: "Finalists among 100+ teams at NIT Agartala",
        category: "Hackathon",
        rank: "Finalist",
        participants: "100+",
        link: "https://drive.google.com/file/d/1igkeagj0EAfq54_jahDAH5iGRccxjGPB/view?usp=sharing",
        accent: Accent::Purple,
        icon: Icon::Users,
    },
    Achievement {
        title: "Newton School Coderush",
        description: "AIR 274 in Newton School Coderush November 2023",
        category: "Competition",
        rank: "AIR 274",
        participants: "1K+",
        link: "https://drive.google.com/file/d/1OIELNMEE8cklQIYRlqVuQg5edijEzpat/view?usp=sharing",
        accent: Accent::Cyan,
        icon: Icon::Target,
    },
    Achievement {
        title: "JEE Main 2022",
        description: "Ranked among top 5 percentile students",
        category: "Academic",
        rank: "Top 5%",
        participants: "1.1M+",
        link: "#",
        accent: Accent::Green,
        icon: Icon::Star,
    },
];

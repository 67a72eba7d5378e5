//! Who the page is about, plus the links repeated across sections.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    /// Short uppercase form used as the hero scene caption.
    pub monogram: &'static str,
    pub greeting: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub about_intro: &'static str,
    pub footer_bio: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github_url: &'static str,
    pub github_handle: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_handle: &'static str,
    pub portfolio_url: &'static str,
    pub portfolio_handle: &'static str,
    pub institution: &'static str,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` href with spaces and dashes stripped from the display number.
    #[must_use]
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

pub const PROFILE: Profile = Profile {
    name: "Saurabh Kumar",
    monogram: "SAURABH",
    greeting: "Hello, I'm",
    headline: "Full Stack Developer & Problem Solver",
    summary: "Electronics Engineering student at NIT Agartala with expertise in React, Node.js, and competitive \
              programming. Passionate about creating scalable web applications and solving complex algorithmic \
              challenges.",
    about_intro: "I'm a passionate Electronics Engineering student at NIT Agartala with a strong foundation in \
                  full-stack development and competitive programming. I love building scalable solutions and \
                  tackling complex algorithmic challenges.",
    footer_bio: "Full Stack Developer and competitive programmer passionate about building scalable web \
                 applications and solving complex algorithmic challenges.",
    email: "saurabhccs10@gmail.com",
    phone: "+91-9835180230",
    location: "NIT Agartala, Tripura, India",
    github_url: "https://github.com/saurabh2226",
    github_handle: "saurabh2226",
    linkedin_url: "https://www.linkedin.com/in/saurabh-kumar-3ab422255",
    linkedin_handle: "saurabh-kumar-3ab422255",
    portfolio_url: "https://saurabhportfolio-pi.vercel.app/",
    portfolio_handle: "saurabhportfolio-pi.vercel.app",
    institution: "National Institute of Technology, Agartala",
};

/// Label/value pair shown under the footer bio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

pub const FOOTER_FACTS: &[Fact] = &[
    Fact { label: "Current", value: "B.Tech Electronics & Instrumentation Engineering" },
    Fact { label: "Institution", value: "NIT Agartala" },
    Fact { label: "LeetCode", value: "Max Rating 1823 • 500+ Problems" },
];

/// Footer tagline naming the stack the page was built with.
pub const BUILT_WITH: &str = "using Rust, Leptos & WebAssembly";

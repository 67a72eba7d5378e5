use scene::preset::ProjectCategory;
use serde::Serialize;

use super::{Icon, is_placeholder};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub source_url: &'static str,
    pub demo_url: &'static str,
    /// Scene category tag: `algo`, `video` or `general`.
    pub category: &'static str,
    pub featured: bool,
    #[serde(skip)]
    pub icon: Icon,
}

impl Project {
    /// Featured cards show the long description, the rest the short one.
    #[must_use]
    pub fn blurb(&self) -> &'static str {
        if self.featured { self.long_description } else { self.description }
    }

    /// Scene category; unknown tags fall back to `General`.
    #[must_use]
    pub fn scene_category(&self) -> ProjectCategory {
        ProjectCategory::from_tag(self.category)
    }

    #[must_use]
    pub fn has_source(&self) -> bool {
        !is_placeholder(self.source_url)
    }

    #[must_use]
    pub fn has_demo(&self) -> bool {
        !is_placeholder(self.demo_url)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Algo-Scheduler",
        description: "Advanced CPU scheduling algorithms implementation in C++ to optimize resource allocation and \
                      system performance.",
        long_description: "Comprehensive implementation of various CPU scheduling algorithms including FCFS, Round \
                           Robin, and Priority scheduling. The project demonstrates deep understanding of operating \
                           system concepts and optimization techniques.",
        tech: &["C++", "Scheduling Algorithms", "Data Structures", "Priority Queues", "Makefile"],
        achievements: &[
            "Improved efficiency by 15%",
            "Reduced average wait time by 10%",
            "Implemented multiple scheduling algorithms",
        ],
        source_url: "https://github.com/saurabh2226/Scheduling-Algorithm",
        demo_url: "https://youtu.be/gOwIlG28B1Y?si=2umzWgx_F5TiMKdY",
        category: "algo",
        featured: true,
        icon: Icon::Cpu,
    },
    Project {
        title: "Video Conferencing Platform",
        description: "Real-time video conferencing application with advanced features like screen sharing and secure \
                      authentication.",
        long_description: "Full-featured video conferencing platform built with Next.js, supporting 100+ concurrent \
                           users with real-time chat, screen sharing, and secure JWT authentication.",
        tech: &["Next.js", "TypeScript", "Clerk", "MongoDB", "Tailwind CSS", "WebRTC"],
        achievements: &[
            "Supports 100+ secure video calls",
            "Real-time chat and screen sharing",
            "JWT-based authentication for 500+ users",
        ],
        source_url: "https://github.com/saurabh2226/Video-Conferencing-Website",
        demo_url: "#",
        category: "video",
        featured: true,
        icon: Icon::Video,
    },
    Project {
        title: "E-Commerce Platform",
        description: "Modern e-commerce solution with cart management, payment integration, and admin dashboard.",
        long_description: "Comprehensive e-commerce platform featuring user authentication, product management, \
                           shopping cart, payment processing, and administrative controls.",
        tech: &["React.js", "Node.js", "Express.js", "MongoDB", "Redux", "Stripe API"],
        achievements: &[
            "Complete shopping cart functionality",
            "Secure payment integration",
            "Admin dashboard for inventory management",
        ],
        source_url: "#",
        demo_url: "#",
        category: "general",
        featured: false,
        icon: Icon::Code,
    },
];

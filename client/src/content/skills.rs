use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        skills: &["C", "C++", "Python", "JavaScript", "TypeScript", "SQL"],
    },
    SkillCategory {
        name: "Frameworks & Libraries",
        skills: &["React.js", "Node.js", "Express.js", "Next.js", "Redux", "Tailwind CSS"],
    },
    SkillCategory {
        name: "Backend & Databases",
        skills: &["RESTful APIs", "JWT Authentication", "MongoDB", "MySQL", "Socket.IO", "Firebase"],
    },
    SkillCategory {
        name: "CS Fundamentals",
        skills: &["DSA", "OOPs", "Operating Systems", "DBMS", "Computer Networks"],
    },
    SkillCategory {
        name: "Dev Tools",
        skills: &["Git", "GitHub", "VS Code", "Linux", "Docker", "Netlify", "Vercel", "Render"],
    },
];

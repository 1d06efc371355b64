//! Compiled-in page content.
//!
//! Every record here is a `'static` constant. Components iterate these tables
//! in their stored order; nothing is sorted, filtered or mutated at render time.

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Icons drawn next to section sub-headings and links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Close,
    Cpu,
    Database,
    ExternalLink,
    Github,
    Linkedin,
    Mail,
    Menu,
    Server,
    Terminal,
}

#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub status: &'static str,
    pub location: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Van Rezky Nababan",
    title: "Backend Engineer",
    tagline: "Specializing in scalable backend architectures (.NET CQRS, Laravel) and responsive frontend interfaces (Vue.js). Passionate about building high-performance applications for the healthcare, travel, and EdTech sectors.",
    email: "vanrezkysadewa77@gmail.com",
    github_url: "http://github.com/vanrezky/",
    linkedin_url: "https://www.linkedin.com/in/vanrezky/",
    status: "Active / Opsigo Asia",
    location: "Pekanbaru, ID",
};

/// A run of biography text. Metrics are rendered as highlighted inline chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Plain(&'static str),
    Metric(&'static str),
}

pub static BIOGRAPHY: [&[Span]; 2] = [
    &[
        Span::Plain("I am a dedicated Software Engineer with a proven track record of modernizing and optimizing complex systems. My journey includes spearheading the transition of legacy EdTech platforms at Garuda Cyber, achieving a "),
        Span::Metric("70% performance boost"),
        Span::Plain("."),
    ],
    &[
        Span::Plain("Currently, at Opsigo Asia, I focus on optimizing large-scale B2C travel and healthcare platforms, successfully reducing critical load times from "),
        Span::Metric("60s to 1-3s"),
        Span::Plain(". Beyond coding, I am passionate about leadership and have spent 2 years mentoring tech interns, fostering the next generation of developers."),
    ],
];

#[derive(Debug)]
pub struct StackEntry {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct StackCategory {
    pub heading: &'static str,
    pub icon: Icon,
    pub entries: &'static [StackEntry],
}

pub static STACK: [StackCategory; 2] = [
    StackCategory {
        heading: "BACKEND_INFRASTRUCTURE",
        icon: Icon::Server,
        entries: &[
            StackEntry {
                name: ".NET (CQRS, MediatR)",
                description: "High-performance enterprise architecture",
            },
            StackEntry {
                name: "Laravel & CodeIgniter",
                description: "Rapid API development & monolithic systems",
            },
            StackEntry {
                name: "RabbitMQ",
                description: "Asynchronous message queuing",
            },
        ],
    },
    StackCategory {
        heading: "DATA_&_STORAGE",
        icon: Icon::Database,
        entries: &[
            StackEntry {
                name: "PostgreSQL & MySQL",
                description: "Relational data modeling & optimization",
            },
            StackEntry {
                name: "Redis",
                description: "In-memory caching & session management",
            },
            StackEntry {
                name: "AWS S3",
                description: "Scalable object storage",
            },
        ],
    },
];

#[derive(Debug)]
pub struct ToolList {
    pub heading: &'static str,
    pub icon: Icon,
    pub items: &'static [&'static str],
}

pub static TOOLS: [ToolList; 2] = [
    ToolList {
        heading: "WORKSPACE",
        icon: Icon::Terminal,
        items: &["MacBook M1 Pro 14\"", "1x External Monitor"],
    },
    ToolList {
        heading: "TOOLING",
        icon: Icon::Cpu,
        items: &[
            "Visual Studio Code / JetBrains Rider",
            "TablePlus / DBeaver",
            "iTerm",
        ],
    },
];

#[derive(Debug)]
pub struct ExperienceRecord {
    pub organization: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

/// Most recent first.
pub static EXPERIENCE: [ExperienceRecord; 2] = [
    ExperienceRecord {
        organization: "Opsigo Asia (PT Teknologia Digital Kreasi)",
        role: "Software Engineer",
        period: "Present",
        highlights: &[
            "Engineered .NET/Laravel backend systems.",
            "Optimized load times drastically from 60s to 1s.",
            "Integrated Zoho Sign, Maps API, and Espay (zero-redirect virtual accounts).",
            "Managed RabbitMQ queues for asynchronous processing.",
        ],
    },
    ExperienceRecord {
        organization: "Garuda Cyber Indonesia",
        role: "Fullstack Developer",
        period: "Previous",
        highlights: &[
            "Spearheaded SaaS academic platform 'MiniPack Smart Campus' replacing legacy systems, achieving a 70% performance boost.",
            "Integrated Ministry of Education's Feeder system.",
            "Implemented dynamic Role-Based Access Control (RBAC).",
            "Mentored tech interns for 2 years, guiding them in modern development practices.",
        ],
    },
];

#[derive(Debug)]
pub struct ProjectCaseStudy {
    pub title: &'static str,
    pub domain: &'static str,
    pub problem_statement: &'static str,
    pub architecture_summary: &'static str,
    pub key_decisions: &'static str,
    pub tags: &'static [&'static str],
    pub external_link: Option<&'static str>,
}

pub static PROJECTS: [ProjectCaseStudy; 4] = [
    ProjectCaseStudy {
        title: "Filld.com.au",
        domain: "Healthcare",
        problem_statement: "Healthcare platform requiring robust document automation, mapping, and high-performance data retrieval.",
        architecture_summary: ".NET CQRS MediatR architecture with RabbitMQ for async tasks and PostgreSQL for data persistence.",
        key_decisions: "Implemented CQRS to separate read/write operations, drastically reducing system load times and improving scalability.",
        tags: &[".NET", "CQRS", "RabbitMQ", "PostgreSQL", "Zoho Sign"],
        external_link: Some("https://filld.com.au"),
    },
    ProjectCaseStudy {
        title: "CityTours B2C",
        domain: "Travel",
        problem_statement: "Large-scale travel booking platform needing a seamless, high-conversion checkout experience without redirects.",
        architecture_summary: "Laravel monolithic backend with MySQL. Integrated Espay Gateway for payment processing.",
        key_decisions: "Engineered zero-redirect virtual accounts via Espay, keeping users within the platform to reduce drop-off rates.",
        tags: &["Laravel", "MySQL", "Espay Gateway", "Payment Integration"],
        external_link: Some("https://citytours.sg"),
    },
    ProjectCaseStudy {
        title: "Arrangge",
        domain: "Advanced Booking",
        problem_statement: "Complex multi-booking requirements (flights, eSIM, insurance) needing a unified engine and AI integration.",
        architecture_summary: "Robust Laravel backend serving a responsive Vue.js admin dashboard.",
        key_decisions: "Centralized booking logic to handle disparate external APIs, ensuring transactional integrity across multiple services.",
        tags: &["Laravel", "Vue.js", "AI Integration", "Multi-booking"],
        external_link: Some("https://arr-stag.idteknologia.net"),
    },
    ProjectCaseStudy {
        title: "MiniPack Smart Campus",
        domain: "EdTech SaaS",
        problem_statement: "Legacy academic systems suffering from poor performance and lack of integration with national databases.",
        architecture_summary: "Fullstack SaaS platform with dynamic Role-Based Access Control (RBAC).",
        key_decisions: "Re-architected the core system, achieving a 70% performance boost. Built automated sync with the Ministry of Education's Feeder system.",
        tags: &["Fullstack", "SaaS", "RBAC", "API Integration"],
        external_link: Some("https://smartminipack.garudacyber.co.id"),
    },
];

#[derive(Debug)]
pub struct ContactLink {
    pub label: &'static str,
    pub icon: Icon,
    pub href: String,
    pub external: bool,
}

pub fn contact_links() -> [ContactLink; 3] {
    [
        ContactLink {
            label: "GITHUB",
            icon: Icon::Github,
            href: PROFILE.github_url.to_string(),
            external: true,
        },
        ContactLink {
            label: "LINKEDIN",
            icon: Icon::Linkedin,
            href: PROFILE.linkedin_url.to_string(),
            external: true,
        },
        ContactLink {
            label: "EMAIL",
            icon: Icon::Mail,
            href: PROFILE.mailto(),
            external: false,
        },
    ]
}

pub fn footer_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}

/// Year shown in the footer, read from the local clock on every call.
pub fn current_year() -> i32 {
    footer_year(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_experience_order_as_authored() {
        assert_eq!(EXPERIENCE.len(), 2);
        assert_eq!(EXPERIENCE[0].period, "Present");
        assert_eq!(EXPERIENCE[1].organization, "Garuda Cyber Indonesia");
        assert!(EXPERIENCE.iter().all(|r| r.highlights.len() == 4));
    }

    #[test]
    fn test_project_links() {
        let links = PROJECTS
            .iter()
            .filter_map(|p| p.external_link)
            .collect::<Vec<_>>();
        assert_eq!(
            links,
            vec![
                "https://filld.com.au",
                "https://citytours.sg",
                "https://arr-stag.idteknologia.net",
                "https://smartminipack.garudacyber.co.id",
            ]
        );
    }

    #[test]
    fn test_contact_links() {
        let links = contact_links();
        assert_eq!(links[0].href, "http://github.com/vanrezky/");
        assert_eq!(links[1].href, "https://www.linkedin.com/in/vanrezky/");
        assert_eq!(links[2].href, "mailto:vanrezkysadewa77@gmail.com");
        assert!(!links[2].external);
    }

    #[test]
    fn test_footer_year_follows_clock() {
        let before = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(footer_year(&before), 2025);
        assert_eq!(footer_year(&after), 2026);
    }

    #[test]
    fn test_current_year_matches_local_clock() {
        let year = current_year();
        let now = Local::now().year();
        // tolerate a year boundary between the two reads
        assert!(year == now || year + 1 == now);
    }
}

//! Static profile records: competencies, career timeline, skills, and projects
//!
//! These are constant for the life of the process and rendered by the
//! generic page templates.

use serde::Serialize;

/// One of the four core competencies on the identity page
#[derive(Debug, Clone, Serialize)]
pub struct Pillar {
    pub number: &'static str,
    pub title: &'static str,
    /// HTML fragment
    pub content: &'static str,
}

/// One role on the experience timeline
#[derive(Debug, Clone, Serialize)]
pub struct TimelineItem {
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub impact_label: &'static str,
    pub impact: &'static str,
}

/// A titled group of skills on the experience page
#[derive(Debug, Clone, Serialize)]
pub struct SkillCard {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub detail: &'static str,
}

/// A project case study
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub tech_stack: &'static [&'static str],
    pub impact: &'static [Metric],
}

/// A headline number and what it measures
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PILLARS: &[Pillar] = &[
    Pillar {
        number: "Pillar 01",
        title: "Strategic Systems Consulting",
        content: "Managing high-revenue vendors by translating complex business requirements into technical reality. \
                  Specialized in scalability and multi-million Euro ecosystems where precision and reliability are non-negotiable.",
    },
    Pillar {
        number: "Pillar 02",
        title: "Proven AI Impact",
        content: "Tangible results: <strong>Automated 30% of B2B support tickets</strong> (~400/month) and \
                  <strong>reduced manual onboarding workload by 80%</strong> through targeted AI integration \
                  and custom automation frameworks.",
    },
    Pillar {
        number: "Pillar 03",
        title: "Human-AI Symbiosis",
        content: "Exploring the duality of AI, balancing deep technical execution with the philosophical impact of \
                  Human Amplification. Designing systems that enhance rather than replace human capability.",
    },
    Pillar {
        number: "Pillar 04",
        title: "AI-First Transformation",
        content: "Authoring strategic frameworks (like the 'AI-First Company' paper) to transition organizations \
                  into AI-native environments. Designing transformation roadmaps that balance innovation with operational stability.",
    },
];

pub const HUMAN_PERSPECTIVE: &[&str] = &[
    "In an era of rapid automation, my work is driven by the conviction that AI should \
     <strong>amplify human potential</strong>, not replace it. I analyze both the immense positive \
     potential and the ethical, philosophical challenges of AI to help businesses navigate this \
     revolution with a balanced, long-term vision.",
    "The question isn't whether to adopt AI; it's how to integrate it in ways that preserve what makes \
     us uniquely human: creativity, empathy, and strategic thinking. Technology should serve humanity, \
     not the other way around.",
];

pub const TIMELINE: &[TimelineItem] = &[
    TimelineItem {
        period: "July 2024 – Present",
        title: "Technical Consultant",
        company: "Digistore24 GmbH",
        description: "Managing strategic technical consulting for high-revenue vendor relationships in a multi-million Euro ecosystem. \
                      Translating complex business requirements into scalable technical solutions.",
        impact_label: "Key Impact",
        impact: "Authored the internal 'AI-First Company' strategic paper, defining organizational \
                 transformation frameworks. Contributed to AI-powered onboarding system, reducing manual workload by 80% through \
                 custom AI test cases and intelligent automation.",
    },
    TimelineItem {
        period: "July 2020 – December 2024",
        title: "Software & Systems Architect",
        company: "Independent / Freelance",
        description: "Developing bespoke automation systems and custom software architectures for private clients. \
                      Specializing in transforming complex business ideas into production-ready digital products. \
                      Full ownership of architecture, implementation, and deployment.",
        impact_label: "Focus Areas",
        impact: "Custom automation frameworks, AI integration, system architecture design, \
                 and strategic technical consulting for transformation projects.",
    },
    TimelineItem {
        period: "July 2021 – June 2024",
        title: "Web Developer",
        company: "fuxteufelsweb GmbH & Co. KG",
        description: "Custom software architecture and specialized business solutions beyond standard frameworks. \
                      Designed and implemented tailored systems for clients requiring bespoke technical approaches.",
        impact_label: "Expertise",
        impact: "Custom CMS development, API design, complex data workflows, \
                 and integration of third-party systems into cohesive business platforms.",
    },
    TimelineItem {
        period: "March 2020 – June 2021",
        title: "Full-Stack Developer",
        company: "day4 solutions GmbH",
        description: "Full-stack development with Angular and Node.js. Engineered robust, scalable web applications \
                      with focus on clean architecture and maintainable code.",
        impact_label: "DevOps",
        impact: "Designed and implemented automated CI/CD pipelines using Jenkins and GitLab \
                 for high-availability production environments. Reduced deployment time by 60% and improved system reliability.",
    },
];

pub const SKILL_CARDS: &[SkillCard] = &[
    SkillCard {
        title: "AI Strategy & Quality Assurance",
        skills: &[
            Skill {
                name: "Advanced Prompt Engineering",
                detail: "Designing high-precision prompts for complex business logic and multi-step reasoning tasks.",
            },
            Skill {
                name: "AI Quality Assurance",
                detail: "Specialist in designing and verifying AI test cases to ensure reliability. \
                         Proven impact: 80% workload reduction in onboarding processes.",
            },
            Skill {
                name: "Strategic AI Transformation",
                detail: "Authoring frameworks and concept papers for organizational \"AI-First\" transitions and long-term integration.",
            },
        ],
    },
    SkillCard {
        title: "Enterprise Automation & Ecosystems",
        skills: &[
            Skill {
                name: "Zendesk API & Automation",
                detail: "Deep integration of AI workflows into enterprise-level support systems. \
                         Automated 30% of B2B support tickets (~400/month).",
            },
            Skill {
                name: "Digistore24 Platform Expertise",
                detail: "Technical optimization and integration for high-revenue vendor ecosystems. \
                         Managing multi-million Euro technical relationships.",
            },
            Skill {
                name: "Process Mapping & Translation",
                detail: "Converting manual business requirements into automated, scalable technical workflows \
                         with measurable efficiency gains.",
            },
        ],
    },
    SkillCard {
        title: "Engineering & Architecture",
        skills: &[
            Skill {
                name: "Core Languages",
                detail: "Python, TypeScript, Node.js, Angular, PHP",
            },
            Skill {
                name: "Infrastructure & DevOps",
                detail: "CI/CD Pipelines (Jenkins, GitLab), automated software delivery, high-availability production environments.",
            },
            Skill {
                name: "Architecture & Databases",
                detail: "API Design, System Scalability, Relational Databases (PostgreSQL), custom web architectures.",
            },
        ],
    },
];

pub const PROJECTS: &[ProjectRecord] = &[ProjectRecord {
    id: "example-project",
    title: "Example AI Platform",
    subtitle: "Advanced Machine Learning Infrastructure",
    tags: &["AI/ML", "Python", "Cloud"],
    description: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    challenge: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    solution: "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident.",
    tech_stack: &[
        "Python & FastAPI",
        "TensorFlow / PyTorch",
        "Docker & Kubernetes",
        "PostgreSQL & Redis",
        "AWS / Azure Cloud",
    ],
    impact: &[
        Metric {
            value: "85%",
            label: "efficiency increase",
        },
        Metric {
            value: "$500K+",
            label: "annual cost savings",
        },
        Metric {
            value: "10,000+",
            label: "daily active users",
        },
        Metric {
            value: "99.9%",
            label: "system uptime",
        },
    ],
}];

/// Topics listed next to the contact form
pub const CONTACT_REASONS: &[&str] = &[
    "Technical Architecture Exchange",
    "AI Transformation Strategies",
    "Professional Networking",
];

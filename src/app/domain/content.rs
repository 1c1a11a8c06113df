//! Static resume content.
//!
//! Everything here is defined once and never mutated. The page tree in
//! `page.rs` is derived from [`PROFILE`].

/// Accent colour family used for skill cards and chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Indigo,
    Slate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Strong,
    Highlight,
}

/// A run of text inside a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub text: &'static str,
    pub emphasis: Emphasis,
}

const fn plain(text: &'static str) -> Span {
    Span { text, emphasis: Emphasis::Plain }
}

const fn strong(text: &'static str) -> Span {
    Span { text, emphasis: Emphasis::Strong }
}

const fn highlight(text: &'static str) -> Span {
    Span { text, emphasis: Emphasis::Highlight }
}

/// An outbound contact action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLink {
    Email(&'static str),
    Phone(&'static str),
}

impl ContactLink {
    /// URI handed to the OS (`mailto:` / `tel:`).
    pub fn uri(&self) -> String {
        match self {
            ContactLink::Email(addr) => format!("mailto:{}", addr),
            ContactLink::Phone(number) => format!("tel:{}", number),
        }
    }

    pub fn target(&self) -> &'static str {
        match self {
            ContactLink::Email(addr) => addr,
            ContactLink::Phone(number) => number,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
    Tools,
    Testing,
    Deployment,
    Methodologies,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::Tools,
        SkillCategory::Testing,
        SkillCategory::Deployment,
        SkillCategory::Methodologies,
    ];
}

/// Category name to ordered skill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCatalog {
    pub languages: &'static [&'static str],
    pub frameworks: &'static [&'static str],
    pub databases: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub testing: &'static [&'static str],
    pub deployment: &'static [&'static str],
    pub methodologies: &'static [&'static str],
}

impl SkillCatalog {
    pub fn get(&self, category: SkillCategory) -> &'static [&'static str] {
        match category {
            SkillCategory::Languages => self.languages,
            SkillCategory::Frameworks => self.frameworks,
            SkillCategory::Databases => self.databases,
            SkillCategory::Tools => self.tools,
            SkillCategory::Testing => self.testing,
            SkillCategory::Deployment => self.deployment,
            SkillCategory::Methodologies => self.methodologies,
        }
    }
}

/// One card of the skills grid. A card may merge several categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCard {
    pub title: &'static str,
    pub accent: Accent,
    pub categories: &'static [SkillCategory],
}

impl SkillCard {
    /// Skills of every category on the card, in card order.
    pub fn skills(&self, catalog: &SkillCatalog) -> Vec<&'static str> {
        self.categories
            .iter()
            .flat_map(|c| catalog.get(*c).iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceRecord {
    pub role: &'static str,
    pub company: &'static str,
    pub dates: &'static str,
    pub project: Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationRecord {
    pub degree: &'static str,
    pub institution: &'static str,
    pub graduation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: ContactLink,
    pub phone: ContactLink,
    pub about: &'static [&'static [Span]],
    pub skills: SkillCatalog,
    pub skill_cards: &'static [SkillCard],
    pub experience: ExperienceRecord,
    pub education: EducationRecord,
    pub contact_heading: &'static str,
    pub contact_blurb: &'static str,
    pub footer: &'static [&'static str],
}

pub const SKILLS: SkillCatalog = SkillCatalog {
    languages: &["Java", "SQL"],
    frameworks: &["Spring Boot", "Spring MVC", "Spring Data JPA", "Hibernate"],
    databases: &["MySQL", "PostgreSQL"],
    tools: &["Git", "GitHub", "Maven", "Gradle", "IntelliJ IDEA", "Eclipse"],
    testing: &["JUnit", "Mockito", "Log4j"],
    deployment: &["Apache Tomcat", "AWS (Basic)"],
    methodologies: &["RESTful APIs", "OOP", "Design Patterns", "Agile/Scrum"],
};

pub const SKILL_CARDS: &[SkillCard] = &[
    SkillCard { title: "Languages", accent: Accent::Blue, categories: &[SkillCategory::Languages] },
    SkillCard { title: "Frameworks", accent: Accent::Green, categories: &[SkillCategory::Frameworks] },
    SkillCard { title: "Databases", accent: Accent::Purple, categories: &[SkillCategory::Databases] },
    SkillCard { title: "Tools", accent: Accent::Orange, categories: &[SkillCategory::Tools] },
    SkillCard {
        title: "Testing & Deployment",
        accent: Accent::Red,
        categories: &[SkillCategory::Testing, SkillCategory::Deployment],
    },
    SkillCard { title: "Methodologies", accent: Accent::Indigo, categories: &[SkillCategory::Methodologies] },
];

const ABOUT: &[&[Span]] = &[
    &[
        plain("Java Backend Developer with "),
        highlight("1.5+ years of experience"),
        plain(" in designing, developing, and maintaining robust backend solutions. Currently working at "),
        strong("SOFREGO PRIVATE LIMITED"),
        plain(", I specialize in Java, Spring Boot, RESTful APIs, and database management with MySQL/PostgreSQL."),
    ],
    &[plain(
        "I'm passionate about implementing scalable server-side logic, optimizing performance, and ensuring \
         high-quality code through unit testing and best practices. Strong understanding of object-oriented \
         programming, design patterns, and agile methodologies, with proven ability to collaborate effectively \
         in cross-functional teams.",
    )],
];

pub const PROFILE: Profile = Profile {
    name: "Shubham Makne",
    initials: "SM",
    headline: "Java Backend Developer",
    tagline: "1.5+ years of experience building robust and scalable backend solutions",
    location: "Pune, Maharashtra, India",
    email: ContactLink::Email("makneshubham561@gmail.com"),
    phone: ContactLink::Phone("8805612101"),
    about: ABOUT,
    skills: SKILLS,
    skill_cards: SKILL_CARDS,
    experience: ExperienceRecord {
        role: "Java Developer",
        company: "SOFREGO PRIVATE LIMITED",
        dates: "June 2024 - Present",
        project: Project {
            name: "Barclays Bank TM",
            role: "Java Backend Developer",
            description: "A comprehensive banking application designed to manage customer transactions, accounts, \
                          and banking operations efficiently. The system provides seamless, secure, and real-time \
                          transaction processing while integrating with various banking modules to ensure \
                          operational accuracy and compliance.",
            technologies: &[
                "Java",
                "Spring Boot",
                "Spring MVC",
                "Hibernate",
                "MySQL",
                "RESTful APIs",
                "Maven",
                "Git",
                "JUnit",
                "Mockito",
                "Apache Tomcat",
            ],
            responsibilities: &[
                "Developed and maintained backend services using Java, Spring Boot, and Hibernate",
                "Designed and implemented RESTful APIs for seamless communication between frontend and backend",
                "Integrated and managed database operations using MySQL, ensuring data integrity and performance",
                "Implemented unit testing using JUnit and Mockito to ensure code quality and reliability",
                "Participated in code reviews, debugging, and performance optimization of backend modules",
                "Collaborated with cross-functional teams in an Agile/Scrum environment to deliver features on time",
            ],
        },
    },
    education: EducationRecord {
        degree: "B.Tech in Information Technology",
        institution: "Savitribai Phule Pune University (SPPU)",
        graduation: "Expected Graduation: 2025",
    },
    contact_heading: "Let's Connect",
    contact_blurb: "I'm always open to discussing new projects and opportunities",
    footer: &[
        "\u{00a9} 2024 Shubham Makne. All rights reserved.",
        "Java Backend Developer | 1.5+ Years Experience",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_exact() {
        assert_eq!(PROFILE.skills.languages, &["Java", "SQL"]);
    }

    #[test]
    fn test_every_category_non_empty() {
        for category in SkillCategory::ALL {
            assert!(!SKILLS.get(category).is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_authored_order_preserved() {
        assert_eq!(SKILLS.get(SkillCategory::Tools)[0], "Git");
        assert_eq!(SKILLS.get(SkillCategory::Tools)[5], "Eclipse");
        assert_eq!(
            SKILLS.get(SkillCategory::Methodologies),
            &["RESTful APIs", "OOP", "Design Patterns", "Agile/Scrum"]
        );
    }

    #[test]
    fn test_testing_and_deployment_card_merges_in_order() {
        let card = SKILL_CARDS
            .iter()
            .find(|c| c.title == "Testing & Deployment")
            .unwrap();
        assert_eq!(
            card.skills(&SKILLS),
            vec!["JUnit", "Mockito", "Log4j", "Apache Tomcat", "AWS (Basic)"]
        );
    }

    #[test]
    fn test_cards_cover_every_category_once() {
        let mut seen: Vec<SkillCategory> = SKILL_CARDS
            .iter()
            .flat_map(|c| c.categories.iter().copied())
            .collect();
        assert_eq!(seen.len(), SkillCategory::ALL.len());
        seen.dedup();
        assert_eq!(seen, SkillCategory::ALL.to_vec());
    }

    #[test]
    fn test_contact_uris() {
        assert_eq!(PROFILE.email.uri(), "mailto:makneshubham561@gmail.com");
        assert_eq!(PROFILE.phone.uri(), "tel:8805612101");
        assert_eq!(PROFILE.phone.target(), "8805612101");
    }

    #[test]
    fn test_experience_lists() {
        let project = &PROFILE.experience.project;
        assert_eq!(project.technologies.len(), 11);
        assert_eq!(project.responsibilities.len(), 6);
        assert_eq!(project.technologies.first(), Some(&"Java"));
    }
}

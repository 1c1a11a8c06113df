//! Deterministic page tree built from the static profile.
//!
//! The FLTK view walks this tree; nothing here touches widgets, so the
//! structure of the page can be checked without a display.

use super::content::{Accent, ContactLink, Profile, Span};
use super::section::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Display,
    Subtitle,
    SectionTitle,
    CardTitle,
    Label,
    Body,
    Caption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub label: String,
    pub link: ContactLink,
    /// Filled light button; otherwise the darker secondary style.
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Avatar(&'static str),
    Text { text: &'static str, style: TextStyle },
    /// Text drawn in the accent colour of its container.
    AccentText { text: &'static str, style: TextStyle },
    Rich(&'static [Span]),
    Chips { items: Vec<&'static str>, accent: Accent },
    Bullets(&'static [&'static str]),
    Badge(&'static str),
    Location(&'static str),
    Links(Vec<LinkButton>),
    Card { title: Option<&'static str>, accent: Accent, children: Vec<Block> },
    Grid(Vec<Block>),
    /// "More below" marker at the bottom of the hero.
    ScrollHint,
}

/// Background treatment of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTone {
    Hero,
    Light,
    Muted,
    Dark,
}

/// Horizontal alignment of a section's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    /// Centred on narrow windows, start-aligned on desktop widths.
    Responsive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSection {
    pub anchor: &'static str,
    pub tone: SectionTone,
    pub align: Alignment,
    pub blocks: Vec<Block>,
}

impl PageSection {
    /// Nav section this anchor belongs to, if any.
    pub fn nav(&self) -> Option<SectionId> {
        SectionId::from_id(self.anchor)
    }
}

fn text(text: &'static str, style: TextStyle) -> Block {
    Block::Text { text, style }
}

fn hero(profile: &Profile) -> PageSection {
    PageSection {
        anchor: "hero",
        tone: SectionTone::Hero,
        align: Alignment::Responsive,
        blocks: vec![
            Block::Avatar(profile.initials),
            text(profile.name, TextStyle::Display),
            text(profile.headline, TextStyle::Subtitle),
            text(profile.tagline, TextStyle::Body),
            Block::Links(vec![
                LinkButton { label: "Email Me".to_string(), link: profile.email, primary: true },
                LinkButton { label: "Call Me".to_string(), link: profile.phone, primary: false },
            ]),
            Block::ScrollHint,
        ],
    }
}

fn about(profile: &Profile) -> PageSection {
    let mut children: Vec<Block> = profile.about.iter().copied().map(Block::Rich).collect();
    children.push(Block::Location(profile.location));
    PageSection {
        anchor: SectionId::About.id(),
        tone: SectionTone::Light,
        align: Alignment::Start,
        blocks: vec![
            text("About Me", TextStyle::SectionTitle),
            Block::Card { title: None, accent: Accent::Slate, children },
        ],
    }
}

fn skills(profile: &Profile) -> PageSection {
    let cards = profile
        .skill_cards
        .iter()
        .map(|card| Block::Card {
            title: Some(card.title),
            accent: card.accent,
            children: vec![Block::Chips { items: card.skills(&profile.skills), accent: card.accent }],
        })
        .collect();
    PageSection {
        anchor: SectionId::Skills.id(),
        tone: SectionTone::Muted,
        align: Alignment::Start,
        blocks: vec![text("Technical Skills", TextStyle::SectionTitle), Block::Grid(cards)],
    }
}

fn experience(profile: &Profile) -> PageSection {
    let job = &profile.experience;
    let project = &job.project;
    let education = &profile.education;
    PageSection {
        anchor: SectionId::Experience.id(),
        tone: SectionTone::Light,
        align: Alignment::Start,
        blocks: vec![
            text("Professional Experience", TextStyle::SectionTitle),
            Block::Card {
                title: None,
                accent: Accent::Blue,
                children: vec![
                    text(job.role, TextStyle::CardTitle),
                    Block::AccentText { text: job.company, style: TextStyle::Subtitle },
                    Block::Badge(job.dates),
                    Block::Card {
                        title: Some(project.name),
                        accent: Accent::Slate,
                        children: vec![
                            text(project.role, TextStyle::Caption),
                            text(project.description, TextStyle::Body),
                            text("Technologies Used:", TextStyle::Label),
                            Block::Chips { items: project.technologies.to_vec(), accent: Accent::Slate },
                            text("Key Responsibilities:", TextStyle::Label),
                            Block::Bullets(project.responsibilities),
                        ],
                    },
                ],
            },
            Block::Card {
                title: Some("Education"),
                accent: Accent::Slate,
                children: vec![
                    text(education.degree, TextStyle::Label),
                    Block::AccentText { text: education.institution, style: TextStyle::Label },
                    text(education.graduation, TextStyle::Caption),
                ],
            },
        ],
    }
}

fn contact(profile: &Profile) -> PageSection {
    PageSection {
        anchor: SectionId::Contact.id(),
        tone: SectionTone::Hero,
        align: Alignment::Center,
        blocks: vec![
            text(profile.contact_heading, TextStyle::SectionTitle),
            text(profile.contact_blurb, TextStyle::Subtitle),
            Block::Links(vec![
                LinkButton { label: profile.email.target().to_string(), link: profile.email, primary: true },
                LinkButton { label: profile.phone.target().to_string(), link: profile.phone, primary: true },
            ]),
        ],
    }
}

fn footer(profile: &Profile) -> PageSection {
    PageSection {
        anchor: "footer",
        tone: SectionTone::Dark,
        align: Alignment::Center,
        blocks: profile.footer.iter().map(|&line| text(line, TextStyle::Caption)).collect(),
    }
}

/// Build the full page: hero, about, skills, experience, contact, footer.
pub fn build_page(profile: &Profile) -> Vec<PageSection> {
    vec![
        hero(profile),
        about(profile),
        skills(profile),
        experience(profile),
        contact(profile),
        footer(profile),
    ]
}

/// One of the four navigable anchors on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    About,
    Skills,
    Experience,
    Contact,
}

impl SectionId {
    /// Navigation order, as shown in the nav bar.
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Anchor id used to address the section.
    pub fn id(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Capitalized label shown on nav buttons.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_id(s: &str) -> Option<SectionId> {
        match s {
            "about" => Some(SectionId::About),
            "skills" => Some(SectionId::Skills),
            "experience" => Some(SectionId::Experience),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_about() {
        assert_eq!(SectionId::default(), SectionId::About);
    }

    #[test]
    fn test_ids_are_lowercase_labels() {
        for section in SectionId::ALL {
            assert_eq!(section.id(), section.label().to_lowercase());
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(SectionId::from_id("skills"), Some(SectionId::Skills));
        assert_eq!(SectionId::from_id("contact"), Some(SectionId::Contact));
        assert_eq!(SectionId::from_id("hero"), None);
        assert_eq!(SectionId::from_id("About"), None);
    }

    #[test]
    fn test_nav_order() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["about", "skills", "experience", "contact"]);
    }
}

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of content block found on an analysed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionType {
    Hero,
    Features,
    Pricing,
    Testimonials,
    Cta,
    Faq,
    About,
    Team,
    Contact,
    Gallery,
    Blog,
    Stats,
    Logos,
    Comparison,
    Timeline,
    Process,
    Newsletter,
    Footer,
    Unknown,
}

impl SectionType {
    pub const ALL: [SectionType; 19] = [
        SectionType::Hero,
        SectionType::Features,
        SectionType::Pricing,
        SectionType::Testimonials,
        SectionType::Cta,
        SectionType::Faq,
        SectionType::About,
        SectionType::Team,
        SectionType::Contact,
        SectionType::Gallery,
        SectionType::Blog,
        SectionType::Stats,
        SectionType::Logos,
        SectionType::Comparison,
        SectionType::Timeline,
        SectionType::Process,
        SectionType::Newsletter,
        SectionType::Footer,
        SectionType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::Pricing => "pricing",
            SectionType::Testimonials => "testimonials",
            SectionType::Cta => "cta",
            SectionType::Faq => "faq",
            SectionType::About => "about",
            SectionType::Team => "team",
            SectionType::Contact => "contact",
            SectionType::Gallery => "gallery",
            SectionType::Blog => "blog",
            SectionType::Stats => "stats",
            SectionType::Logos => "logos",
            SectionType::Comparison => "comparison",
            SectionType::Timeline => "timeline",
            SectionType::Process => "process",
            SectionType::Newsletter => "newsletter",
            SectionType::Footer => "footer",
            SectionType::Unknown => "unknown",
        }
    }

    /// Unrecognised names map to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == normalized)
            .unwrap_or(SectionType::Unknown)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SectionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SectionType::parse(&raw))
    }
}

/// One block of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default)]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Section {
    pub fn new(section_type: SectionType, order: i32) -> Self {
        Self { section_type, order, title: None, description: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStructure {
    pub name: String,
    /// Route of the page (`/`, `/pricing`). Derived from the name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl PageStructure {
    pub fn new(name: &str, path: &str, sections: Vec<Section>) -> Self {
        Self { name: name.to_string(), path: Some(path.to_string()), sections }
    }

    /// Sections sorted by declared order. Equal orders keep their listed position.
    pub fn ordered_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|section| section.order);
        sections
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(label: &str, href: &str) -> Self {
        Self { label: label.to_string(), href: href.to_string(), children: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLayout {
    pub columns: Vec<FooterColumn>,
    pub copyright: Option<String>,
}

/// Page, navigation, and footer layout of the reference site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteStructure {
    pub pages: Vec<PageStructure>,
    pub navigation: Vec<NavItem>,
    pub footer: Option<FooterLayout>,
}

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr, sync::LazyLock};
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("Embedded portfolio content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Content file is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("Couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Project id must not be empty")]
    EmptyProjectId,
    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),
}

/// Anchorable regions of the page, in document order.
///
/// The string ids are what the browser scrolls to for `#id` links, so they
/// must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown section: {0}")]
pub struct SectionParseError(pub String);

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SectionParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub initials: String,
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub about: Vec<String>,
    pub languages: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub section: Section,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub score: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    /// Tailwind gradient stops for the card border.
    pub accent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Phone,
    Email,
    GitHub,
    LinkedIn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: String,
    pub value: String,
    pub href: String,
    #[serde(default)]
    pub contact_card: bool,
}

impl ContactLink {
    /// Web profiles open in a new tab, `tel:` and `mailto:` stay in place.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCopy {
    pub heading: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub nav: Vec<NavItem>,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub links: Vec<ContactLink>,
    pub contact: ContactCopy,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = ContentAssets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        let raw = String::from_utf8(file.data.into_owned())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        portfolio.check_projects()?;
        Ok(portfolio)
    }

    fn check_projects(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.is_empty() {
                return Err(ContentError::EmptyProjectId);
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
        }
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contact_cards(&self) -> impl Iterator<Item = &ContactLink> {
        self.links.iter().filter(|l| l.contact_card)
    }
}

/// Year the site was built, for the footer.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"{
        "profile": {
            "initials": "AL", "name": "Ada Lovelace", "headline": "Analyst",
            "summary": "Engines.", "about": ["Notes."], "languages": "English"
        },
        "nav": [{ "label": "Home", "section": "home" }],
        "skills": [],
        "education": [],
        "experience": [],
        "projects": [
            { "id": "engine", "title": "Engine", "subtitle": "", "description": "",
              "features": [], "tech": [], "accent": "" }
        ],
        "links": [
            { "kind": "email", "label": "Email", "value": "ada@example.com",
              "href": "mailto:ada@example.com" }
        ],
        "contact": { "heading": "Hi", "tagline": "Write" }
    }"##;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert_eq!(portfolio.profile.initials, "LK");
        assert_eq!(portfolio.projects.len(), 2);
        assert!(portfolio.project("project1").is_some());
        assert!(portfolio.project("project2").is_some());
        assert!(portfolio.project("project3").is_none());
    }

    #[test]
    fn test_nav_covers_sections_in_order() {
        let sections = PORTFOLIO.nav.iter().map(|n| n.section).collect::<Vec<_>>();
        assert_eq!(sections, Section::ALL.to_vec());
    }

    #[test]
    fn test_links_are_verbatim() {
        let hrefs = PORTFOLIO
            .links
            .iter()
            .map(|l| l.href.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec![
                "tel:+919363254736",
                "mailto:livishkumarlk83@gmail.com",
                "http://github.com/livishkumar",
                "http://www.linkedin.com/in/livish-kumar53716728a",
            ]
        );
    }

    #[test]
    fn test_new_tab_only_for_web_links() {
        let tabs = PORTFOLIO
            .links
            .iter()
            .map(|l| (l.kind, l.opens_new_tab()))
            .collect::<Vec<_>>();
        assert_eq!(
            tabs,
            vec![
                (LinkKind::Phone, false),
                (LinkKind::Email, false),
                (LinkKind::GitHub, true),
                (LinkKind::LinkedIn, true),
            ]
        );
        assert_eq!(PORTFOLIO.contact_cards().count(), 3);
    }

    #[test]
    fn test_minimal_content_defaults_contact_card() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        assert!(!portfolio.links[0].contact_card);
        assert_eq!(portfolio.contact_cards().count(), 0);
    }

    #[test]
    fn test_duplicate_project_rejected() {
        let raw = MINIMAL.replace(
            r#""projects": ["#,
            r#""projects": [
            { "id": "engine", "title": "Again", "subtitle": "", "description": "",
              "features": [], "tech": [], "accent": "" },"#,
        );
        match Portfolio::from_json(&raw) {
            Err(ContentError::DuplicateProject(id)) => assert_eq!(id, "engine"),
            other => panic!("expected duplicate error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_project_id_rejected() {
        let raw = MINIMAL.replace(r#""id": "engine""#, r#""id": """#);
        assert!(matches!(
            Portfolio::from_json(&raw),
            Err(ContentError::EmptyProjectId)
        ));
    }

    #[test]
    fn test_unknown_nav_section_rejected() {
        let raw = MINIMAL.replace(r#""section": "home""#, r#""section": "blog""#);
        assert!(matches!(
            Portfolio::from_json(&raw),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("projects".parse::<Section>(), Ok(Section::Projects));
        assert_eq!("#contact".parse::<Section>(), Ok(Section::Contact));
        assert_eq!(
            "blog".parse::<Section>(),
            Err(SectionParseError("blog".to_string()))
        );
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.href(), format!("#{section}"));
        }
    }

    #[test]
    fn test_copyright_year_from_build() {
        assert!(copyright_year() >= 2025);
    }
}

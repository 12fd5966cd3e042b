use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::{
    actions::ContactAction,
    parallax::ParallaxLayer,
    tracker::{RegistryError, SectionId, SectionRegistry, TrackerConfig, DEFAULT_THRESHOLD},
};

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub const HOME_ID: &str = "home";
pub const ABOUT_ID: &str = "about";
pub const PROJECTS_ID: &str = "projects";
pub const CONTACT_ID: &str = "contact";

/// Sections the page renders, in document order.
pub const PAGE_SECTIONS: [&str; 4] = [HOME_ID, ABOUT_ID, PROJECTS_ID, CONTACT_ID];

pub static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse content: {0}")]
    Parse(String),
    #[error("invalid navigation: {0}")]
    Registry(#[from] RegistryError),
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub navigation: Navigation,
    pub hero: Hero,
    pub about: About,
    pub projects: Projects,
    pub contact: Contact,
    pub footer: Footer,
    #[serde(default)]
    pub background: Vec<ParallaxLayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub role: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavSection {
    pub id: SectionId,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navigation {
    pub sections: Vec<NavSection>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub default_section: Option<SectionId>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Navigation {
    pub fn registry(&self) -> Result<SectionRegistry, RegistryError> {
        SectionRegistry::new(self.sections.iter().map(|s| s.id.clone()))
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            threshold: self.threshold,
            default_section: self.default_section.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    /// Gradient classes for highlighted words.
    #[serde(default)]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkButton {
    pub label: String,
    pub href: String,
    pub icon: String,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub greeting: String,
    pub subtitle: String,
    pub photo: String,
    pub intro: Vec<TextRun>,
    pub actions: Vec<LinkButton>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub subtitle: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    pub skills_title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projects {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub label: String,
    pub value: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectCard {
    pub label: String,
    pub value: String,
    pub call_to_action: String,
    pub icon: String,
    /// Gradient classes for the hover border.
    pub border: String,
    pub action: ContactAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub blurb: String,
    pub channels: Vec<Channel>,
    pub cards_title: String,
    pub cards_subtitle: String,
    pub cards: Vec<ConnectCard>,
    pub availability: String,
    pub resume: Resume,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    pub contact_note: String,
    pub availability: String,
    pub links: Vec<Channel>,
}

impl Portfolio {
    fn validate(&self) -> Result<(), ContentError> {
        if self.owner.name.trim().is_empty() {
            return Err(ContentError::Invalid("owner name is empty".to_string()));
        }
        let registry = self.navigation.registry()?;
        if let Some(missing) = registry.iter().find(|id| !PAGE_SECTIONS.contains(&id.as_str())) {
            return Err(ContentError::Invalid(format!(
                "navigation section {missing} is not on the page"
            )));
        }
        let threshold = self.navigation.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ContentError::Invalid(format!(
                "threshold {threshold} is outside (0, 1]"
            )));
        }
        Ok(())
    }
}

pub fn parse(data: &[u8]) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio =
        serde_json::from_slice(data).map_err(|e| ContentError::Parse(e.to_string()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

pub fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    parse(&file.data)
}

/// The embedded portfolio, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> String {
        let file = Assets::get(PORTFOLIO_FILE).expect("portfolio should be embedded");
        String::from_utf8(file.data.into()).expect("portfolio should be utf-8")
    }

    fn with_navigation(sections: &str) -> String {
        let mut doc: serde_json::Value = serde_json::from_str(&embedded()).unwrap();
        doc["navigation"] = serde_json::from_str(sections).unwrap();
        doc.to_string()
    }

    #[test]
    fn test_embedded_portfolio_is_valid() {
        let portfolio = portfolio().expect("embedded portfolio should load");
        let registry = portfolio.navigation.registry().unwrap();
        let ids = registry.iter().map(|s| s.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, PAGE_SECTIONS);

        let config = portfolio.navigation.tracker_config();
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.default_section, Some(SectionId::from(HOME_ID)));

        assert_eq!(portfolio.projects.items.len(), 5);
        assert!(portfolio
            .contact
            .cards
            .iter()
            .any(|c| matches!(c.action, ContactAction::CopyEmail(_))));
        assert!(!portfolio.background.is_empty());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load("nope.json"),
            Err(ContentError::Missing(name)) if name == "nope.json"
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(b"{"), Err(ContentError::Parse(_))));

        let dup = with_navigation(
            r#"{"sections":[{"id":"home","label":"Home"},{"id":"home","label":"Again"}]}"#,
        );
        assert_eq!(
            parse(dup.as_bytes()).unwrap_err(),
            ContentError::Registry(RegistryError::Duplicate(SectionId::from("home")))
        );

        let offpage = with_navigation(r#"{"sections":[{"id":"blog","label":"Blog"}]}"#);
        assert!(matches!(
            parse(offpage.as_bytes()),
            Err(ContentError::Invalid(_))
        ));

        let threshold = with_navigation(
            r#"{"sections":[{"id":"home","label":"Home"}],"threshold":1.5}"#,
        );
        assert!(matches!(
            parse(threshold.as_bytes()),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_navigation_defaults() {
        let doc = with_navigation(r#"{"sections":[{"id":"about","label":"About"}]}"#);
        let portfolio = parse(doc.as_bytes()).unwrap();
        let config = portfolio.navigation.tracker_config();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.default_section, None);
    }
    /// Every string stored under one of `keys`, anywhere in the document.
    fn strings_under(value: &serde_json::Value, keys: &[&str], out: &mut Vec<String>) {
        match value {
            serde_json::Value::Object(map) => {
                for (k, v) in map {
                    match v {
                        serde_json::Value::String(s) if keys.contains(&k.as_str()) => {
                            out.push(s.clone())
                        }
                        _ => strings_under(v, keys, out),
                    }
                }
            }
            serde_json::Value::Array(items) => {
                items.iter().for_each(|v| strings_under(v, keys, out))
            }
            _ => {}
        }
    }

    fn interface_icons(source: &str) -> impl Iterator<Item = &str> {
        source
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .filter(|token| token.starts_with("extra-") && token.len() > "extra-".len())
    }

    #[test]
    fn test_icons_are_defined() {
        let stylesheet = include_str!("../input.css");
        let doc = serde_json::to_value(portfolio().unwrap()).unwrap();
        let mut icons = Vec::new();
        strings_under(&doc, &["icon"], &mut icons);
        assert!(!icons.is_empty());

        let components = [
            include_str!("app/navbar.rs"),
            include_str!("app/footer.rs"),
            include_str!("app/contact.rs"),
            include_str!("app/projects.rs"),
            include_str!("app/hero.rs"),
            include_str!("app/about.rs"),
        ];
        icons.extend(
            components
                .iter()
                .flat_map(|source| interface_icons(source))
                .map(String::from),
        );
        assert!(icons.iter().any(|i| i == "extra-menu"));

        for icon in &icons {
            let class = icon.split_whitespace().next().unwrap();
            assert!(
                class.starts_with("devicon-") || stylesheet.contains(&format!(".{class} {{")),
                "icon {class} has no style"
            );
        }
    }

    #[test]
    fn test_referenced_assets_exist() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let doc = serde_json::to_value(portfolio().unwrap()).unwrap();
        let mut paths = Vec::new();
        strings_under(&doc, &["photo", "image"], &mut paths);
        assert_eq!(paths.len(), 6);
        paths.push("/favicon.svg".to_string());

        for path in paths.iter().filter(|p| p.starts_with('/')) {
            assert!(
                public.join(path.trim_start_matches('/')).is_file(),
                "{path} missing from public/"
            );
        }
    }
}

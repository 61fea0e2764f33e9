use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static GLOBAL_CONTENT: LazyLock<Content> = LazyLock::new(|| {
    Content::load().unwrap_or_else(|e| {
        log::error!("failed to load site content: {e}");
        Content::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("default project tab '{0}' does not exist")]
    UnknownTab(String),
}

#[derive(Debug, Clone, Default)]
pub struct Content {
    pub site: SiteInfo,
    pub experiences: Vec<Experience>,
    pub projects: ProjectCatalog,
    pub skills: Vec<SkillCard>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub roles: Vec<String>,
    pub quote: String,
    pub quote_author: String,
    pub about: AboutInfo,
    pub cta: Link,
    pub audio_src: String,
    pub nav: Vec<NavItem>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutInfo {
    pub heading: String,
    pub text: String,
    pub video: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// Id of the `section` the item scrolls to.
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Experience {
    pub title: String,
    pub duration: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectCatalog {
    pub default_tab: String,
    pub tabs: Vec<ProjectTab>,
}

impl ProjectCatalog {
    pub fn tab(&self, key: &str) -> Option<&ProjectTab> {
        self.tabs.iter().find(|t| t.key == key)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectTab {
    pub key: String,
    pub title: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    pub title: String,
    pub desc: String,
    pub img: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    pub full_desc: Option<String>,
    pub link: Option<String>,
    /// Spans two grid columns on large screens.
    #[serde(default)]
    pub full_span: bool,
    #[serde(default)]
    pub in_progress: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillCard {
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    /// Shown full width above the grid.
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub layout: String,
    #[serde(default)]
    pub icons: Vec<SkillIcon>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillIcon {
    /// devicon class, e.g. `devicon-rust-plain`
    pub class: String,
    pub name: String,
}

fn read_json<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let asset = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    serde_json::from_slice(&asset.data).map_err(|source| ContentError::Parse {
        file: file.to_string(),
        source,
    })
}

impl Content {
    pub fn load() -> Result<Self, ContentError> {
        let content = Content {
            site: read_json("site.json")?,
            experiences: read_json("experience.json")?,
            projects: read_json("projects.json")?,
            skills: read_json("skills.json")?,
        };
        if content.projects.tab(&content.projects.default_tab).is_none() {
            return Err(ContentError::UnknownTab(content.projects.default_tab));
        }
        log::debug!(
            "loaded content: {} experiences, {} project tabs, {} skill cards",
            content.experiences.len(),
            content.projects.tabs.len(),
            content.skills.len()
        );
        Ok(content)
    }
}

pub fn content() -> &'static Content {
    &GLOBAL_CONTENT
}

/// Year the site was built, stamped by build.rs.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .ok()
}

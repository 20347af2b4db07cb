//! The Portfolio Document as exchanged over `/api/portfolio`.
//!
//! Every object keeps the keys it does not model in `extra`, so a `PUT`
//! followed by a `GET` returns what the client sent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use super::error::PortfolioError;

/// Keys of a JSON object that have no typed field.
pub type Extra = Map<String, Value>;

/// Stored document: server-assigned id plus the editable data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: PortfolioData,
}

/// Everything a client may send in a `PUT`. Any `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal: PersonalInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialties: Vec<Specialty>,
    pub achievements: Vec<Achievement>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_elements: Option<InteractiveElements>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A development area card ("Web", "Android", "Games").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub technologies: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub organization: String,
    pub date: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, nominally a percentage. Stored as sent.
    pub level: Number,
    pub color: String,
    pub icon: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Categories the site groups projects under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    Android,
    Game,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Web,
        ProjectCategory::Android,
        ProjectCategory::Game,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Android => "android",
            ProjectCategory::Game => "game",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Usually `web`, `android` or `game`; other values are kept but not grouped
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roblox: Option<String>,
    /// Display values such as `users`, `rating` or `uptime`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stats: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Project {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    pub fn category(&self) -> Option<ProjectCategory> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveElements {
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub code_samples: Vec<CodeSample>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub color: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSample {
    pub title: String,
    pub language: String,
    pub code: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl PortfolioData {
    /// Parse a JSON body. A client-supplied `id` is dropped.
    pub fn from_json(bytes: &[u8]) -> Result<Self, PortfolioError> {
        let mut data: PortfolioData = serde_json::from_slice(bytes)?;
        data.extra.remove("id");
        Ok(data)
    }

    /// Quotes for the rotating banner, empty when none are configured.
    pub fn quotes(&self) -> &[Quote] {
        self.interactive_elements
            .as_ref()
            .map(|e| e.quotes.as_slice())
            .unwrap_or(&[])
    }

    /// Projects in one category, featured first.
    pub fn projects_in(&self, category: ProjectCategory) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.category() == Some(category))
            .collect();
        projects.sort_by_key(|p| !p.is_featured());
        projects
    }
}

//! In-memory holder for the single Portfolio Document.

use std::path::Path;

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use super::error::PortfolioError;
use super::model::{ContactInfo, Extra, PersonalInfo, Portfolio, PortfolioData};

/// Document compiled into the binary.
const BUNDLED: &str = include_str!("../../data/portfolio.json");

/// Parse the bundled document.
pub fn bundled() -> Result<PortfolioData, PortfolioError> {
    PortfolioData::from_json(BUNDLED.as_bytes())
}

/// Read and validate a document from disk.
pub fn read_document(path: &Path) -> Result<PortfolioData, PortfolioError> {
    let bytes = std::fs::read(path).map_err(|source| PortfolioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    PortfolioData::from_json(&bytes)
}

/// Resolve the startup document: `path` if given and valid, otherwise the
/// bundled one, otherwise a bare profile.
pub fn load_document(path: Option<&Path>) -> PortfolioData {
    if let Some(path) = path {
        match read_document(path) {
            Ok(data) => {
                info!(path = %path.display(), "Loaded portfolio");
                return data;
            }
            Err(e) => warn!("{e}; using bundled portfolio"),
        }
    }

    bundled().unwrap_or_else(|e| {
        warn!("Bundled portfolio unusable ({e}); using default profile");
        fallback()
    })
}

/// Bare profile used when no document can be loaded.
pub fn fallback() -> PortfolioData {
    PortfolioData {
        personal: PersonalInfo {
            name: "Ian Iglipa".to_string(),
            title: "Full-Stack Developer & Game Creator".to_string(),
            bio: "Passionate developer with 5+ years of experience across web development, \
                  mobile apps, and game creation."
                .to_string(),
            email: "ian.iglipa@email.com".to_string(),
            github: "github.com/ianiglipa".to_string(),
            linkedin: "linkedin.com/in/ianiglipa".to_string(),
            twitter: Some("twitter.com/ianiglipa".to_string()),
            discord: Some("discord.com/users/ianiglipa".to_string()),
            extra: Extra::new(),
        },
        specialties: Vec::new(),
        achievements: Vec::new(),
        experience: Vec::new(),
        skills: Vec::new(),
        projects: Vec::new(),
        contact: ContactInfo {
            email: "ian.iglipa@email.com".to_string(),
            github: "github.com/ianiglipa".to_string(),
            facebook: None,
            viber: None,
            discord: Some("discord.com/users/ianiglipa".to_string()),
            linkedin: Some("linkedin.com/in/ianiglipa".to_string()),
            twitter: Some("twitter.com/ianiglipa".to_string()),
            extra: Extra::new(),
        },
        interactive_elements: None,
        extra: Extra::new(),
    }
}

/// Last-write-wins store. Nothing is persisted.
#[derive(Debug, Default)]
pub struct PortfolioStore {
    document: RwLock<Option<Portfolio>>,
}

impl PortfolioStore {
    /// A store with no document; `GET` answers 404 until one is stored.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store seeded with `data` under a fresh id.
    pub fn with_data(data: PortfolioData) -> Self {
        Self {
            document: RwLock::new(Some(Portfolio {
                id: Uuid::new_v4(),
                data,
            })),
        }
    }

    /// Seed from `path` with the usual fallbacks.
    pub fn load(path: Option<&Path>) -> Self {
        Self::with_data(load_document(path))
    }

    pub async fn get(&self) -> Option<Portfolio> {
        self.document.read().await.clone()
    }

    /// Replace the data, keeping the current id (or assigning one).
    pub async fn update(&self, data: PortfolioData) -> Portfolio {
        let mut document = self.document.write().await;
        let id = document.as_ref().map_or_else(Uuid::new_v4, |p| p.id);
        let portfolio = Portfolio { id, data };
        *document = Some(portfolio.clone());
        portfolio
    }
}

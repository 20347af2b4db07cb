//! Portfolio Document model and store.

pub mod error;
pub mod model;
pub mod store;

pub use error::PortfolioError;
pub use model::{
    Achievement, CodeSample, ContactInfo, Experience, InteractiveElements, PersonalInfo,
    Portfolio, PortfolioData, Project, ProjectCategory, Quote, Skill, Specialty,
};
pub use store::PortfolioStore;

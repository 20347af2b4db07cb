//! folio - portfolio site engine
//!
//! - [`animation`]: visibility-gated typewriter and letter-reveal animations
//! - [`triggers`]: easter-egg matchers returning effect descriptors
//! - [`portfolio`]: the Portfolio Document and its in-memory store
//! - [`server`]: axum HTTP server for `/api/portfolio` and `/api/contact`
//! - [`preview`]: terminal rendition of the animated page

pub mod animation;
pub mod cli;
pub mod config;
pub mod portfolio;
pub mod preview;
pub mod server;
pub mod theme;
pub mod triggers;

pub use config::Config;
pub use portfolio::{Portfolio, PortfolioData, PortfolioStore};

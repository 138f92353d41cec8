//! scholarhub-core: search and catalog engine for the scholarhub publication platform
//!
//! This library provides:
//! - Multi-criteria publication filtering (text, author, year range, categories)
//! - Sorting by recency, age, title and year
//! - An in-memory publication store with a built-in fallback dataset
//! - A client for the scholarhub REST backend (listing, create, login, register)
//! - Session persistence and TOML configuration
//! - In-memory comment threads per publication
//!
//! The presentation layer talks to the core through [`command::Dispatcher`].

pub mod acquisition;
pub mod command;
pub mod comments;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod filter;
pub mod http;
pub mod query;
pub mod request;
pub mod session;
pub mod sort;
pub mod sources;
pub mod store;

// Re-export main types for convenience
pub use acquisition::{acquire, fallback_store};
pub use command::{Command, Dispatcher, Event};
pub use comments::CommentBoard;
pub use config::{BackendConfig, ScholarConfig};
pub use dashboard::DashboardSummary;
pub use error::{BackendError, ConfigError, Result, ScholarError, SessionError};
pub use export::ExportFormat;
pub use query::{ListingFilter, StatusFilter};
pub use request::{RequestToken, SearchSession};
pub use session::{Session, SessionStore};
pub use sort::SortKey;
pub use sources::{
    fallback_publications, Attachment, BackendApi, BackendClient, FallbackSource, LoginResponse,
    PublicationSource, SourceError,
};
pub use store::{PublicationStore, StoreOrigin};

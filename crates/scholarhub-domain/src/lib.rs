//! Academic domain types for scholarhub
//!
//! This crate provides the canonical models shared by the core library and the CLI:
//! - Publication: a paper with authors, keywords, categories and lifecycle status
//! - User: account record, also used as the author of a publication
//! - Comment: a signed-in reader's note on a publication
//! - SearchCriteria: the optional-field bundle a search form submits
//! - Validation: checks run on drafts before they reach the backend

pub mod comment;
pub mod criteria;
pub mod publication;
pub mod serde_ids;
pub mod user;
pub mod validation;

pub use comment::*;
pub use criteria::*;
pub use publication::*;
pub use user::*;
pub use validation::*;

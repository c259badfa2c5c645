pub mod error;
pub mod feature_flags;
pub mod theme;
pub mod validation;

// Deployment configuration
pub mod branding;
pub mod config;

// Panel domain types
pub mod case;
pub mod chat;
pub mod contract;
pub mod document;
pub mod jurisprudence;

pub use error::*;
pub use feature_flags::*;
pub use theme::*;

pub use branding::*;
pub use config::*;

pub use case::*;
pub use chat::*;
pub use contract::*;
pub use document::*;
pub use jurisprudence::*;

//! Static content, the cover-letter template and site configuration.
//!
//! Everything in this crate is plain data and pure functions; the `ui` crate
//! renders it.

pub mod config;
pub mod cover_letter;
pub mod models;
pub mod portfolio;

pub use config::{ConfigError, SiteConfig};
pub use cover_letter::{
    CoverLetter, Signature, TemplateField, TemplateFields, TextFile, COVER_LETTER_FILENAME,
    COVER_LETTER_MIME, USAGE_TIPS,
};
pub use models::{BlogPost, Profile, Project, Section, SocialKind, SocialLink};

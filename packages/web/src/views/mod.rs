mod portfolio;
pub use portfolio::Portfolio;

mod cover_letter;
pub use cover_letter::CoverLetter;

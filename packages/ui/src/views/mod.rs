mod portfolio;
pub use portfolio::PortfolioView;

mod cover_letter;
pub use cover_letter::CoverLetterView;

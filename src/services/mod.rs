pub mod articles;
pub mod export;
pub mod interactions;
pub mod listing;
pub mod tags;

pub use articles::ArticleService;
pub use export::ExportService;
pub use interactions::InteractionService;
pub use listing::ListingService;

pub mod catalog;
pub mod criteria;
pub mod facets;
pub mod filter;
pub mod insights;
pub mod listing;

pub use criteria::FilterCriteria;
pub use facets::Facets;
pub use listing::Listing;

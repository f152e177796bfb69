pub mod filter;
pub mod listing;
pub mod page;
pub mod sort;

pub use filter::{Filter, FILTER_PARAMS};
pub use listing::{ListingRecord, ListingView};
pub use page::{Page, PageRequest};
pub use sort::{Sort, SortDirection, SortField};

// Core library for the hotel booking storefront: catalog store, pricing,
// and the search/filter/sort engine over the hotel catalog.

pub mod catalog;
pub mod fixtures;
pub mod model;
pub mod pricing;
pub mod search;
pub mod session;

// Re-export key types for convenience
pub use catalog::{
    BookingError, BookingRequest, BookingSummary, CancelOutcome, CatalogConfig, CatalogStore,
    RestorePolicy,
};
pub use fixtures::{FixtureError, SAMPLE_CATALOG_PATH, SMALL_SAMPLE_CATALOG};
pub use model::{Booking, BookingStatus, Hotel, PropertyType, RoomCategory};
pub use pricing::{PriceQuote, GST_RATE};
pub use search::{HotelSearchEngine, SearchCriteria, SortKey};
pub use session::BookingSession;

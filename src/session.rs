// Session-scoped handle over the catalog store. One store per session,
// explicitly seeded and explicitly discarded; no hidden singletons.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::{
    BookingError, BookingRequest, BookingSummary, CancelOutcome, CatalogConfig, CatalogStore,
};
use crate::fixtures::{self, FixtureError};
use crate::model::{Booking, Hotel};
use crate::search::{HotelSearchEngine, SearchCriteria};

/// Clonable handle sharing one catalog store. Mutations take the write
/// lock, which doubles as the per-store mutual-exclusion region if the
/// host ever drives the session from more than one thread.
#[derive(Clone)]
pub struct BookingSession {
    store: Arc<RwLock<CatalogStore>>,
    engine: Arc<HotelSearchEngine>,
}

impl BookingSession {
    pub fn seed(hotels: Vec<Hotel>, config: CatalogConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(CatalogStore::with_config(hotels, config))),
            engine: Arc::new(HotelSearchEngine::new()),
        }
    }

    pub fn from_sample_catalog() -> Result<Self, FixtureError> {
        Ok(Self::seed(
            fixtures::load_sample_catalog()?,
            CatalogConfig::default(),
        ))
    }

    pub fn create_booking(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        self.store.write().create_booking(request)
    }

    pub fn cancel_booking(&self, booking_id: &str) -> CancelOutcome {
        self.store.write().cancel_booking(booking_id)
    }

    pub fn hotel(&self, id: &str) -> Option<Hotel> {
        self.store.read().hotel(id).cloned()
    }

    pub fn hotels(&self) -> Vec<Hotel> {
        self.store.read().hotels().to_vec()
    }

    pub fn booking(&self, id: &str) -> Option<Booking> {
        self.store.read().booking(id).cloned()
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.store.read().bookings().to_vec()
    }

    /// Filtered, ordered view of the catalog; never mutates it.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Hotel> {
        self.engine.search(self.store.read().hotels(), criteria)
    }

    pub fn booking_summary(&self) -> BookingSummary {
        self.store.read().booking_summary()
    }

    /// Discards the session handle. State is volatile; once the last
    /// handle is gone the catalog and booking history are gone with it.
    pub fn teardown(self) {
        drop(self);
    }
}

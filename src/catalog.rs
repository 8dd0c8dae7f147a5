// Catalog store: the single owner of hotel inventory and booking history.
// Only this component mutates `available` / `rooms_available`.

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::model::{Booking, BookingStatus, Hotel};
use crate::pricing::{self, PriceQuote};

// Validation failures for booking creation. Each names the violated field;
// no state is mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("unknown hotel: {0}")]
    UnknownHotel(String),

    #[error("unknown room category: {0}")]
    UnknownRoomCategory(String),

    #[error("checkout not after checkin")]
    CheckoutNotAfterCheckin,

    #[error("guest count must be at least 1")]
    NoGuests,

    #[error("room count must be at least 1")]
    NoRooms,

    #[error("insufficient rooms available: requested {requested}, available {available}")]
    InsufficientRooms { requested: u32, available: u32 },

    #[error("missing guest field: {0}")]
    MissingGuestField(&'static str),
}

// What to do when a cancellation cannot restore inventory because the
// hotel or room category no longer exists in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestorePolicy {
    /// Transition the booking and skip restoration with a warning.
    SkipSilently,
    /// Transition the booking but surface the failed restore to the caller.
    Strict,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub restore_policy: RestorePolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            restore_policy: RestorePolicy::SkipSilently,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Status transitioned and inventory restored.
    Cancelled,
    /// Booking was not confirmed; nothing changed.
    AlreadySettled,
    /// No booking with that id.
    NotFound,
    /// Status transitioned but the hotel or category is gone, so the
    /// rooms could not be restored (strict policy only).
    RestoreFailed,
}

#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub hotel_id: String,
    pub room_category_id: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
}

/// Aggregates derived from the booking list, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BookingSummary {
    pub total: usize,
    /// Bookings still in the confirmed state.
    pub upcoming: usize,
    /// Cancelled or completed bookings.
    pub settled: usize,
    /// Sum of `total_price` over all non-cancelled bookings.
    pub total_spent: f64,
}

pub struct CatalogStore {
    hotels: Vec<Hotel>,
    bookings: Vec<Booking>,
    config: CatalogConfig,
    booking_seq: u64,
}

impl CatalogStore {
    /// Seeds a store from a fixture snapshot. The snapshot becomes the
    /// live, mutable catalog; `rooms_available` is re-derived so a
    /// hand-edited fixture cannot start out inconsistent.
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self::with_config(hotels, CatalogConfig::default())
    }

    pub fn with_config(mut hotels: Vec<Hotel>, config: CatalogConfig) -> Self {
        for hotel in &mut hotels {
            hotel.recompute_rooms_available();
        }
        Self {
            hotels,
            bookings: Vec::new(),
            config,
            booking_seq: 0,
        }
    }

    pub fn hotel(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Validates, prices and records a booking in one synchronous step.
    ///
    /// Preconditions are checked before any mutation, so a rejected
    /// request leaves both the inventory and the booking list untouched.
    pub fn create_booking(&mut self, request: BookingRequest) -> Result<Booking, BookingError> {
        if request.guests < 1 {
            return Err(BookingError::NoGuests);
        }
        if request.rooms < 1 {
            return Err(BookingError::NoRooms);
        }
        if request.guest_name.trim().is_empty() {
            return Err(BookingError::MissingGuestField("guest_name"));
        }
        if request.guest_email.trim().is_empty() {
            return Err(BookingError::MissingGuestField("guest_email"));
        }
        if request.guest_phone.trim().is_empty() {
            return Err(BookingError::MissingGuestField("guest_phone"));
        }

        let nights = pricing::nights(request.check_in, request.check_out);
        if nights <= 0 {
            return Err(BookingError::CheckoutNotAfterCheckin);
        }

        let hotel = self
            .hotels
            .iter_mut()
            .find(|h| h.id == request.hotel_id)
            .ok_or_else(|| BookingError::UnknownHotel(request.hotel_id.clone()))?;

        let hotel_name = hotel.name.clone();
        let hotel_city = hotel.city.clone();
        let hotel_image = hotel.images.first().cloned().unwrap_or_default();

        let category = hotel
            .category_mut(&request.room_category_id)
            .ok_or_else(|| BookingError::UnknownRoomCategory(request.room_category_id.clone()))?;

        if request.rooms > category.available {
            return Err(BookingError::InsufficientRooms {
                requested: request.rooms,
                available: category.available,
            });
        }

        let quote = PriceQuote::compute(nights as u32, category.price, request.rooms);
        let category_name = category.name.clone();

        // All preconditions hold; apply the mutation. Floored at zero so
        // a stale availability read can never drive the counter negative.
        category.available = category.available.saturating_sub(request.rooms);
        hotel.recompute_rooms_available();

        self.booking_seq += 1;
        let booking = Booking {
            id: format!("b{}-{:04}", Utc::now().timestamp_millis(), self.booking_seq),
            hotel_id: request.hotel_id,
            hotel_name,
            hotel_image,
            hotel_city,
            room_category_id: request.room_category_id,
            room_category: category_name,
            guest_name: request.guest_name,
            guest_email: request.guest_email,
            guest_phone: request.guest_phone,
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests,
            rooms: request.rooms,
            total_price: quote.total,
            taxes: quote.taxes,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };
        self.bookings.push(booking.clone());

        info!(
            booking_id = %booking.id,
            hotel_id = %booking.hotel_id,
            rooms = booking.rooms,
            total_price = booking.total_price,
            "booking confirmed"
        );

        Ok(booking)
    }

    /// Transitions a confirmed booking to cancelled and restores the
    /// decremented availability. Cancelling twice is a no-op the second
    /// time; inventory is never double-restored.
    pub fn cancel_booking(&mut self, booking_id: &str) -> CancelOutcome {
        let Some(booking) = self.bookings.iter_mut().find(|b| b.id == booking_id) else {
            return CancelOutcome::NotFound;
        };
        if booking.status != BookingStatus::Confirmed {
            return CancelOutcome::AlreadySettled;
        }

        booking.status = BookingStatus::Cancelled;
        let hotel_id = booking.hotel_id.clone();
        let category_id = booking.room_category_id.clone();
        let rooms = booking.rooms;

        let restored = self
            .hotels
            .iter_mut()
            .find(|h| h.id == hotel_id)
            .and_then(|hotel| {
                let category = hotel.category_mut(&category_id)?;
                category.available += rooms;
                hotel.recompute_rooms_available();
                Some(())
            })
            .is_some();

        if restored {
            info!(booking_id, hotel_id = %hotel_id, rooms, "booking cancelled");
            CancelOutcome::Cancelled
        } else {
            warn!(
                booking_id,
                hotel_id = %hotel_id,
                category_id = %category_id,
                "inventory restore skipped: hotel or room category missing"
            );
            match self.config.restore_policy {
                RestorePolicy::SkipSilently => CancelOutcome::Cancelled,
                RestorePolicy::Strict => CancelOutcome::RestoreFailed,
            }
        }
    }

    pub fn booking_summary(&self) -> BookingSummary {
        let upcoming = self
            .bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Confirmed)
            .count();
        let total_spent = self
            .bookings
            .iter()
            .filter(|b| b.status != BookingStatus::Cancelled)
            .map(|b| b.total_price)
            .sum();
        BookingSummary {
            total: self.bookings.len(),
            upcoming,
            settled: self.bookings.len() - upcoming,
            total_spent,
        }
    }
}

// Domain data structures for the hotel catalog and booking history

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Property classification used by the catalog and as a search filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PropertyType {
    Hotel,
    Resort,
    Heritage,
    Boutique,
}

// Lifecycle states for a booking. Completed is a terminal state for past
// stays; no operation currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub city: String,
    pub address: String,
    pub price_per_night: f64,
    pub star_rating: u8,
    pub user_rating: f64,
    pub review_count: u32,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub property_type: PropertyType,
    pub rooms_available: u32,
    pub total_rooms: u32,
    pub room_categories: Vec<RoomCategory>,
    pub featured: bool,
}

impl Hotel {
    pub fn category(&self, category_id: &str) -> Option<&RoomCategory> {
        self.room_categories.iter().find(|rc| rc.id == category_id)
    }

    pub(crate) fn category_mut(&mut self, category_id: &str) -> Option<&mut RoomCategory> {
        self.room_categories
            .iter_mut()
            .find(|rc| rc.id == category_id)
    }

    // Largest party a single room in this hotel can host
    pub fn max_guests(&self) -> u32 {
        self.room_categories
            .iter()
            .map(|rc| rc.max_guests)
            .max()
            .unwrap_or(0)
    }

    /// Re-derives `rooms_available` from the per-category counters.
    /// Invariant: `rooms_available == sum(rc.available)` after every mutation.
    pub fn recompute_rooms_available(&mut self) {
        self.rooms_available = self.room_categories.iter().map(|rc| rc.available).sum();
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RoomCategory {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub size: u32,
    pub max_guests: u32,
    pub amenities: Vec<String>,
    pub available: u32,
}

/// A confirmed, cancelled or completed reservation.
///
/// Hotel fields are snapshotted at creation time so booking history stays
/// stable even if the hotel record later changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Booking {
    pub id: String,
    pub hotel_id: String,
    pub hotel_name: String,
    pub hotel_image: String,
    pub hotel_city: String,
    /// Join key for inventory adjustment on cancellation.
    pub room_category_id: String,
    /// Category display name snapshot.
    pub room_category: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
    pub total_price: f64,
    pub taxes: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

// Fixture catalog loading. The seed snapshot is parsed once at session
// start and becomes the live, mutable catalog thereafter.

use thiserror::Error;

use crate::model::Hotel;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// Sample catalog shipped with the crate (stored in the samples directory)
pub const SAMPLE_CATALOG_PATH: &str = "samples/hotel_catalog.json";

/// Parses a catalog snapshot. `rooms_available` is re-derived from the
/// category counters so a hand-edited fixture cannot seed an inconsistent
/// catalog.
pub fn parse_catalog(json: &str) -> Result<Vec<Hotel>, FixtureError> {
    let mut hotels: Vec<Hotel> = serde_json::from_str(json)?;
    for hotel in &mut hotels {
        hotel.recompute_rooms_available();
    }
    Ok(hotels)
}

pub fn load_sample_catalog() -> Result<Vec<Hotel>, FixtureError> {
    let json = std::fs::read_to_string(SAMPLE_CATALOG_PATH)?;
    parse_catalog(&json)
}

// A small catalog for inline testing
pub const SMALL_SAMPLE_CATALOG: &str = r#"[
  {
    "id": "1",
    "name": "The Imperial Palace",
    "description": "A grand heritage hotel.",
    "long_description": "",
    "city": "Delhi",
    "address": "Janpath, Connaught Place, New Delhi",
    "price_per_night": 8500,
    "star_rating": 5,
    "user_rating": 4.8,
    "review_count": 2340,
    "images": ["/images/hotel-delhi.jpg"],
    "amenities": ["Free WiFi", "Pool", "Spa"],
    "property_type": "Heritage",
    "rooms_available": 99,
    "total_rooms": 45,
    "featured": true,
    "room_categories": [
      { "id": "1a", "name": "Deluxe Room", "price": 8500, "size": 38, "max_guests": 2, "amenities": ["AC", "WiFi"], "available": 5 },
      { "id": "1b", "name": "Premium Suite", "price": 14500, "size": 65, "max_guests": 3, "amenities": ["AC", "WiFi", "Balcony"], "available": 3 }
    ]
  },
  {
    "id": "2",
    "name": "Calangute Surf Hotel",
    "description": "A vibrant beachside hotel in North Goa.",
    "long_description": "",
    "city": "Goa",
    "address": "Calangute Beach Road, North Goa",
    "price_per_night": 3800,
    "star_rating": 3,
    "user_rating": 4.3,
    "review_count": 1240,
    "images": ["/images/hotel-goa.jpg"],
    "amenities": ["Free WiFi", "Pool", "Beach Access"],
    "property_type": "Hotel",
    "rooms_available": 15,
    "total_rooms": 35,
    "featured": false,
    "room_categories": [
      { "id": "2a", "name": "Standard Beach Room", "price": 3800, "size": 28, "max_guests": 2, "amenities": ["AC", "WiFi", "Balcony"], "available": 10 },
      { "id": "2b", "name": "Premium Pool View", "price": 5500, "size": 38, "max_guests": 3, "amenities": ["AC", "WiFi", "Pool View"], "available": 5 }
    ]
  }
]"#;

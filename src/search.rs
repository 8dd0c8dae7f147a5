// Search, filter and sort over the hotel catalog.
// Pure derivation: no mutation, deterministic for a given input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Hotel, PropertyType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending price per night.
    PriceLow,
    /// Descending price per night.
    PriceHigh,
    /// Descending user rating.
    Rating,
    /// Featured hotels first, catalog order preserved within each group.
    #[default]
    Recommended,
}

/// User-supplied search criteria. Every field's default means "no filter";
/// the predicates are combined with logical AND.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Case-insensitive exact match against the hotel city.
    pub city: Option<String>,
    /// Hotel passes if its largest room category hosts at least this many
    /// guests. Zero disables the filter.
    pub min_guests: u32,
    /// Inclusive `(low, high)` bounds on `price_per_night`.
    pub price_range: (f64, f64),
    /// Minimum star rating. Zero disables the filter.
    pub min_rating: u8,
    /// Property-type membership; empty set disables the filter.
    pub property_types: Vec<PropertyType>,
    /// Conjunction: every requested amenity must be present.
    pub amenities: Vec<String>,
    pub sort_by: SortKey,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            city: None,
            min_guests: 0,
            price_range: (0.0, f64::MAX),
            min_rating: 0,
            property_types: Vec::new(),
            amenities: Vec::new(),
            sort_by: SortKey::Recommended,
        }
    }
}

pub struct HotelSearchEngine;

impl HotelSearchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Produces an ordered, filtered copy of the catalog. The input slice
    /// is never mutated and ties keep their original catalog order.
    pub fn search(&self, hotels: &[Hotel], criteria: &SearchCriteria) -> Vec<Hotel> {
        let mut result: Vec<Hotel> = hotels
            .iter()
            .filter(|hotel| Self::matches(hotel, criteria))
            .cloned()
            .collect();

        // Vec::sort_by is stable, so equal keys preserve catalog order
        match criteria.sort_by {
            SortKey::PriceLow => result.sort_by(|a, b| {
                a.price_per_night
                    .partial_cmp(&b.price_per_night)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortKey::PriceHigh => result.sort_by(|a, b| {
                b.price_per_night
                    .partial_cmp(&a.price_per_night)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortKey::Rating => result.sort_by(|a, b| {
                b.user_rating
                    .partial_cmp(&a.user_rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortKey::Recommended => result.sort_by_key(|h| !h.featured),
        }

        debug!(
            candidates = hotels.len(),
            matched = result.len(),
            sort = ?criteria.sort_by,
            "catalog search"
        );

        result
    }

    fn matches(hotel: &Hotel, criteria: &SearchCriteria) -> bool {
        if !criteria
            .city
            .as_ref()
            .map_or(true, |city| hotel.city.eq_ignore_ascii_case(city))
        {
            return false;
        }

        if criteria.min_guests > 0 && hotel.max_guests() < criteria.min_guests {
            return false;
        }

        let (low, high) = criteria.price_range;
        if hotel.price_per_night < low || hotel.price_per_night > high {
            return false;
        }

        if criteria.min_rating > 0 && hotel.star_rating < criteria.min_rating {
            return false;
        }

        if !criteria.property_types.is_empty()
            && !criteria.property_types.contains(&hotel.property_type)
        {
            return false;
        }

        if !criteria
            .amenities
            .iter()
            .all(|amenity| hotel.amenities.contains(amenity))
        {
            return false;
        }

        true
    }
}

impl Default for HotelSearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoomCategory;
    use test_case::test_case;

    fn category(max_guests: u32) -> RoomCategory {
        RoomCategory {
            id: "c1".to_string(),
            name: "Room".to_string(),
            price: 5000.0,
            size: 30,
            max_guests,
            amenities: vec![],
            available: 4,
        }
    }

    fn hotel(
        id: &str,
        city: &str,
        price: f64,
        stars: u8,
        rating: f64,
        property_type: PropertyType,
        amenities: &[&str],
        max_guests: u32,
        featured: bool,
    ) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: format!("Hotel {}", id),
            description: String::new(),
            long_description: String::new(),
            city: city.to_string(),
            address: String::new(),
            price_per_night: price,
            star_rating: stars,
            user_rating: rating,
            review_count: 500,
            images: vec![],
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            property_type,
            rooms_available: 4,
            total_rooms: 20,
            room_categories: vec![category(max_guests)],
            featured,
        }
    }

    // Catalog used by the criteria table below:
    //   h1  Delhi   8500  5*  4.8  Heritage  Pool+Spa    4 guests  featured
    //   h2  Mumbai 12000  5*  4.9  Hotel     Pool        2 guests  featured
    //   h3  Delhi   3200  3*  4.2  Hotel     WiFi        2 guests
    //   h4  Goa     6500  4*  4.6  Resort    Pool+Spa    3 guests
    fn catalog() -> Vec<Hotel> {
        vec![
            hotel("h1", "Delhi", 8500.0, 5, 4.8, PropertyType::Heritage, &["Pool", "Spa"], 4, true),
            hotel("h2", "Mumbai", 12000.0, 5, 4.9, PropertyType::Hotel, &["Pool"], 2, true),
            hotel("h3", "Delhi", 3200.0, 3, 4.2, PropertyType::Hotel, &["WiFi"], 2, false),
            hotel("h4", "Goa", 6500.0, 4, 4.6, PropertyType::Resort, &["Pool", "Spa"], 3, false),
        ]
    }

    #[test_case(SearchCriteria { city: Some("delhi".to_string()), ..Default::default() },
        vec!["h1", "h3"]; "#1 city match is case insensitive")]
    #[test_case(SearchCriteria { price_range: (1000.0, 60000.0), ..Default::default() },
        vec!["h1", "h2", "h3", "h4"]; "#2 inclusive price range keeps all in bounds")]
    #[test_case(SearchCriteria { price_range: (3200.0, 8500.0), ..Default::default() },
        vec!["h1", "h3", "h4"]; "#3 price bounds are inclusive")]
    #[test_case(SearchCriteria { amenities: vec!["Pool".to_string(), "Spa".to_string()], ..Default::default() },
        vec!["h1", "h4"]; "#4 amenities are a conjunction")]
    #[test_case(SearchCriteria { min_rating: 4, ..Default::default() },
        vec!["h1", "h2", "h4"]; "#5 minimum star rating")]
    #[test_case(SearchCriteria { property_types: vec![PropertyType::Heritage, PropertyType::Resort], ..Default::default() },
        vec!["h1", "h4"]; "#6 property type membership")]
    #[test_case(SearchCriteria { min_guests: 4, ..Default::default() },
        vec!["h1"]; "#7 min guests uses the largest category per hotel")]
    #[test_case(SearchCriteria { city: Some("Delhi".to_string()), min_rating: 4, amenities: vec!["Pool".to_string()], ..Default::default() },
        vec!["h1"]; "#8 combined filters AND together")]
    fn test_criteria_filtering(criteria: SearchCriteria, expected_ids: Vec<&str>) {
        let engine = HotelSearchEngine::new();
        let results = engine.search(&catalog(), &criteria);
        let ids: Vec<&str> = results.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, expected_ids);
    }

    #[test]
    fn amenity_conjunction_excludes_partial_matches() {
        let engine = HotelSearchEngine::new();
        let criteria = SearchCriteria {
            amenities: vec!["Pool".to_string(), "Spa".to_string()],
            ..Default::default()
        };
        // h2 has only "Pool" and must be excluded
        let results = engine.search(&catalog(), &criteria);
        assert!(results.iter().all(|h| h.id != "h2"));
    }

    #[test]
    fn sort_price_low_orders_ascending() {
        let engine = HotelSearchEngine::new();
        let hotels = vec![
            hotel("a", "Delhi", 8500.0, 5, 4.8, PropertyType::Hotel, &[], 2, false),
            hotel("b", "Mumbai", 12000.0, 5, 4.9, PropertyType::Hotel, &[], 2, false),
            hotel("c", "Delhi", 3200.0, 3, 4.2, PropertyType::Hotel, &[], 2, false),
        ];
        let criteria = SearchCriteria {
            sort_by: SortKey::PriceLow,
            ..Default::default()
        };
        let prices: Vec<f64> = engine
            .search(&hotels, &criteria)
            .iter()
            .map(|h| h.price_per_night)
            .collect();
        assert_eq!(prices, vec![3200.0, 8500.0, 12000.0]);
    }

    #[test]
    fn sort_price_high_orders_descending() {
        let engine = HotelSearchEngine::new();
        let criteria = SearchCriteria {
            sort_by: SortKey::PriceHigh,
            ..Default::default()
        };
        let prices: Vec<f64> = engine
            .search(&catalog(), &criteria)
            .iter()
            .map(|h| h.price_per_night)
            .collect();
        assert_eq!(prices, vec![12000.0, 8500.0, 6500.0, 3200.0]);
    }

    #[test]
    fn sort_rating_orders_by_user_rating() {
        let engine = HotelSearchEngine::new();
        let criteria = SearchCriteria {
            sort_by: SortKey::Rating,
            ..Default::default()
        };
        let ids: Vec<String> = engine
            .search(&catalog(), &criteria)
            .iter()
            .map(|h| h.id.clone())
            .collect();
        assert_eq!(ids, vec!["h2", "h1", "h4", "h3"]);
    }

    #[test]
    fn recommended_is_a_stable_featured_partition() {
        let engine = HotelSearchEngine::new();
        let hotels = vec![
            hotel("a", "Delhi", 1.0, 3, 4.0, PropertyType::Hotel, &[], 2, false),
            hotel("b", "Delhi", 2.0, 3, 4.0, PropertyType::Hotel, &[], 2, true),
            hotel("c", "Delhi", 3.0, 3, 4.0, PropertyType::Hotel, &[], 2, false),
            hotel("d", "Delhi", 4.0, 3, 4.0, PropertyType::Hotel, &[], 2, true),
        ];
        let results = engine.search(&hotels, &SearchCriteria::default());
        let ids: Vec<&str> = results.iter().map(|h| h.id.as_str()).collect();
        // Featured first, original order preserved within each partition
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn search_is_deterministic_and_does_not_mutate_input() {
        let engine = HotelSearchEngine::new();
        let hotels = catalog();
        let snapshot = hotels.clone();
        let criteria = SearchCriteria {
            city: Some("Delhi".to_string()),
            sort_by: SortKey::PriceLow,
            ..Default::default()
        };

        let first = engine.search(&hotels, &criteria);
        let second = engine.search(&hotels, &criteria);
        assert_eq!(first, second);
        assert_eq!(hotels, snapshot);
    }

    #[test]
    fn sort_key_names_round_trip() {
        assert_eq!(serde_json::to_string(&SortKey::PriceLow).unwrap(), "\"price-low\"");
        assert_eq!(
            serde_json::from_str::<SortKey>("\"recommended\"").unwrap(),
            SortKey::Recommended
        );
    }
}

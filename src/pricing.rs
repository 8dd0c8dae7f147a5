// Stay pricing: whole-night calculation and the GST breakdown

use chrono::NaiveDate;

/// Fixed 18% GST applied to the room cost.
pub const GST_RATE: f64 = 0.18;

// Calendar-day difference, not elapsed hours. Negative or zero means the
// stay is invalid and must be rejected by the caller.
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Price breakdown for a stay. Monetary values keep full f64 precision;
/// rounding happens only at presentation time via the `rounded_*` helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub nights: u32,
    pub room_total: f64,
    pub taxes: f64,
    pub total: f64,
}

impl PriceQuote {
    pub fn compute(nights: u32, price_per_night: f64, rooms: u32) -> Self {
        let room_total = nights as f64 * price_per_night * rooms as f64;
        let taxes = room_total * GST_RATE;
        Self {
            nights,
            room_total,
            taxes,
            total: room_total + taxes,
        }
    }

    // Presentation-only rounding to the nearest whole currency unit
    pub fn rounded_total(&self) -> i64 {
        self.total.round() as i64
    }

    pub fn rounded_taxes(&self) -> i64 {
        self.taxes.round() as i64
    }
}

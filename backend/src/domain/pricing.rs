//! Session pricing.
//!
//! `total = round(slot price x duration multiplier + session-type surcharge)`. The multiplier
//! applies uniformly to whatever the slot costs; there is no currency precision beyond
//! rounding to whole rupees.

use serde::{Deserialize, Serialize};
use shared::{catalog, BookingSelection};

/// Breakdown of a computed price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Slot price, or the trainer's base price when no slot is chosen
    pub unit_price: u32,
    pub multiplier: f64,
    pub surcharge: u32,
    pub total: u32,
}

/// Extract the digits of a display price: "₹1,200" -> 1200
pub fn parse_display_price(label: &str) -> Option<u32> {
    let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Combine the price parts into a rounded total.
///
/// A missing or zero slot price falls back to `base_price`; a missing multiplier counts
/// as 1 and a missing surcharge as 0.
pub fn calculate_total_price(
    time_slot_price: Option<u32>,
    base_price: u32,
    duration_multiplier: Option<f64>,
    session_surcharge: Option<u32>,
) -> u32 {
    let unit_price = time_slot_price.filter(|price| *price > 0).unwrap_or(base_price);
    let multiplier = duration_multiplier.unwrap_or(1.0);
    let surcharge = session_surcharge.unwrap_or(0);

    (unit_price as f64 * multiplier + surcharge as f64).round() as u32
}

/// Render an amount the way the booking summary shows it: "₹2300"
pub fn format_rupees(amount: u32) -> String {
    format!("₹{}", amount)
}

/// Prices a booking selection against the static catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingService {
    default_base_price: u32,
}

impl PricingService {
    /// Create a pricing service with the fallback base price used for trainers whose
    /// display price cannot be parsed
    pub fn new(default_base_price: u32) -> Self {
        Self { default_base_price }
    }

    /// Base price for a trainer's display price label
    pub fn base_price(&self, trainer_price_label: &str) -> u32 {
        parse_display_price(trainer_price_label).unwrap_or(self.default_base_price)
    }

    /// Quote a selection. Unknown slot, duration or session type ids fall back to the
    /// base price, x1 and +0 respectively.
    pub fn quote(&self, trainer_price_label: &str, selection: &BookingSelection) -> PriceQuote {
        let base_price = self.base_price(trainer_price_label);
        let slot_price = catalog::find_time_slot(&selection.time).map(|slot| slot.price);
        let multiplier = catalog::find_duration(&selection.duration_id).map(|d| d.multiplier);
        let surcharge = catalog::find_session_type(&selection.session_type_id).map(|s| s.surcharge);

        PriceQuote {
            unit_price: slot_price.filter(|price| *price > 0).unwrap_or(base_price),
            multiplier: multiplier.unwrap_or(1.0),
            surcharge: surcharge.unwrap_or(0),
            total: calculate_total_price(slot_price, base_price, multiplier, surcharge),
        }
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new(1200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(time: &str, duration: &str, session_type: &str) -> BookingSelection {
        BookingSelection {
            time: time.to_string(),
            duration_id: duration.to_string(),
            session_type_id: session_type.to_string(),
            ..BookingSelection::default()
        }
    }

    #[test]
    fn test_parse_display_price() {
        assert_eq!(parse_display_price("₹1,200"), Some(1200));
        assert_eq!(parse_display_price("₹800"), Some(800));
        assert_eq!(parse_display_price("1 800 INR"), Some(1800));
        assert_eq!(parse_display_price("free"), None);
        assert_eq!(parse_display_price(""), None);
    }

    #[test]
    fn test_base_price_with_ninety_minute_couple_session() {
        // no slot chosen: base 1200 x 1.5 + 500
        assert_eq!(calculate_total_price(None, 1200, Some(1.5), Some(500)), 2300);

        let quote = PricingService::default().quote("₹1,200", &selection("", "90", "couple"));
        assert_eq!(quote.unit_price, 1200);
        assert_eq!(quote.total, 2300);
    }

    #[test]
    fn test_slot_price_overrides_trainer_price() {
        let service = PricingService::default();

        // evening slot costs 1500 regardless of the trainer's display price
        let quote = service.quote("₹1,000", &selection("07:00 PM", "60", "individual"));
        assert_eq!(quote.unit_price, 1500);
        assert_eq!(quote.total, 1500);

        let quote = service.quote("₹1,800", &selection("06:00 PM", "120", "group"));
        assert_eq!(quote.total, 1500 * 2 + 800);
    }

    #[test]
    fn test_defaults_when_parts_missing() {
        assert_eq!(calculate_total_price(None, 1000, None, None), 1000);
        assert_eq!(calculate_total_price(Some(0), 1000, None, None), 1000);

        let service = PricingService::new(900);
        assert_eq!(service.base_price("Contact us"), 900);
        let quote = service.quote("Contact us", &selection("", "45", "solo"));
        assert_eq!(quote.multiplier, 1.0);
        assert_eq!(quote.surcharge, 0);
        assert_eq!(quote.total, 900);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(calculate_total_price(Some(1001), 0, Some(1.5), None), 1502); // 1501.5
        assert_eq!(calculate_total_price(Some(999), 0, Some(1.5), Some(1)), 1500); // 1499.5
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(2300), "₹2300");
    }
}

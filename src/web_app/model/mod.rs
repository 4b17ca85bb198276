// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default page size for listing searches
pub const DEFAULT_RESULT_LIMIT: u32 = 50;

/// Source sites with dedicated header counters
pub const KNOWN_SOURCES: [&str; 3] = ["avito", "farpost", "cian"];

/// Human-readable label for a source site key
///
/// Unknown keys pass through verbatim so new sources show up
/// without a frontend deploy.
pub fn source_label(key: &str) -> &str {
    match key {
        "avito" => "Avito",
        "farpost" => "FarPost",
        "cian" => "CIAN",
        other => other,
    }
}

/// Format a price with thousands separated by spaces (1234567 -> "1 234 567")
pub fn format_price(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// Canonical listing as returned by search (one deduplicated rental unit)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct ListingSummary {
    pub id: i32,
    pub canonical_title: String,
    pub canonical_address: String,
    pub district: Option<String>,
    pub rooms: i32,
    pub area: f64,
    pub property_type: String,
    pub min_price: i64,
    pub image_url: Option<String>,
    pub offers_count: i64,
}

/// One source site's listing instance of a canonical product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Offer {
    pub id: i32,
    pub website_name: String,
    pub title: String,
    pub price: i64,
    pub url: String,
    pub date_parsed: chrono::NaiveDateTime,
}

/// Free-form key/value attribute attached to a listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct ListingAttribute {
    pub attribute_name: String,
    pub attribute_value: String,
}

/// Full listing detail with every cross-site offer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub id: i32,
    pub canonical_title: String,
    pub canonical_address: String,
    pub district: Option<String>,
    pub description: Option<String>,
    pub rooms: i32,
    pub area: f64,
    pub property_type: String,
    pub min_price: i64,
    pub image_url: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub offers: Vec<Offer>,
    pub attributes: Vec<ListingAttribute>,
}

/// Aggregate counters shown in the page header
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_products: i64,
    pub total_offers: i64,
    pub offers_by_source: HashMap<String, i64>,
}

/// Typed search filters; `None` means "unset", adds no predicate, and is
/// omitted from the serialized request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<i32>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            min_price: None,
            max_price: None,
            min_area: None,
            max_area: None,
            rooms: None,
            limit: DEFAULT_RESULT_LIMIT,
            offset: 0,
        }
    }
}

impl SearchFilters {
    /// True when no filter field constrains the search
    pub fn is_unfiltered(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_area.is_none()
            && self.max_area.is_none()
            && self.rooms.is_none()
    }
}

/// Raw filter form fields as typed by the user
///
/// Kept as strings so the inputs can hold partial text; `to_filters`
/// is the single place raw input becomes a request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterInputs {
    pub min_price: String,
    pub max_price: String,
    pub min_area: String,
    pub max_area: String,
    pub rooms: String,
}

fn parse_field<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

impl FilterInputs {
    /// Parse into typed filters
    ///
    /// Empty, whitespace-only, and unparseable fields are dropped so they
    /// never reach the outgoing request. Limit is always the default.
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters {
            min_price: parse_field(&self.min_price),
            max_price: parse_field(&self.max_price),
            min_area: parse_field(&self.min_area),
            max_area: parse_field(&self.max_area),
            rooms: parse_field(&self.rooms),
            ..SearchFilters::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_price.trim().is_empty()
            && self.max_price.trim().is_empty()
            && self.min_area.trim().is_empty()
            && self.max_area.trim().is_empty()
            && self.rooms.trim().is_empty()
    }
}

/// Search response: one page of listings plus the matching total
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ListingSummary>,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label_known_keys() {
        assert_eq!(source_label("avito"), "Avito");
        assert_eq!(source_label("farpost"), "FarPost");
        assert_eq!(source_label("cian"), "CIAN");
    }

    #[test]
    fn test_source_label_unknown_passthrough() {
        assert_eq!(source_label("zillow"), "zillow");
        assert_eq!(source_label(""), "");
    }

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(5), "5");
        assert_eq!(format_price(42), "42");
        assert_eq!(format_price(950), "950");
        assert_eq!(format_price(1000), "1 000");
        assert_eq!(format_price(45000), "45 000");
        assert_eq!(format_price(1234567), "1 234 567");
        assert_eq!(format_price(1000000000), "1 000 000 000");
    }

    #[test]
    fn test_format_price_zero_and_negative() {
        assert_eq!(format_price(0), "0");
        // Prices are never negative in practice, but the formatter
        // must not garble a bad value
        assert_eq!(format_price(-1234), "-1 234");
    }

    #[test]
    fn test_search_filters_default() {
        let filters = SearchFilters::default();
        assert!(filters.is_unfiltered());
        assert_eq!(filters.limit, DEFAULT_RESULT_LIMIT);
        assert_eq!(filters.offset, 0);
    }

    #[test]
    fn test_filter_inputs_empty_fields_are_dropped() {
        let inputs = FilterInputs::default();
        assert!(inputs.is_empty());

        let filters = inputs.to_filters();
        assert!(filters.is_unfiltered());
        assert_eq!(filters.limit, 50);
    }

    #[test]
    fn test_filter_inputs_whitespace_is_dropped() {
        let inputs = FilterInputs {
            min_price: "   ".to_string(),
            ..FilterInputs::default()
        };
        assert!(inputs.is_empty());
        assert_eq!(inputs.to_filters().min_price, None);
    }

    #[test]
    fn test_filter_inputs_parse_valid_values() {
        let inputs = FilterInputs {
            min_price: "15000".to_string(),
            max_price: " 45000 ".to_string(),
            min_area: "30.5".to_string(),
            max_area: "80".to_string(),
            rooms: "2".to_string(),
        };

        let filters = inputs.to_filters();
        assert_eq!(filters.min_price, Some(15000));
        assert_eq!(filters.max_price, Some(45000));
        assert_eq!(filters.min_area, Some(30.5));
        assert_eq!(filters.max_area, Some(80.0));
        assert_eq!(filters.rooms, Some(2));
        assert_eq!(filters.limit, 50);
    }

    #[test]
    fn test_filter_inputs_garbage_is_dropped() {
        let inputs = FilterInputs {
            min_price: "cheap".to_string(),
            rooms: "2.5".to_string(),
            ..FilterInputs::default()
        };

        let filters = inputs.to_filters();
        assert_eq!(filters.min_price, None);
        assert_eq!(filters.rooms, None);
    }

    #[test]
    fn test_stats_serialization() {
        let mut offers_by_source = HashMap::new();
        offers_by_source.insert("avito".to_string(), 120);
        offers_by_source.insert("farpost".to_string(), 80);

        let stats = Stats {
            total_products: 150,
            total_offers: 200,
            offers_by_source,
        };

        let json = serde_json::to_string(&stats).unwrap();
        let decoded: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.total_products, 150);
        assert_eq!(decoded.offers_by_source.get("avito"), Some(&120));
        assert_eq!(decoded.offers_by_source.get("cian"), None);
    }

    #[test]
    fn test_remote_text_is_carried_verbatim() {
        // Titles and addresses are rendered as text nodes; the model must
        // never mangle or pre-escape markup-looking input
        let listing = ListingSummary {
            id: 1,
            canonical_title: "<script>alert('x')</script> & co".to_string(),
            canonical_address: "Svetlanskaya 1 <b>center</b>".to_string(),
            district: None,
            rooms: 1,
            area: 25.0,
            property_type: "apartment".to_string(),
            min_price: 20000,
            image_url: None,
            offers_count: 1,
        };

        let json = serde_json::to_string(&listing).unwrap();
        let decoded: ListingSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.canonical_title, listing.canonical_title);
        assert_eq!(decoded.canonical_address, listing.canonical_address);
    }
}

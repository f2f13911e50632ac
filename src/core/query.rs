//! Query parameter building for `flickr.photos.search`
//!
//! Turns raw user input (a phrase, or latitude/longitude strings) into the
//! full parameter set sent to Flickr. Invalid input never produces a partial
//! parameter set.

use crate::error::UtilsError;
use std::fmt;

pub const METHOD_NAME: &str = "flickr.photos.search";
pub const EXTRAS: &str = "url_m";
pub const DATA_FORMAT: &str = "json";
pub const NO_JSON_CALLBACK: &str = "1";

const LONGITUDE_LIMIT: i32 = 180;
const LATITUDE_LIMIT: i32 = 90;

/// What the user asked to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    Phrase(String),
    Location { latitude: String, longitude: String },
}

impl SearchInput {
    pub fn phrase(text: impl Into<String>) -> Self {
        SearchInput::Phrase(text.into())
    }

    pub fn location(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        SearchInput::Location {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// Rectangle constraining a geographic search, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_lon: i32,
    pub min_lat: i32,
    pub max_lon: i32,
    pub max_lat: i32,
}

impl BoundingBox {
    /// Build the box spanned by the given latitude/longitude magnitudes.
    ///
    /// The minimum corner is the negated magnitude and the maximum corner the
    /// magnitude itself, so `lat=10, lon=20` yields `-20,-10,20,10`. Negative
    /// input is taken by magnitude rather than passed through as the maximum
    /// corner, so `lat=-10` spans the same box as `lat=10` instead of an
    /// inverted one.
    pub fn from_input(latitude: &str, longitude: &str) -> Result<Self, UtilsError> {
        let latitude = latitude.trim();
        let longitude = longitude.trim();

        if latitude.is_empty() || longitude.is_empty() {
            return Err(validation("Latitude/Longitude Empty."));
        }

        let lat = parse_degrees(latitude, "Latitude")?;
        let lon = parse_degrees(longitude, "Longitude")?;

        if !(-LONGITUDE_LIMIT..=LONGITUDE_LIMIT).contains(&lon) {
            return Err(validation(&format!(
                "Longitude must be between -{} and {}.",
                LONGITUDE_LIMIT, LONGITUDE_LIMIT
            )));
        }
        if !(-LATITUDE_LIMIT..=LATITUDE_LIMIT).contains(&lat) {
            return Err(validation(&format!(
                "Latitude must be between -{} and {}.",
                LATITUDE_LIMIT, LATITUDE_LIMIT
            )));
        }

        let lon = lon.abs();
        let lat = lat.abs();

        Ok(Self {
            min_lon: -lon,
            min_lat: -lat,
            max_lon: lon,
            max_lat: lat,
        })
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

fn parse_degrees(value: &str, label: &str) -> Result<i32, UtilsError> {
    value
        .parse::<i32>()
        .map_err(|_| validation(&format!("{} must be a whole number, got '{}'.", label, value)))
}

fn validation(message: &str) -> UtilsError {
    UtilsError::Validation {
        message: message.to_string(),
    }
}

/// Ordered `key=value` parameters for one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(String, String)>,
}

impl QueryParameters {
    /// Build the full parameter set for a search, validating the input first.
    pub fn build(api_key: &str, input: &SearchInput) -> Result<Self, UtilsError> {
        if api_key.trim().is_empty() {
            return Err(validation("API key must be set before searching."));
        }

        let (search_key, search_value) = match input {
            SearchInput::Phrase(text) => {
                if text.trim().is_empty() {
                    return Err(validation("Phrase Empty."));
                }
                ("text", text.clone())
            }
            SearchInput::Location {
                latitude,
                longitude,
            } => ("bbox", BoundingBox::from_input(latitude, longitude)?.to_string()),
        };

        let pairs = vec![
            ("method", METHOD_NAME.to_string()),
            ("api_key", api_key.to_string()),
            (search_key, search_value),
            ("extras", EXTRAS.to_string()),
            ("format", DATA_FORMAT.to_string()),
            ("nojsoncallback", NO_JSON_CALLBACK.to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Ok(Self { pairs })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The phrase or bounding box this search was for.
    pub fn search_term(&self) -> &str {
        self.get("text").or_else(|| self.get("bbox")).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_parameters() {
        let params = QueryParameters::build("abc123", &SearchInput::phrase("cat")).unwrap();
        assert_eq!(params.get("method"), Some("flickr.photos.search"));
        assert_eq!(params.get("api_key"), Some("abc123"));
        assert_eq!(params.get("text"), Some("cat"));
        assert_eq!(params.get("extras"), Some("url_m"));
        assert_eq!(params.get("format"), Some("json"));
        assert_eq!(params.get("nojsoncallback"), Some("1"));
        assert!(!params.contains_key("bbox"));
        assert_eq!(params.len(), 6);
        assert_eq!(params.search_term(), "cat");
    }

    #[test]
    fn test_location_parameters() {
        let params =
            QueryParameters::build("abc123", &SearchInput::location("10", "20")).unwrap();
        assert_eq!(params.get("bbox"), Some("-20,-10,20,10"));
        assert!(!params.contains_key("text"));
        assert_eq!(params.search_term(), "-20,-10,20,10");
    }

    #[test]
    fn test_parameter_values_are_non_empty() {
        let params = QueryParameters::build("key", &SearchInput::location("0", "0")).unwrap();
        assert!(params.iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn test_empty_phrase_rejected() {
        let result = QueryParameters::build("key", &SearchInput::phrase(""));
        assert!(matches!(
            result,
            Err(UtilsError::Validation { ref message }) if message == "Phrase Empty."
        ));
        assert!(QueryParameters::build("key", &SearchInput::phrase("   ")).is_err());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(QueryParameters::build("", &SearchInput::phrase("cat")).is_err());
    }

    #[test]
    fn test_bounding_box_limits() {
        assert!(BoundingBox::from_input("90", "180").is_ok());
        assert!(BoundingBox::from_input("-90", "-180").is_ok());
        assert!(BoundingBox::from_input("91", "0").is_err());
        assert!(BoundingBox::from_input("0", "181").is_err());
        assert!(BoundingBox::from_input("-91", "0").is_err());
        assert!(BoundingBox::from_input("0", "-181").is_err());
    }

    #[test]
    fn test_bounding_box_empty_or_malformed() {
        assert!(BoundingBox::from_input("", "10").is_err());
        assert!(BoundingBox::from_input("10", " ").is_err());
        assert!(BoundingBox::from_input("north", "10").is_err());
        assert!(BoundingBox::from_input("10.5", "10").is_err());
    }

    #[test]
    fn test_bounding_box_corners() {
        let bbox = BoundingBox::from_input("45", "120").unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                min_lon: -120,
                min_lat: -45,
                max_lon: 120,
                max_lat: 45,
            }
        );
        assert_eq!(bbox.to_string(), "-120,-45,120,45");

        // Negative input is treated as a magnitude
        let bbox = BoundingBox::from_input("-45", "-120").unwrap();
        assert_eq!(bbox.to_string(), "-120,-45,120,45");
    }
}

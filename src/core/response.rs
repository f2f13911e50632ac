//! Guard chain over a raw `flickr.photos.search` response
//!
//! Checks run in a fixed order and the first failure wins: transport error,
//! HTTP status, empty body, JSON decoding, `stat`, `photos.photo` shape, and
//! finally the result count.

use crate::api::client::RawResponse;
use crate::api::models::{FlickrFailure, PhotoRecord, count_from_value};
use crate::error::SearchError;
use crate::storage::config::CountField;
use serde_json::Value;

pub const STAT_OK: &str = "ok";

/// Successful outcome of the guard chain.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSearch {
    Photos { count: u64, photos: Vec<PhotoRecord> },
    /// Count field absent, non-numeric or zero. Not an error.
    NoResults,
}

pub fn parse_search_response(
    outcome: Result<RawResponse, SearchError>,
    count_field: CountField,
) -> Result<ParsedSearch, SearchError> {
    let raw = outcome?;

    if !(200..=299).contains(&raw.status) {
        return Err(SearchError::HttpStatus {
            status: raw.status,
            endpoint: raw.endpoint,
        });
    }

    if raw.body.is_empty() {
        return Err(SearchError::EmptyBody {
            endpoint: raw.endpoint,
        });
    }

    let parsed: Value = serde_json::from_slice(&raw.body).map_err(|e| SearchError::JsonDecode {
        raw: String::from_utf8_lossy(&raw.body).into_owned(),
        message: e.to_string(),
    })?;

    let stat = parsed.get("stat").and_then(Value::as_str);
    if stat != Some(STAT_OK) {
        let failure: FlickrFailure = serde_json::from_value(parsed.clone()).unwrap_or_default();
        return Err(SearchError::ApiStatus {
            stat: failure.stat.unwrap_or_default(),
            code: failure.code,
            message: failure
                .message
                .unwrap_or_else(|| "no error message returned".to_string()),
            body: parsed.to_string(),
        });
    }

    let photos = parsed.get("photos").and_then(Value::as_object);
    let photo_array = photos
        .and_then(|photos| photos.get("photo"))
        .and_then(Value::as_array);

    let (photos, photo_array) = match (photos, photo_array) {
        (Some(photos), Some(array)) => (photos, array),
        _ => {
            return Err(SearchError::MissingField {
                field: "photos.photo".to_string(),
                context: parsed.to_string(),
            });
        }
    };

    let count = photos
        .get(count_field.key())
        .and_then(count_from_value)
        .unwrap_or(0);

    if count == 0 {
        log::info!("Search returned no photos ({} = 0)", count_field.key());
        return Ok(ParsedSearch::NoResults);
    }

    Ok(ParsedSearch::Photos {
        count,
        photos: photo_array.iter().map(PhotoRecord::from_value).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: u16, body: &str) -> Result<RawResponse, SearchError> {
        Ok(RawResponse {
            status,
            body: body.as_bytes().to_vec(),
            endpoint: "flickr.photos.search".to_string(),
        })
    }

    fn ok_body(total: Value, pages: Value) -> String {
        json!({
            "photos": {
                "page": 1,
                "pages": pages,
                "perpage": 100,
                "total": total,
                "photo": [
                    { "id": "1", "title": "one", "url_m": "https://img.test/1.jpg" },
                    { "id": "2", "title": "two", "url_m": "https://img.test/2.jpg" }
                ]
            },
            "stat": "ok"
        })
        .to_string()
    }

    #[test]
    fn test_transport_error_passes_through() {
        let err = SearchError::Transport {
            endpoint: "e".to_string(),
            message: "connection refused".to_string(),
        };
        let result = parse_search_response(Err(err.clone()), CountField::Total);
        assert_eq!(result, Err(err));
    }

    #[test]
    fn test_non_2xx_status() {
        let result = parse_search_response(raw(500, "{}"), CountField::Total);
        assert!(matches!(result, Err(SearchError::HttpStatus { status: 500, .. })));

        let result = parse_search_response(raw(199, "{}"), CountField::Total);
        assert!(matches!(result, Err(SearchError::HttpStatus { status: 199, .. })));
    }

    #[test]
    fn test_empty_body() {
        let result = parse_search_response(raw(200, ""), CountField::Total);
        assert!(matches!(result, Err(SearchError::EmptyBody { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_search_response(raw(200, "jsonFlickrApi({})"), CountField::Total);
        match result {
            Err(SearchError::JsonDecode { raw, .. }) => assert_eq!(raw, "jsonFlickrApi({})"),
            other => panic!("Expected JsonDecode error, got {:?}", other),
        }
    }

    #[test]
    fn test_stat_fail() {
        let body = r#"{"stat":"fail","code":100,"message":"Invalid API Key (Key has invalid format)"}"#;
        let result = parse_search_response(raw(200, body), CountField::Total);
        match result {
            Err(SearchError::ApiStatus {
                stat,
                code,
                message,
                ..
            }) => {
                assert_eq!(stat, "fail");
                assert_eq!(code, Some(100));
                assert!(message.contains("Invalid API Key"));
            }
            other => panic!("Expected ApiStatus error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_stat() {
        let result = parse_search_response(raw(200, r#"{"photos":{}}"#), CountField::Total);
        assert!(matches!(result, Err(SearchError::ApiStatus { .. })));

        // A bare JSON fragment has no stat either
        let result = parse_search_response(raw(200, "42"), CountField::Total);
        assert!(matches!(result, Err(SearchError::ApiStatus { .. })));
    }

    #[test]
    fn test_missing_photo_list() {
        let result = parse_search_response(raw(200, r#"{"stat":"ok"}"#), CountField::Total);
        assert!(matches!(
            result,
            Err(SearchError::MissingField { ref field, .. }) if field == "photos.photo"
        ));

        let result = parse_search_response(
            raw(200, r#"{"stat":"ok","photos":{"photo":"nope"}}"#),
            CountField::Total,
        );
        assert!(matches!(result, Err(SearchError::MissingField { .. })));
    }

    #[test]
    fn test_zero_total_is_no_results() {
        let body = ok_body(json!("0"), json!(0));
        assert_eq!(
            parse_search_response(raw(200, &body), CountField::Total),
            Ok(ParsedSearch::NoResults)
        );
        assert_eq!(
            parse_search_response(raw(200, &body), CountField::Pages),
            Ok(ParsedSearch::NoResults)
        );
    }

    #[test]
    fn test_non_numeric_count_is_no_results() {
        let body = ok_body(json!("lots"), json!(null));
        assert_eq!(
            parse_search_response(raw(200, &body), CountField::Total),
            Ok(ParsedSearch::NoResults)
        );
        assert_eq!(
            parse_search_response(raw(200, &body), CountField::Pages),
            Ok(ParsedSearch::NoResults)
        );
    }

    #[test]
    fn test_photos_parsed() {
        let body = ok_body(json!("2"), json!(1));
        match parse_search_response(raw(200, &body), CountField::Total) {
            Ok(ParsedSearch::Photos { count, photos }) => {
                assert_eq!(count, 2);
                assert_eq!(photos.len(), 2);
                assert_eq!(photos[1].title.as_deref(), Some("two"));
            }
            other => panic!("Expected photos, got {:?}", other),
        }

        match parse_search_response(raw(200, &body), CountField::Pages) {
            Ok(ParsedSearch::Photos { count, .. }) => assert_eq!(count, 1),
            other => panic!("Expected photos, got {:?}", other),
        }
    }
}

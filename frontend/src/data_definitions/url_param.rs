//! URL parameter helpers and types.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


// Route segments can carry any type that implements Display, FromStr and
// Default; this wrapper provides those over CBOR + base64.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// Display the value in a way that can be parsed back by FromStr
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

// Parse the value from a string that was created by Display
impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(UrlParamParseError::DecodeError)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(UrlParamParseError::CiboriumError)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use common::product_filters::ProductFilterState;

    use super::*;

    #[test]
    fn filter_state_survives_the_url_round_trip() {
        let filters = ProductFilterState {
            name: "Shoes".to_string(),
            product_types: vec!["pt-1".to_string(), "pt-2".to_string()],
            price_min: "10".to_string(),
            ..Default::default()
        };
        let segment = UrlParam::from(filters.clone()).to_string();
        assert!(!segment.is_empty());
        let parsed: UrlParam<ProductFilterState> = segment.parse().unwrap();
        assert_eq!(parsed.0, filters);
    }

    #[test]
    fn optional_cursor_round_trips_both_ways() {
        let none: UrlParam<Option<String>> = UrlParam::from(None);
        let parsed: UrlParam<Option<String>> = none.to_string().parse().unwrap();
        assert_eq!(parsed.0, None);

        let some = UrlParam::from(Some("YXJyYXk6MTE=".to_string()));
        let parsed: UrlParam<Option<String>> = some.to_string().parse().unwrap();
        assert_eq!(parsed.0.as_deref(), Some("YXJyYXk6MTE="));
    }

    #[test]
    fn garbage_segments_are_rejected() {
        let result = "not/base64!!".parse::<UrlParam<ProductFilterState>>();
        assert!(result.is_err());
    }
}

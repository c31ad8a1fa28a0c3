use std::env;

use promoshelf_client::client::{DEFAULT_BASE_URL, DEFAULT_SHELF_PATH};
use promoshelf_core::shelf::FilterCriteria;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the shelf host
    pub shelf_base_url: String,
    /// Path of the shelf document relative to the base URL (default: "shelf.json")
    pub shelf_path: String,
    /// Distance filter to start from, if one was saved
    pub distance_km: Option<f64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SHELF_BASE_URL` - Base URL of the shelf host
    /// - `SHELF_PATH` - Shelf document path (default: "shelf.json")
    /// - `SHELF_DISTANCE_KM` - Initial distance filter (default: unset)
    pub fn from_env() -> Self {
        Self {
            shelf_base_url: env::var("SHELF_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            shelf_path: env::var("SHELF_PATH").unwrap_or_else(|_| DEFAULT_SHELF_PATH.to_string()),
            distance_km: env::var("SHELF_DISTANCE_KM")
                .ok()
                .and_then(|v| parse_distance(&v).ok()),
        }
    }

    /// Filter the list state should start from.
    pub fn initial_filter(&self) -> FilterCriteria {
        match self.distance_km {
            Some(distance_km) if distance_km.is_finite() => {
                FilterCriteria::default().with_distance(distance_km)
            }
            _ => FilterCriteria::default(),
        }
    }
}

/// Parse a distance in kilometers, rejecting values that are not finite.
pub fn parse_distance(value: &str) -> Result<f64, String> {
    let distance_km: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid distance `{value}`: {e}"))?;
    if !distance_km.is_finite() {
        return Err(format!("distance must be a finite number, got `{value}`"));
    }
    Ok(distance_km)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

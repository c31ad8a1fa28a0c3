use serde::{Deserialize, Serialize};

use super::types::Brochure;

/// Distance applied when no filter has been chosen.
pub const DEFAULT_DISTANCE_KM: f64 = 5.0;

/// Upper bound offered to the user when picking a distance.
pub const MAX_DISTANCE_KM: f64 = 9.0;

/// Filter selection for the brochure list.
///
/// Equality compares distances with [`f64::total_cmp`], so a criteria value
/// always equals itself, NaN included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub distance_km: f64,
    pub max_distance_km: f64,
}

impl FilterCriteria {
    /// Returns a copy with the distance replaced.
    pub fn with_distance(self, distance_km: f64) -> Self {
        Self {
            distance_km,
            ..self
        }
    }

    /// Returns true when the distance differs from the default.
    pub fn has_active_filter(&self) -> bool {
        self.distance_km != DEFAULT_DISTANCE_KM
    }
}

impl PartialEq for FilterCriteria {
    fn eq(&self, other: &Self) -> bool {
        self.distance_km.total_cmp(&other.distance_km).is_eq()
            && self.max_distance_km.total_cmp(&other.max_distance_km).is_eq()
    }
}

impl Eq for FilterCriteria {}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            distance_km: DEFAULT_DISTANCE_KM,
            max_distance_km: MAX_DISTANCE_KM,
        }
    }
}

/// Returns true if the brochure passes a distance threshold.
///
/// A threshold of zero or below disables the filter. Otherwise brochures
/// without a known distance never pass.
pub fn within_distance(brochure: &Brochure, distance_km: f64) -> bool {
    if distance_km > 0.0 {
        brochure.distance.is_some_and(|d| d <= distance_km)
    } else {
        true
    }
}

/// Keeps the brochures within `distance_km`, preserving order.
pub fn apply_distance_filter(brochures: Vec<Brochure>, distance_km: f64) -> Vec<Brochure> {
    if distance_km <= 0.0 {
        return brochures;
    }
    brochures
        .into_iter()
        .filter(|brochure| within_distance(brochure, distance_km))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Brochure> {
        vec![
            Brochure::new(1, "A").with_distance(1.0),
            Brochure::new(2, "B").with_distance(5.0),
            Brochure::new(3, "C").with_distance(10.0),
            Brochure::new(4, "D"),
            Brochure::new(5, "E").with_distance(100.0),
        ]
    }

    #[test]
    fn test_zero_threshold_is_passthrough() {
        assert_eq!(apply_distance_filter(sample(), 0.0), sample());
    }

    #[test]
    fn test_negative_threshold_is_passthrough() {
        assert_eq!(apply_distance_filter(sample(), -10.0), sample());
    }

    #[test]
    fn test_positive_threshold_is_inclusive() {
        let filtered = apply_distance_filter(sample(), 5.0);

        let ids: Vec<i64> = filtered.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_absent_distance_excluded_when_active() {
        let filtered = apply_distance_filter(sample(), 1000.0);

        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().all(|b| b.distance.is_some()));
    }

    #[test]
    fn test_keeps_duplicates_and_order() {
        let brochures = vec![
            Brochure::new(2, "B").with_distance(2.0),
            Brochure::new(1, "A").with_distance(1.0),
            Brochure::new(2, "B").with_distance(2.0),
        ];

        let filtered = apply_distance_filter(brochures.clone(), 3.0);

        assert_eq!(filtered, brochures);
    }

    #[test]
    fn test_filter_criteria_defaults() {
        let criteria = FilterCriteria::default();

        assert_eq!(criteria.distance_km, 5.0);
        assert_eq!(criteria.max_distance_km, 9.0);
        assert!(!criteria.has_active_filter());
    }

    #[test]
    fn test_filter_criteria_with_distance() {
        let criteria = FilterCriteria::default().with_distance(3.0);

        assert_eq!(criteria.distance_km, 3.0);
        assert_eq!(criteria.max_distance_km, MAX_DISTANCE_KM);
        assert!(criteria.has_active_filter());
        assert_ne!(criteria, FilterCriteria::default());
        assert_eq!(criteria.with_distance(DEFAULT_DISTANCE_KM), FilterCriteria::default());
    }

    #[test]
    fn test_filter_criteria_equality_is_reflexive_for_nan() {
        let criteria = FilterCriteria::default().with_distance(f64::NAN);

        assert_eq!(criteria, criteria);
        assert_ne!(criteria, FilterCriteria::default());
    }
}

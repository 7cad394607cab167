use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    BOUND_GOOD, BOUND_MODERATE, BOUND_UNHEALTHY, BOUND_UNHEALTHY_SENSITIVE, BOUND_VERY_UNHEALTHY,
};

/// AQI severity categories, in ascending order of severity.
///
/// Bounds are contiguous and inclusive at the upper edge: an AQI of
/// exactly 50 is Good, 51 is Moderate. Hazardous is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Inclusive upper AQI bound, `None` for the open-ended Hazardous band.
    pub fn upper_bound(&self) -> Option<u32> {
        match self {
            AqiCategory::Good => Some(BOUND_GOOD),
            AqiCategory::Moderate => Some(BOUND_MODERATE),
            AqiCategory::UnhealthyForSensitiveGroups => Some(BOUND_UNHEALTHY_SENSITIVE),
            AqiCategory::Unhealthy => Some(BOUND_UNHEALTHY),
            AqiCategory::VeryUnhealthy => Some(BOUND_VERY_UNHEALTHY),
            AqiCategory::Hazardous => None,
        }
    }

    /// Severity rank, 0 (Good) through 5 (Hazardous).
    pub fn severity_rank(&self) -> u8 {
        *self as u8
    }

    pub fn is_unhealthy(&self) -> bool {
        *self >= AqiCategory::UnhealthyForSensitiveGroups
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_contiguous_and_increasing() {
        let bounds: Vec<u32> = AqiCategory::ALL
            .iter()
            .filter_map(|c| c.upper_bound())
            .collect();
        assert_eq!(bounds, vec![50, 100, 150, 200, 300]);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(AqiCategory::Hazardous.upper_bound(), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(AqiCategory::Good < AqiCategory::Moderate);
        assert!(AqiCategory::VeryUnhealthy < AqiCategory::Hazardous);
        assert_eq!(AqiCategory::Good.severity_rank(), 0);
        assert_eq!(AqiCategory::Hazardous.severity_rank(), 5);
    }

    #[test]
    fn test_unhealthy_predicate() {
        assert!(!AqiCategory::Moderate.is_unhealthy());
        assert!(AqiCategory::UnhealthyForSensitiveGroups.is_unhealthy());
        assert!(AqiCategory::Hazardous.is_unhealthy());
    }

    #[test]
    fn test_labels() {
        assert_eq!(AqiCategory::Good.label(), "Good");
        assert_eq!(
            AqiCategory::UnhealthyForSensitiveGroups.to_string(),
            "Unhealthy for Sensitive Groups"
        );
    }
}

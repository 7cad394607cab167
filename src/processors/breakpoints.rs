use crate::utils::constants::{POLLUTANT_PM10, POLLUTANT_PM25};

/// One segment of a piecewise-linear concentration-to-AQI mapping.
///
/// Segments are contiguous: each segment's `conc_low` equals the previous
/// segment's `conc_high`, so interpolation is continuous at the joints.
/// Membership is inclusive at the upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointSegment {
    pub conc_low: f64,
    pub conc_high: f64,
    pub aqi_low: f64,
    pub aqi_high: f64,
}

const fn seg(conc_low: f64, conc_high: f64, aqi_low: f64, aqi_high: f64) -> BreakpointSegment {
    BreakpointSegment {
        conc_low,
        conc_high,
        aqi_low,
        aqi_high,
    }
}

/// PM2.5 breakpoints, µg/m³ over 24h.
pub const PM25_BREAKPOINTS: [BreakpointSegment; 6] = [
    seg(0.0, 12.0, 0.0, 50.0),
    seg(12.0, 35.4, 50.0, 100.0),
    seg(35.4, 55.4, 100.0, 150.0),
    seg(55.4, 150.4, 150.0, 200.0),
    seg(150.4, 250.4, 200.0, 300.0),
    seg(250.4, 500.4, 300.0, 500.0),
];

/// PM10 breakpoints, µg/m³ over 24h.
pub const PM10_BREAKPOINTS: [BreakpointSegment; 6] = [
    seg(0.0, 54.0, 0.0, 50.0),
    seg(54.0, 154.0, 50.0, 100.0),
    seg(154.0, 254.0, 100.0, 150.0),
    seg(254.0, 354.0, 150.0, 200.0),
    seg(354.0, 424.0, 200.0, 300.0),
    seg(424.0, 604.0, 300.0, 500.0),
];

/// Breakpoint table for a canonical pollutant name, `None` for pollutants
/// without a defined table.
pub fn breakpoints_for(pollutant: &str) -> Option<&'static [BreakpointSegment]> {
    match pollutant {
        POLLUTANT_PM25 => Some(&PM25_BREAKPOINTS),
        POLLUTANT_PM10 => Some(&PM10_BREAKPOINTS),
        _ => None,
    }
}

/// Piecewise-linear AQI estimate for a concentration.
///
/// Scans segments in ascending order and interpolates within the first
/// segment whose upper edge covers the concentration:
///
///   aqi = aqi_low + ((aqi_high - aqi_low) / (c_high - c_low)) * (c - c_low)
///
/// Concentrations beyond the last tabulated segment extrapolate along that
/// segment's slope, keeping the mapping total over [0, ∞). Non-finite or
/// non-positive concentrations estimate to 0.
pub fn estimate_aqi(concentration: f64, table: &[BreakpointSegment]) -> u32 {
    if !concentration.is_finite() || concentration <= 0.0 {
        return 0;
    }

    let segment = match table.iter().find(|s| concentration <= s.conc_high) {
        Some(s) => s,
        None => match table.last() {
            Some(s) => s,
            None => return 0,
        },
    };

    let slope = (segment.aqi_high - segment.aqi_low) / (segment.conc_high - segment.conc_low);
    let aqi = segment.aqi_low + slope * (concentration - segment.conc_low);

    aqi.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pm25_continuity_at_breakpoints() {
        assert_eq!(estimate_aqi(12.0, &PM25_BREAKPOINTS), 50);
        assert_eq!(estimate_aqi(12.0001, &PM25_BREAKPOINTS), 50);
        assert_eq!(estimate_aqi(35.4, &PM25_BREAKPOINTS), 100);
        assert_eq!(estimate_aqi(55.4, &PM25_BREAKPOINTS), 150);
        assert_eq!(estimate_aqi(150.4, &PM25_BREAKPOINTS), 200);
        assert_eq!(estimate_aqi(250.4, &PM25_BREAKPOINTS), 300);
        assert_eq!(estimate_aqi(500.4, &PM25_BREAKPOINTS), 500);
    }

    #[test]
    fn test_pm25_interior_values() {
        assert_eq!(estimate_aqi(6.0, &PM25_BREAKPOINTS), 25);
        // 100 + (50 / 20) * (40 - 35.4) = 111.5
        assert_eq!(estimate_aqi(40.0, &PM25_BREAKPOINTS), 112);
        assert_eq!(estimate_aqi(200.4, &PM25_BREAKPOINTS), 250);
    }

    #[test]
    fn test_degenerate_concentrations() {
        assert_eq!(estimate_aqi(0.0, &PM25_BREAKPOINTS), 0);
        assert_eq!(estimate_aqi(-5.0, &PM25_BREAKPOINTS), 0);
        assert_eq!(estimate_aqi(f64::NAN, &PM25_BREAKPOINTS), 0);
        assert_eq!(estimate_aqi(f64::INFINITY, &PM25_BREAKPOINTS), 0);
    }

    #[test]
    fn test_extrapolation_beyond_scale_top() {
        let at_top = estimate_aqi(500.4, &PM25_BREAKPOINTS);
        let beyond = estimate_aqi(625.4, &PM25_BREAKPOINTS);
        assert_eq!(at_top, 500);
        // Last segment slope is 200/250 = 0.8: 500 + 0.8 * 125 = 600
        assert_eq!(beyond, 600);
    }

    #[test]
    fn test_pm10_table() {
        assert_eq!(estimate_aqi(54.0, &PM10_BREAKPOINTS), 50);
        assert_eq!(estimate_aqi(78.5, &PM10_BREAKPOINTS), 62);
        assert_eq!(estimate_aqi(604.0, &PM10_BREAKPOINTS), 500);
    }

    #[test]
    fn test_table_lookup_by_pollutant() {
        assert!(breakpoints_for("PM2.5").is_some());
        assert!(breakpoints_for("PM10").is_some());
        assert!(breakpoints_for("O3").is_none());
        assert!(breakpoints_for("CO").is_none());
    }

    #[test]
    fn test_segments_are_contiguous() {
        for table in [&PM25_BREAKPOINTS, &PM10_BREAKPOINTS] {
            for pair in table.windows(2) {
                assert_eq!(pair[0].conc_high, pair[1].conc_low);
                assert_eq!(pair[0].aqi_high, pair[1].aqi_low);
            }
        }
    }
}

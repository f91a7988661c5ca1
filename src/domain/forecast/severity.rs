use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity band of a predicted AQI value.
///
/// Ordered from cleanest to worst air. Thresholds are inclusive upper bounds,
/// so a value sitting exactly on a boundary belongs to the lower band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityBand {
    Good,
    Moderate,
    Unhealthy,
    Hazardous,
}

/// Visual emphasis a band is presented with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emphasis {
    Informational,
    Cautionary,
    Critical,
}

impl SeverityBand {
    pub const GOOD_MAX: f64 = 50.0;
    pub const MODERATE_MAX: f64 = 100.0;
    pub const UNHEALTHY_MAX: f64 = 150.0;

    pub const ALL: [SeverityBand; 4] = [
        SeverityBand::Good,
        SeverityBand::Moderate,
        SeverityBand::Unhealthy,
        SeverityBand::Hazardous,
    ];

    /// Inclusive upper bound of the band; `Hazardous` is open-ended.
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            SeverityBand::Good => Some(Self::GOOD_MAX),
            SeverityBand::Moderate => Some(Self::MODERATE_MAX),
            SeverityBand::Unhealthy => Some(Self::UNHEALTHY_MAX),
            SeverityBand::Hazardous => None,
        }
    }

    /// First matching range wins. Anything that is not `<= 150` (including
    /// NaN) falls through to `Hazardous`; callers keep NaN out upstream.
    pub fn classify(aqi: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|band| band.upper_bound().is_none_or(|max| aqi <= max))
            .unwrap_or(SeverityBand::Hazardous)
    }

    pub fn emphasis(&self) -> Emphasis {
        match self {
            SeverityBand::Good => Emphasis::Informational,
            SeverityBand::Moderate | SeverityBand::Unhealthy => Emphasis::Cautionary,
            SeverityBand::Hazardous => Emphasis::Critical,
        }
    }

    /// Translation key for the status label
    pub fn label_key(&self) -> &'static str {
        match self {
            SeverityBand::Good => "status_good",
            SeverityBand::Moderate => "status_moderate",
            SeverityBand::Unhealthy => "status_unhealthy",
            SeverityBand::Hazardous => "status_hazardous",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SeverityBand::Good => "🍃",
            SeverityBand::Moderate => "🙂",
            SeverityBand::Unhealthy => "😷",
            SeverityBand::Hazardous => "☠",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeverityBand::Good => "Good",
            SeverityBand::Moderate => "Moderate",
            SeverityBand::Unhealthy => "Unhealthy",
            SeverityBand::Hazardous => "Hazardous",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries_map_to_lower_band() {
        assert_eq!(SeverityBand::classify(50.0), SeverityBand::Good);
        assert_eq!(SeverityBand::classify(50.01), SeverityBand::Moderate);
        assert_eq!(SeverityBand::classify(100.0), SeverityBand::Moderate);
        assert_eq!(SeverityBand::classify(100.01), SeverityBand::Unhealthy);
        assert_eq!(SeverityBand::classify(150.0), SeverityBand::Unhealthy);
        assert_eq!(SeverityBand::classify(150.01), SeverityBand::Hazardous);
    }

    #[test]
    fn test_negative_and_extreme_values() {
        assert_eq!(SeverityBand::classify(-20.0), SeverityBand::Good);
        assert_eq!(SeverityBand::classify(f64::MAX), SeverityBand::Hazardous);
        assert_eq!(SeverityBand::classify(f64::NEG_INFINITY), SeverityBand::Good);
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(SeverityBand::Good.emphasis(), Emphasis::Informational);
        assert_eq!(SeverityBand::Moderate.emphasis(), Emphasis::Cautionary);
        assert_eq!(SeverityBand::Unhealthy.emphasis(), Emphasis::Cautionary);
        assert_eq!(SeverityBand::Hazardous.emphasis(), Emphasis::Critical);
    }

    proptest! {
        #[test]
        fn classification_is_monotonic(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(SeverityBand::classify(lo) <= SeverityBand::classify(hi));
        }

        #[test]
        fn exactly_one_band_owns_each_value(v in -1000.0f64..1000.0) {
            let owners: Vec<SeverityBand> = SeverityBand::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, band)| {
                    let above_lower = *i == 0
                        || SeverityBand::ALL[*i - 1].upper_bound().is_some_and(|lo| v > lo);
                    let below_upper = band.upper_bound().is_none_or(|hi| v <= hi);
                    above_lower && below_upper
                })
                .map(|(_, band)| band)
                .collect();

            prop_assert_eq!(owners, vec![SeverityBand::classify(v)]);
        }

        #[test]
        fn every_value_lands_in_its_range(v in -1000.0f64..1000.0) {
            let band = SeverityBand::classify(v);
            let in_range = match band {
                SeverityBand::Good => v <= 50.0,
                SeverityBand::Moderate => v > 50.0 && v <= 100.0,
                SeverityBand::Unhealthy => v > 100.0 && v <= 150.0,
                SeverityBand::Hazardous => v > 150.0,
            };
            prop_assert!(in_range);
        }
    }
}

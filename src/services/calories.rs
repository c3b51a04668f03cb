// SPDX-License-Identifier: MIT

//! Static per-activity calorie burn rates.
//!
//! Interaction-layer configuration for prefilling `caloriesBurned` before
//! logging an activity. Callers may always supply their own figure; the
//! server validates nothing against this table.

/// kcal burned per minute, by activity label.
pub const ACTIVITY_CALORIE_RATES: &[(&str, f64)] = &[
    ("running", 10.0),
    ("walking", 4.0),
    ("cycling", 8.0),
    ("swimming", 9.0),
    ("weightlifting", 6.0),
    ("yoga", 3.0),
    ("hiit", 12.0),
    ("dancing", 7.0),
    ("sports", 8.0),
    ("other", 5.0),
];

const DEFAULT_RATE: f64 = 5.0;

/// Burn rate for an activity label; unknown labels get the "other" rate.
pub fn calories_per_minute(activity_type: &str) -> f64 {
    ACTIVITY_CALORIE_RATES
        .iter()
        .find(|(label, _)| *label == activity_type)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_RATE)
}

/// Estimate total burn for a duration in minutes.
pub fn estimate_calories_burned(activity_type: &str, duration_minutes: f64) -> f64 {
    calories_per_minute(activity_type) * duration_minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_rates() {
        assert_eq!(calories_per_minute("running"), 10.0);
        assert_eq!(calories_per_minute("yoga"), 3.0);
    }

    #[test]
    fn test_unknown_label_uses_default() {
        assert_eq!(calories_per_minute("curling"), DEFAULT_RATE);
    }

    #[test]
    fn test_estimate() {
        assert_eq!(estimate_calories_burned("cycling", 30.0), 240.0);
    }
}

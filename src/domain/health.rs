// Health score derived from an application's metrics
use super::metric::{AppMetrics, AVG_HOURLY_15_WORKDAYS, LAST_HOUR_COUNT};

/// Last hour's volume as a percentage of the 15-day hourly average.
///
/// Returns `0.0` when either metric is missing or the average is zero.
pub fn calculate_score(metrics: &AppMetrics) -> f64 {
    let last_hour = metrics.get(LAST_HOUR_COUNT);
    let average = metrics.get(AVG_HOURLY_15_WORKDAYS);

    match (last_hour, average) {
        (Some(&last_hour), Some(&average)) if average != 0.0 => last_hour / average * 100.0,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBand {
    Good,
    Warning,
    Critical,
}

impl StatusBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            StatusBand::Good
        } else if score >= 70.0 {
            StatusBand::Warning
        } else {
            StatusBand::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBand::Good => "good",
            StatusBand::Warning => "warning",
            StatusBand::Critical => "critical",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBand::Good => "status-good",
            StatusBand::Warning => "status-warning",
            StatusBand::Critical => "status-critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(pairs: &[(&str, f64)]) -> AppMetrics {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_score_missing_values() {
        assert_eq!(calculate_score(&AppMetrics::new()), 0.0);
        assert_eq!(calculate_score(&metrics(&[(LAST_HOUR_COUNT, 100.0)])), 0.0);
        assert_eq!(calculate_score(&metrics(&[(AVG_HOURLY_15_WORKDAYS, 100.0)])), 0.0);
    }

    #[test]
    fn test_score_zero_divisor() {
        let m = metrics(&[(LAST_HOUR_COUNT, 125.0), (AVG_HOURLY_15_WORKDAYS, 0.0)]);
        assert_eq!(calculate_score(&m), 0.0);
    }

    #[test]
    fn test_score_ratio() {
        let m = metrics(&[(LAST_HOUR_COUNT, 90.0), (AVG_HOURLY_15_WORKDAYS, 100.0)]);
        assert_eq!(calculate_score(&m), 90.0);
    }

    #[test]
    fn test_status_band_thresholds() {
        assert_eq!(StatusBand::from_score(95.0), StatusBand::Good);
        assert_eq!(StatusBand::from_score(90.0), StatusBand::Good);
        assert_eq!(StatusBand::from_score(75.0), StatusBand::Warning);
        assert_eq!(StatusBand::from_score(70.0), StatusBand::Warning);
        assert_eq!(StatusBand::from_score(50.0), StatusBand::Critical);
        assert_eq!(StatusBand::from_score(95.0).label(), "good");
        assert_eq!(StatusBand::from_score(50.0).css_class(), "status-critical");
    }
}

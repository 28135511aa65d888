// Metric domain model and grouping
use std::collections::HashMap;

/// Metric code for the request count over the last hour.
pub const LAST_HOUR_COUNT: &str = "last_hr_count";
/// Metric code for the average hourly count over the last 15 working days.
pub const AVG_HOURLY_15_WORKDAYS: &str = "avg_1hr_15wd";

/// metric_code -> value for one application
pub type AppMetrics = HashMap<String, f64>;
/// app_code -> metrics
pub type MetricsByApp = HashMap<String, AppMetrics>;

/// One `(app_code, metric_code, value)` row as produced by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub app_code: String,
    pub metric_code: String,
    pub value: f64,
}

impl Metric {
    pub fn new(app_code: impl Into<String>, metric_code: impl Into<String>, value: f64) -> Self {
        Self {
            app_code: app_code.into(),
            metric_code: metric_code.into(),
            value,
        }
    }
}

/// Group a flat metric list into `app_code -> metric_code -> value`.
///
/// Duplicate `(app_code, metric_code)` pairs keep the last value seen.
/// Metrics for app codes with no known application are kept as-is.
pub fn group_metrics_by_application(metrics: Vec<Metric>) -> MetricsByApp {
    let mut grouped = MetricsByApp::new();

    for metric in metrics {
        let app_metrics = grouped.entry(metric.app_code).or_default();
        if let Some(previous) = app_metrics.insert(metric.metric_code, metric.value) {
            tracing::debug!("Duplicate metric row overwrote previous value {}", previous);
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> Vec<Metric> {
        vec![
            Metric::new("orders", AVG_HOURLY_15_WORKDAYS, 82.0),
            Metric::new("orders", LAST_HOUR_COUNT, 78.0),
            Metric::new("payments", AVG_HOURLY_15_WORKDAYS, 110.0),
            Metric::new("payments", LAST_HOUR_COUNT, 125.0),
            Metric::new("payments", "error_count", 3.0),
        ]
    }

    #[test]
    fn test_group_keys_match_distinct_codes() {
        let metrics = sample();
        let expected_apps: HashSet<String> = metrics.iter().map(|m| m.app_code.clone()).collect();

        let grouped = group_metrics_by_application(metrics.clone());

        let apps: HashSet<String> = grouped.keys().cloned().collect();
        assert_eq!(apps, expected_apps);

        for (app, inner) in &grouped {
            let expected: HashSet<&str> = metrics
                .iter()
                .filter(|m| &m.app_code == app)
                .map(|m| m.metric_code.as_str())
                .collect();
            let actual: HashSet<&str> = inner.keys().map(String::as_str).collect();
            assert_eq!(actual, expected, "metric codes for {}", app);
        }

        assert_eq!(grouped["payments"][LAST_HOUR_COUNT], 125.0);
        assert_eq!(grouped["orders"][AVG_HOURLY_15_WORKDAYS], 82.0);
    }

    #[test]
    fn test_group_empty() {
        assert!(group_metrics_by_application(Vec::new()).is_empty());
    }

    #[test]
    fn test_duplicate_pair_last_write_wins() {
        let grouped = group_metrics_by_application(vec![
            Metric::new("orders", LAST_HOUR_COUNT, 10.0),
            Metric::new("orders", LAST_HOUR_COUNT, 20.0),
        ]);

        assert_eq!(grouped["orders"].len(), 1);
        assert_eq!(grouped["orders"][LAST_HOUR_COUNT], 20.0);
    }
}

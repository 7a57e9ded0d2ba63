//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Monthly revenue series from the API, replaced wholesale on each fetch
    pub revenue: RwSignal<Vec<RevenuePoint>>,
    /// Lifecycle phase of the revenue chart
    pub chart_phase: RwSignal<ChartPhase>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// One month of revenue as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: f64,
}

/// Lifecycle of the revenue chart surface.
///
/// `Rendered` and `Error` both re-enter `Loading` on the next refresh
/// trigger or retry click.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartPhase {
    Idle,
    Loading,
    Rendered,
    Error(String),
}

/// Month labels in series order
pub fn month_labels(series: &[RevenuePoint]) -> Vec<String> {
    series.iter().map(|p| p.month.clone()).collect()
}

/// Revenue values in series order
pub fn revenue_values(series: &[RevenuePoint]) -> Vec<f64> {
    series.iter().map(|p| p.revenue).collect()
}

/// Sum over the whole series
pub fn total_revenue(series: &[RevenuePoint]) -> f64 {
    series.iter().map(|p| p.revenue).sum()
}

/// Mean monthly revenue, `None` for an empty series
pub fn average_revenue(series: &[RevenuePoint]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(total_revenue(series) / series.len() as f64)
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        revenue: create_rw_signal(Vec::new()),
        chart_phase: create_rw_signal(ChartPhase::Idle),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Revenue of the most recent month in the fetched series
    pub fn latest_revenue(&self) -> Option<f64> {
        self.revenue.get().last().map(|p| p.revenue)
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> Vec<RevenuePoint> {
        serde_json::from_str(
            r#"[{"month":"Jan","revenue":1000},{"month":"Feb","revenue":2000}]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_series_parses_in_order() {
        let series = sample_series();
        assert_eq!(month_labels(&series), vec!["Jan", "Feb"]);
        assert_eq!(revenue_values(&series), vec![1000.0, 2000.0]);
    }

    #[test]
    fn test_revenue_accepts_integer_json() {
        // The server serializes whole amounts without a decimal point
        let point: RevenuePoint = serde_json::from_str(r#"{"month":"March","revenue":750}"#).unwrap();
        assert_eq!(point.revenue, 750.0);
    }

    #[test]
    fn test_total_and_average() {
        let series = sample_series();
        assert_eq!(total_revenue(&series), 3000.0);
        assert_eq!(average_revenue(&series), Some(1500.0));
    }

    #[test]
    fn test_average_of_empty_series() {
        assert_eq!(average_revenue(&[]), None);
        assert_eq!(total_revenue(&[]), 0.0);
    }
}

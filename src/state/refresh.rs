//! Chart Refresh Lifecycle
//!
//! Drives the revenue chart through its loading/rendered/error phases and
//! schedules periodic refreshes. Every trigger (page load, timer tick,
//! visibility change, retry click) funnels through [`refresh_revenue_chart`].

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::state::global::{ChartPhase, GlobalState};

/// Refresh cadence, shared by the timer and the staleness policy
pub const REFRESH_INTERVAL_MS: u32 = 5 * 60 * 1000;

/// Browser storage key holding the last refresh time in epoch milliseconds
pub const LAST_REFRESH_KEY: &str = "dashboardLastRefresh";

/// Refresh entry point.
///
/// Enters `Loading`, issues one GET for the series, and settles in
/// `Rendered` or `Error`. Concurrent invocations are neither queued nor
/// cancelled: racing fetches overwrite the same signals, so the last
/// response to resolve determines the final state.
pub fn refresh_revenue_chart(state: GlobalState) {
    let was_error = matches!(state.chart_phase.get_untracked(), ChartPhase::Error(_));
    state.chart_phase.set(ChartPhase::Loading);
    record_last_refresh(chrono::Utc::now().timestamp_millis());

    spawn_local(async move {
        match api::fetch_revenue_data().await {
            Ok(series) => {
                // Supersede the previous series, never merge
                state.revenue.set(series);
                state.chart_phase.set(ChartPhase::Rendered);
                if was_error {
                    state.show_success("Revenue data refreshed");
                }
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Error loading revenue data: {}", e).into(),
                );
                state.chart_phase.set(ChartPhase::Error(e));
            }
        }
    });
}

/// Whether a newly visible page should refresh immediately.
///
/// Stale means strictly more than the refresh interval has elapsed since
/// `last`; exactly at the boundary does not count. A missing timestamp is
/// always stale.
pub fn is_stale(last: Option<i64>, now_ms: i64) -> bool {
    match last {
        Some(t) => now_ms - t > REFRESH_INTERVAL_MS as i64,
        None => true,
    }
}

/// Read the stored last-refresh timestamp; unreadable or unparseable
/// values count as absent
pub fn stored_last_refresh() -> Option<i64> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(LAST_REFRESH_KEY).ok()??;
    raw.parse().ok()
}

fn record_last_refresh(now_ms: i64) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(LAST_REFRESH_KEY, &now_ms.to_string());
        }
    }
}

/// Install the fixed-interval refresh timer and the visibility listener.
/// Call once from the app root.
pub fn init_auto_refresh(state: GlobalState) {
    // Timer ticks are skipped entirely while the document is hidden
    let state_for_tick = state.clone();
    gloo_timers::callback::Interval::new(REFRESH_INTERVAL_MS, move || {
        let hidden = web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.hidden())
            .unwrap_or(true);
        if hidden {
            return;
        }
        refresh_revenue_chart(state_for_tick.clone());
    })
    .forget();

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    // When the page becomes visible again, refresh only if the stored
    // timestamp has gone stale in the meantime
    let doc_for_listener = document.clone();
    let on_visibility = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if doc_for_listener.hidden() {
            return;
        }
        let now = chrono::Utc::now().timestamp_millis();
        if is_stale(stored_last_refresh(), now) {
            refresh_revenue_chart(state.clone());
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = document.add_event_listener_with_callback(
        "visibilitychange",
        on_visibility.as_ref().unchecked_ref(),
    );
    on_visibility.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: i64 = REFRESH_INTERVAL_MS as i64;

    #[test]
    fn test_missing_timestamp_is_stale() {
        assert!(is_stale(None, 1_000_000));
    }

    #[test]
    fn test_recent_timestamp_is_fresh() {
        let now = 10 * INTERVAL;
        assert!(!is_stale(Some(now - 1), now));
        assert!(!is_stale(Some(now), now));
    }

    #[test]
    fn test_old_timestamp_is_stale() {
        let now = 10 * INTERVAL;
        assert!(is_stale(Some(now - INTERVAL - 1), now));
    }

    #[test]
    fn test_exact_boundary_is_not_stale() {
        // Pinned: exactly five minutes elapsed does not force a refresh
        let now = 10 * INTERVAL;
        assert!(!is_stale(Some(now - INTERVAL), now));
    }
}

//! Loading Component
//!
//! Spinner primitives shared by the chart and page placeholders.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="loading-spinner w-8 h-8" />
    }
}

//! Rooms Page

use leptos::*;

/// Rooms section landing page
#[component]
pub fn Rooms() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Rooms"</h1>
                <p class="text-gray-500 mt-1">"Manage rooms, availability, and pricing"</p>
            </div>

            // Status legend
            <div class="flex flex-wrap gap-3">
                <StatusBadge label="Available" color="bg-green-100 text-green-800" />
                <StatusBadge label="Occupied" color="bg-blue-100 text-blue-800" />
                <StatusBadge label="Maintenance" color="bg-amber-100 text-amber-800" />
            </div>

            <div class="bg-white rounded-xl p-12 shadow text-center text-gray-400">
                "Room listings are served by the management pages"
            </div>
        </div>
    }
}

#[component]
fn StatusBadge(
    label: &'static str,
    color: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("px-3 py-1 rounded-full text-sm font-medium {}", color)>
            {label}
        </span>
    }
}

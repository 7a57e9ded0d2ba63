//! Tenants Page

use leptos::*;
use leptos_router::*;

/// Tenants section landing page
#[component]
pub fn Tenants() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Tenants"</h1>
                    <p class="text-gray-500 mt-1">"Active tenants and their rooms"</p>
                </div>

                <A
                    href="/rooms"
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Assign a Room"
                </A>
            </div>

            <div class="bg-white rounded-xl p-12 shadow text-center text-gray-400">
                "Tenant records are served by the management pages"
            </div>
        </div>
    }
}

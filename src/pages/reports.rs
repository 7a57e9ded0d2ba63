//! Financial Reports Page

use leptos::*;

use crate::components::RevenueChart;

/// Financial reports page; reuses the dashboard's revenue chart so the
/// series stays live here too
#[component]
pub fn FinancialReports() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Financial Reports"</h1>
                <p class="text-gray-500 mt-1">"Revenue over the last six months"</p>
            </div>

            <section class="bg-white rounded-xl p-6 shadow">
                <h2 class="text-xl font-semibold mb-4">"Monthly Revenue"</h2>
                <RevenueChart />
            </section>
        </div>
    }
}

//! Dashboard Page
//!
//! Main dashboard view: summary cards, revenue chart, and quick actions.

use leptos::*;

use crate::components::{QuickActions, RevenueChart, StatCard};
use crate::format::{format_currency, format_percentage};
use crate::state::global::{average_revenue, total_revenue, GlobalState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_value = state.clone();
    let monthly_revenue = Signal::derive(move || {
        state_for_value.latest_revenue().map(format_currency)
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-500 mt-1">"Your boarding house at a glance"</p>
            </div>

            // Summary cards, each linking into its section
            <section>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <StatCard
                        title="Total Rooms"
                        value={Option::<String>::None}
                        icon="🏠"
                        accent="bg-blue-600"
                        href="/rooms"
                    />
                    <StatCard
                        title="Active Tenants"
                        value={Option::<String>::None}
                        icon="👥"
                        accent="bg-green-600"
                        href="/tenants"
                    />
                    <StatCard
                        title="Revenue This Month"
                        value=monthly_revenue
                        icon="💵"
                        accent="bg-cyan-600"
                        href="/reports/financial"
                    />
                    <StatCard
                        title="Pending Payments"
                        value={Option::<String>::None}
                        icon="⏳"
                        accent="bg-amber-500"
                        href="/reports/financial"
                    />
                </div>
            </section>

            // Revenue chart
            <section class="bg-white rounded-xl p-6 shadow">
                <h2 class="text-xl font-semibold mb-4">"Monthly Revenue"</h2>
                <RevenueChart />
                <RevenueSummary />
            </section>

            // Quick actions
            <section>
                <h2 class="text-lg font-semibold mb-4">"Quick Actions"</h2>
                <QuickActions />
            </section>
        </div>
    }
}

/// Totals strip under the chart
#[component]
fn RevenueSummary() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let revenue = state.revenue;

    // Latest month vs the series average, as a signed percentage
    let trend = create_memo(move |_| {
        let series = revenue.get();
        let avg = average_revenue(&series)?;
        if avg == 0.0 {
            return None;
        }
        let latest = series.last()?.revenue;
        Some((latest - avg) / avg * 100.0)
    });

    view! {
        <div class="flex justify-center flex-wrap gap-8 mt-4 text-sm text-gray-500">
            <div>
                "Total: "
                <span class="font-semibold text-gray-900">
                    {move || format_currency(total_revenue(&revenue.get()))}
                </span>
            </div>
            <div>
                "Monthly average: "
                <span class="font-semibold text-gray-900">
                    {move || {
                        average_revenue(&revenue.get())
                            .map(format_currency)
                            .unwrap_or_else(|| "—".to_string())
                    }}
                </span>
            </div>
            <div>
                "Latest vs average: "
                {move || {
                    match trend.get() {
                        Some(pct) => {
                            let (arrow, color) = if pct > 0.0 {
                                ("↑", "text-green-600")
                            } else if pct < 0.0 {
                                ("↓", "text-red-600")
                            } else {
                                ("→", "text-gray-500")
                            };
                            view! {
                                <span class=format!("font-semibold {}", color)>
                                    {arrow} " " {format_percentage(pct.abs())}
                                </span>
                            }.into_view()
                        }
                        None => view! {
                            <span class="text-gray-400">"—"</span>
                        }.into_view(),
                    }
                }}
            </div>
        </div>
    }
}

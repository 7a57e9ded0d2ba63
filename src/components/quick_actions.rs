//! Quick Actions
//!
//! Shortcut buttons for the common management flows.

use leptos::*;
use leptos_router::*;

/// Quick action row shown under the chart
#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <QuickAction label="Add Room" icon="🏠" href="/rooms" />
            <QuickAction label="Register Tenant" icon="👥" href="/tenants" />
            <QuickAction label="Record Payment" icon="💵" href="/reports/financial" />
            <QuickAction label="Financial Reports" icon="📈" href="/reports/financial" />
        </div>
    }
}

#[component]
fn QuickAction(
    label: &'static str,
    icon: &'static str,
    href: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex flex-col items-center justify-center bg-white rounded-lg py-6 shadow
                   transition-transform duration-200 hover:scale-105"
        >
            <span class="text-3xl mb-2">{icon}</span>
            <span class="text-sm font-medium text-gray-700">{label}</span>
        </A>
    }
}

//! Stat Card Component
//!
//! Dashboard summary cards that double as navigation into their section.

use leptos::*;
use leptos_router::*;

/// Summary statistic card linking to its detail page.
///
/// Each card carries an explicit route target rather than deriving one from
/// its text content. A dash placeholder is shown while no value is known.
#[component]
pub fn StatCard(
    /// Card title
    title: &'static str,
    /// Pre-formatted display value
    #[prop(into)]
    value: MaybeSignal<Option<String>>,
    /// Icon shown opposite the title
    icon: &'static str,
    /// Accent background classes
    accent: &'static str,
    /// Route navigated to on click
    href: &'static str,
) -> impl IntoView {
    view! {
        <A href=href class="block">
            <div class=format!(
                "{} rounded-lg p-4 text-white cursor-pointer shadow \
                 transition-all duration-200 hover:-translate-y-0.5 hover:shadow-lg",
                accent
            )>
                <div class="flex items-center justify-between">
                    <span class="text-sm opacity-80">{title}</span>
                    <span class="text-2xl">{icon}</span>
                </div>
                <div class="text-3xl font-bold mt-2">
                    {move || value.get().unwrap_or_else(|| "—".to_string())}
                </div>
            </div>
        </A>
    }
}

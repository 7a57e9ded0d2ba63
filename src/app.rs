//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, FinancialReports, Rooms, Tenants};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::refresh::init_auto_refresh;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Background refresh timer + visibility listener
    init_auto_refresh(state.clone());

    // Catch-all toast for uncaught script errors
    install_error_hook(state);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/rooms" view=Rooms />
                        <Route path="/tenants" view=Tenants />
                        <Route path="/reports/financial" view=FinancialReports />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Show one generic toast for any uncaught script error. Nothing here is
/// fatal to the page.
fn install_error_hook(state: GlobalState) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    let on_error = Closure::wrap(Box::new(move |event: web_sys::ErrorEvent| {
        web_sys::console::error_1(&format!("Dashboard error: {}", event.message()).into());
        state.show_error(
            "An error occurred while loading dashboard data. Please refresh the page.",
        );
    }) as Box<dyn FnMut(web_sys::ErrorEvent)>);

    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

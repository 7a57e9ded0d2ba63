//! Kos Dashboard
//!
//! Boarding House Management Dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Monthly revenue chart with loading/error lifecycle and manual retry
//! - Periodic background refresh with a visibility-aware staleness policy
//! - Summary cards linking into rooms, tenants, and financial reports
//! - Toast notifications for successes, errors, and uncaught script errors
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the management server via a single JSON
//! endpoint and keeps all other state in browser memory.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

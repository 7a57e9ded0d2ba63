//! HTTP API
//!
//! Client functions for the management server endpoints.

pub mod client;

pub use client::*;

//! State Management
//!
//! Global application state and the chart refresh lifecycle.

pub mod global;
pub mod refresh;

pub use global::{provide_global_state, ChartPhase, GlobalState, RevenuePoint};

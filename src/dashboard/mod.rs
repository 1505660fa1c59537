//! Dashboard module - fault-isolated fetch fan-out, summary composition,
//! and the per-domain detail views.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;
mod fetcher;

pub use dashboard_model::*;
pub use dashboard_service::{DashboardConfig, DashboardService};
pub use dashboard_traits::DashboardServiceTrait;
pub use fetcher::{settle, Settled};

#[cfg(test)]
mod dashboard_service_tests;

//! Analytics summary records.

use serde::{Deserialize, Serialize};

/// Aggregate e-commerce metrics for the dashboard.
///
/// Fetched independently of the resource collections: it has no loading
/// flag of its own and is simply absent until the first successful fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalyticsSummary {
    /// Number of orders placed in the reporting window.
    pub total_orders: u64,

    /// Revenue across those orders.
    pub total_revenue: f64,

    /// Revenue net of commission.
    pub net_profit: f64,
}

/// Envelope the backend wraps the analytics summary in.
#[derive(Debug, Deserialize)]
pub(crate) struct AnalyticsReport {
    pub(crate) summary: AnalyticsSummary,
}

//! Typed records for the backend resource API.
//!
//! This module provides the wire-facing record types the resource store
//! caches: catalog products, categories, basket lines, orders, and the
//! analytics summary.
//!
//! # Overview
//!
//! - [`Product`] / [`ProductFilter`]: catalog items and their fetch filter
//! - [`Category`]: product categories
//! - [`BasketLine`]: basket contents, keyed by product
//! - [`Order`] / [`OrderStatus`]: order history
//! - [`AnalyticsSummary`]: dashboard aggregate, fetched independently
//!
//! All records derive `Serialize`/`Deserialize` and tolerate sparse
//! backend responses where fields are optional.

mod analytics;
mod basket;
mod category;
mod order;
mod product;

pub use analytics::AnalyticsSummary;
pub(crate) use analytics::AnalyticsReport;
pub use basket::BasketLine;
pub use category::Category;
pub use order::{Order, OrderStatus};
pub use product::{Product, ProductFilter};

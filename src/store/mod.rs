//! The client-side resource store.
//!
//! This module provides [`ResourceStore`]: the single owner of all cached
//! backend collections (catalog, categories, basket, orders) and the
//! analytics summary, with per-resource loading/error tracking and
//! deterministic handling of overlapping fetches.
//!
//! # Ownership
//!
//! The store exclusively owns its collection state. Consumers read
//! [`CollectionSnapshot`]s and mutate only through the store's named
//! operations — there is no direct write access.
//!
//! # Overlapping Fetches
//!
//! Two fetches for the same resource kind can be in flight at once (a user
//! retypes a search before the first query returns). Completions apply
//! **last-write-wins by completion order, not invocation order**: every
//! invocation is stamped with a monotonically increasing sequence number at
//! issue time, and a completion is discarded when a higher-sequence
//! invocation for the same kind has already completed. Discarded (stale)
//! results are logged at debug level and never surface as errors.
//!
//! # Error Handling
//!
//! Fetch failures never propagate: they are caught at the call site,
//! logged, and recorded as the collection's error while the previously
//! loaded items stay intact (stale-but-valid). The basket mutation is the
//! exception — it returns a [`StoreError`] so callers can distinguish the
//! synchronous authorization failure from a network failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use accountrix_client::{ResourceStore, SessionHandle};
//! use accountrix_client::resources::ProductFilter;
//!
//! let session = SessionHandle::new();
//! let store = ResourceStore::new(&config, session.clone());
//!
//! store.fetch_products(Some(&ProductFilter::new().search("chair"))).await;
//! let catalog = store.products();
//! assert!(!catalog.loading);
//! ```

mod collection;
mod error;

pub use collection::{CollectionSnapshot, ResourceKind};
pub use error::StoreError;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;

use crate::auth::{SessionHandle, SessionState};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::ClientConfig;
use crate::resources::{
    AnalyticsReport, AnalyticsSummary, BasketLine, Category, Order, Product, ProductFilter,
};
use collection::CollectionState;

/// Analytics summary state: a nullable aggregate plus its own error,
/// independent of any collection's loading flag.
#[derive(Debug, Default)]
struct AnalyticsState {
    summary: Option<AnalyticsSummary>,
    error: Option<String>,
    applied_seq: u64,
}

/// All mutable store state, behind one lock.
#[derive(Debug, Default)]
struct StoreState {
    products: CollectionState<Product>,
    categories: CollectionState<Category>,
    basket: CollectionState<BasketLine>,
    orders: CollectionState<Order>,
    analytics: AnalyticsState,
}

/// The client-side cache of backend resource collections.
///
/// One instance serves the whole application. All operations are `&self`;
/// the store is safe to share across async tasks, and interleaved
/// completions resolve deterministically (see the module docs).
///
/// # Thread Safety
///
/// `ResourceStore` is `Send + Sync`. The internal lock is never held
/// across an `.await`.
#[derive(Debug)]
pub struct ResourceStore {
    client: HttpClient,
    session: SessionHandle,
    state: Mutex<StoreState>,
    next_seq: AtomicU64,
}

// Verify ResourceStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceStore>();
};

impl ResourceStore {
    /// Creates a store bound to the given configuration and session.
    ///
    /// The session is only read, never written: the store uses it to gate
    /// the basket mutation and to attach the delegated access token to
    /// backend requests when one is present.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionHandle) -> Self {
        Self {
            client: HttpClient::new(config),
            session,
            state: Mutex::new(StoreState::default()),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Returns the session handle this store reads.
    #[must_use]
    pub const fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Fetches the catalog, optionally filtered by search term and category.
    ///
    /// Sets the catalog's loading flag for the duration of the call. On
    /// success the items are replaced and any prior error cleared; on
    /// failure the previous items stay and the error is recorded. A result
    /// superseded by a later-issued fetch is discarded.
    pub async fn fetch_products(&self, filter: Option<&ProductFilter>) {
        let query = filter
            .map(ProductFilter::to_query)
            .filter(|params| !params.is_empty());
        let request = HttpRequest {
            http_method: HttpMethod::Get,
            path: "/products/".to_string(),
            body: None,
            query,
            tries: 1,
        };

        self.fetch_collection(ResourceKind::Products, request, |state| {
            &mut state.products
        })
        .await;
    }

    /// Fetches the category list.
    pub async fn fetch_categories(&self) {
        let request = get_request("/categories/");
        self.fetch_collection(ResourceKind::Categories, request, |state| {
            &mut state.categories
        })
        .await;
    }

    /// Fetches the basket contents.
    pub async fn fetch_basket(&self) {
        let request = get_request("/cart/");
        self.fetch_collection(ResourceKind::Basket, request, |state| &mut state.basket)
            .await;
    }

    /// Fetches the order history.
    pub async fn fetch_orders(&self) {
        let request = get_request("/orders/");
        self.fetch_collection(ResourceKind::Orders, request, |state| &mut state.orders)
            .await;
    }

    /// Fetches the analytics summary.
    ///
    /// Independent of every collection's loading flag: the summary is
    /// simply absent until the first successful fetch. Failures record an
    /// error without clearing a previously fetched summary, and stale
    /// completions are discarded like any other resource kind.
    pub async fn fetch_analytics_summary(&self) {
        let seq = self.stamp();
        let request = get_request("/reports/ecommerce-analytics/");
        let result = self.execute::<AnalyticsReport>(&request).await;

        let mut state = self.lock();
        let analytics = &mut state.analytics;
        if seq <= analytics.applied_seq {
            tracing::debug!("Discarding stale {} result", ResourceKind::Analytics);
            return;
        }
        analytics.applied_seq = seq;
        match result {
            Ok(report) => {
                analytics.summary = Some(report.summary);
                analytics.error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {e}", ResourceKind::Analytics);
                analytics.error = Some(e.to_string());
            }
        }
    }

    /// Adds a product to the basket, merging quantities per product.
    ///
    /// Preconditions, checked in order:
    ///
    /// 1. The session must be `Authenticated` — otherwise
    ///    [`StoreError::Unauthorized`] is returned synchronously and no
    ///    network call is made. A `Loading` session is not authenticated.
    /// 2. Stock is advisory at this layer: callers are expected to
    ///    pre-check [`Self::known_stock`], but the store accepts the call
    ///    either way and lets the backend decide.
    ///
    /// On success the quantity is merged into the existing basket line for
    /// the same product (never duplicating lines). On failure the basket
    /// items are untouched, the error is recorded on the basket collection,
    /// and the error is returned.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Unauthorized`] without a session
    /// - [`StoreError::Http`] when the network write fails
    pub async fn add_to_basket(&self, product_id: u64, quantity: u32) -> Result<(), StoreError> {
        let token = match self.session.current() {
            SessionState::Authenticated(token) => token,
            SessionState::Loading | SessionState::Unauthenticated => {
                return Err(StoreError::Unauthorized);
            }
        };

        let request = HttpRequest::builder(HttpMethod::Post, "/cart/add/")
            .body(serde_json::json!({
                "product_id": product_id,
                "quantity": quantity,
            }))
            .build()
            .map_err(HttpError::from)?;

        let bearer = token.delegated_access_token.as_deref();
        match self.client.request(&request, bearer).await {
            Ok(_) => {
                let mut state = self.lock();
                let lines = state.basket.items_mut();
                if let Some(line) = lines.iter_mut().find(|line| line.product_id == product_id) {
                    line.quantity += quantity;
                } else {
                    lines.push(BasketLine::new(product_id, quantity));
                }
                state.basket.clear_error();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to add product {product_id} to basket: {e}");
                self.lock().basket.record_error(e.to_string());
                Err(StoreError::Http(e))
            }
        }
    }

    /// Returns the last-known stock for a product from the catalog cache.
    ///
    /// `None` when the product is not in the cached catalog. Advisory
    /// only — the cache may be stale.
    #[must_use]
    pub fn known_stock(&self, product_id: u64) -> Option<u32> {
        self.lock()
            .products
            .items()
            .iter()
            .find(|product| product.id == product_id)
            .map(|product| product.stock_quantity)
    }

    /// Returns a snapshot of the catalog collection.
    #[must_use]
    pub fn products(&self) -> CollectionSnapshot<Product> {
        self.lock().products.snapshot()
    }

    /// Returns a snapshot of the category collection.
    #[must_use]
    pub fn categories(&self) -> CollectionSnapshot<Category> {
        self.lock().categories.snapshot()
    }

    /// Returns a snapshot of the basket collection.
    #[must_use]
    pub fn basket(&self) -> CollectionSnapshot<BasketLine> {
        self.lock().basket.snapshot()
    }

    /// Returns a snapshot of the order collection.
    #[must_use]
    pub fn orders(&self) -> CollectionSnapshot<Order> {
        self.lock().orders.snapshot()
    }

    /// Returns the analytics summary, if one has been fetched.
    #[must_use]
    pub fn analytics_summary(&self) -> Option<AnalyticsSummary> {
        self.lock().analytics.summary
    }

    /// Returns the analytics fetch error, if the latest fetch failed.
    #[must_use]
    pub fn analytics_error(&self) -> Option<String> {
        self.lock().analytics.error.clone()
    }

    /// Issues the next fetch sequence number.
    fn stamp(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Shared fetch driver: stamps the invocation, flips the loading flag,
    /// performs the read, and applies the completion under the watermark
    /// rule.
    async fn fetch_collection<T>(
        &self,
        kind: ResourceKind,
        request: HttpRequest,
        select: fn(&mut StoreState) -> &mut CollectionState<T>,
    ) where
        T: DeserializeOwned + Clone,
    {
        let seq = self.stamp();
        select(&mut self.lock()).begin_fetch();

        let result = self.execute::<Vec<T>>(&request).await;

        let mut state = self.lock();
        let collection = select(&mut state);
        let applied = match result {
            Ok(items) => collection.complete(seq, Ok(items)),
            Err(e) => {
                tracing::warn!("Failed to fetch {kind}: {e}");
                collection.complete(seq, Err(e.to_string()))
            }
        };
        if !applied {
            tracing::debug!("Discarding stale {kind} result (seq {seq})");
        }
    }

    /// Sends a request with the session's delegated token attached, and
    /// parses the JSON response body.
    async fn execute<T: DeserializeOwned>(&self, request: &HttpRequest) -> Result<T, HttpError> {
        let token = self.session.token();
        let bearer = token
            .as_ref()
            .and_then(|token| token.delegated_access_token.as_deref());
        let response = self.client.request(request, bearer).await?;
        Ok(response.parse::<T>()?)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builds a plain GET request for a fixed path.
fn get_request(path: &str) -> HttpRequest {
    HttpRequest {
        http_method: HttpMethod::Get,
        path: path.to_string(),
        body: None,
        query: None,
        tries: 1,
    }
}
